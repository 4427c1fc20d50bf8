use chrono::{DateTime, FixedOffset};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use tracing::warn;

use crate::error::BookingError;
use crate::models::appointment::Appointment;
use crate::models::slot::SlotWindow;
use crate::scheduling::constants::MAX_REFERENCE_ATTEMPTS;
use crate::scheduling::slot_id::SlotId;

#[derive(Default)]
struct LedgerState {
    by_slot: HashMap<SlotId, Appointment>,
    references: HashSet<String>,
}

/// In-memory record of confirmed appointments.
///
/// A provider never holds two appointments whose windows overlap, and
/// reference numbers are unique across the ledger.
#[derive(Default)]
pub struct AppointmentLedger {
    state: RwLock<LedgerState>,
}

impl AppointmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `appointment` against `slot`. A reference number already in
    /// use is replaced with one drawn from `redraw_reference`.
    pub async fn reserve<F>(
        &self,
        slot: SlotId,
        mut appointment: Appointment,
        mut redraw_reference: F,
    ) -> Result<Appointment, BookingError>
    where
        F: FnMut() -> String,
    {
        let mut state = self.state.write().await;

        let taken = state.by_slot.contains_key(&slot)
            || state.by_slot.values().any(|booked| {
                booked.provider.id == appointment.provider.id
                    && booked.slot.overlaps(&appointment.slot)
            });
        if taken {
            return Err(BookingError::SlotAlreadyBooked(slot.to_string()));
        }

        let mut attempts = 1;
        while state.references.contains(&appointment.reference_number) {
            if attempts >= MAX_REFERENCE_ATTEMPTS {
                return Err(BookingError::Internal(
                    "could not allocate a unique reference number".to_string(),
                ));
            }
            warn!(
                "reference {} already issued, drawing another",
                appointment.reference_number
            );
            appointment.reference_number = redraw_reference();
            attempts += 1;
        }

        state
            .references
            .insert(appointment.reference_number.clone());
        state.by_slot.insert(slot, appointment.clone());

        Ok(appointment)
    }

    pub async fn booked_windows(&self, provider_id: &str) -> Vec<SlotWindow> {
        let state = self.state.read().await;
        state
            .by_slot
            .values()
            .filter(|appointment| appointment.provider.id == provider_id)
            .map(|appointment| appointment.slot)
            .collect()
    }

    /// Appointments of one provider starting within `[from, until)`, earliest first.
    pub async fn appointments_for(
        &self,
        provider_id: &str,
        from: DateTime<FixedOffset>,
        until: DateTime<FixedOffset>,
    ) -> Vec<Appointment> {
        let state = self.state.read().await;
        let mut appointments: Vec<Appointment> = state
            .by_slot
            .values()
            .filter(|appointment| appointment.provider.id == provider_id)
            .filter(|appointment| {
                appointment.slot.start_time >= from && appointment.slot.start_time < until
            })
            .cloned()
            .collect();

        appointments.sort_by_key(|appointment| appointment.slot.start_time);
        appointments
    }

    pub async fn appointment_count(&self) -> usize {
        self.state.read().await.by_slot.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::AppointmentStatus;
    use crate::models::patient::PatientInfo;
    use crate::models::provider::{ProviderSummary, find_provider};
    use chrono::{Duration, TimeZone};

    fn start_at(hour: u32, minute: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 10, 15, hour, minute, 0)
            .unwrap()
    }

    fn appointment_at(
        provider_id: &str,
        start: DateTime<FixedOffset>,
        reference: &str,
    ) -> Appointment {
        Appointment {
            id: format!("appointment-{}", start.timestamp_millis()),
            reference_number: reference.to_string(),
            status: AppointmentStatus::Confirmed,
            slot: SlotWindow::starting_at(start),
            provider: ProviderSummary::from(find_provider(provider_id).unwrap()),
            patient: PatientInfo {
                first_name: "John".into(),
                last_name: "Doe".into(),
                email: "john.doe@example.com".into(),
                phone: "555-555-5555".into(),
            },
            reason: "Annual checkup".into(),
            created_at: start,
        }
    }

    fn appointment(provider_id: &str, hour: u32, reference: &str) -> Appointment {
        appointment_at(provider_id, start_at(hour, 0), reference)
    }

    fn key(appointment: &Appointment) -> SlotId {
        SlotId::new(&appointment.provider.id, &appointment.slot.start_time)
    }

    async fn book(ledger: &AppointmentLedger, appointment: Appointment) -> Result<Appointment, BookingError> {
        ledger.reserve(key(&appointment), appointment, || unreachable!()).await
    }

    #[actix_web::test]
    async fn second_reservation_of_a_slot_conflicts() {
        let ledger = AppointmentLedger::new();
        book(&ledger, appointment("provider-1", 9, "REF-20241015-001"))
            .await
            .unwrap();

        let second = book(&ledger, appointment("provider-1", 9, "REF-20241015-002")).await;

        assert!(matches!(
            second,
            Err(BookingError::SlotAlreadyBooked(id)) if id == "slot-provider-1-1728982800000"
        ));
        assert_eq!(ledger.booked_windows("provider-1").await.len(), 1);
    }

    #[actix_web::test]
    async fn window_overlapping_a_booking_conflicts() {
        let ledger = AppointmentLedger::new();
        book(&ledger, appointment("provider-1", 10, "REF-1")).await.unwrap();

        let off_grid = book(
            &ledger,
            appointment_at("provider-1", start_at(10, 1), "REF-2"),
        )
        .await;
        assert!(matches!(off_grid, Err(BookingError::SlotAlreadyBooked(_))));

        // adjacent windows and other providers are unaffected
        book(&ledger, appointment_at("provider-1", start_at(10, 30), "REF-3"))
            .await
            .unwrap();
        book(&ledger, appointment_at("provider-2", start_at(10, 1), "REF-4"))
            .await
            .unwrap();
        assert_eq!(ledger.appointment_count().await, 3);
    }

    #[actix_web::test]
    async fn colliding_reference_is_redrawn() {
        let ledger = AppointmentLedger::new();
        book(&ledger, appointment("provider-1", 9, "REF-20241015-001"))
            .await
            .unwrap();

        let mut draws = vec!["REF-20241015-001".to_string(), "REF-20241015-002".to_string()].into_iter();
        let second = appointment("provider-1", 10, "REF-20241015-001");
        let stored = ledger
            .reserve(key(&second), second, || draws.next().unwrap())
            .await
            .unwrap();

        assert_eq!(stored.reference_number, "REF-20241015-002");
    }

    #[actix_web::test]
    async fn exhausted_redraws_fail() {
        let ledger = AppointmentLedger::new();
        book(&ledger, appointment("provider-1", 9, "REF-20241015-001"))
            .await
            .unwrap();

        let second = appointment("provider-1", 10, "REF-20241015-001");
        let result = ledger
            .reserve(key(&second), second, || "REF-20241015-001".to_string())
            .await;

        assert!(matches!(result, Err(BookingError::Internal(_))));
        let windows = ledger.booked_windows("provider-1").await;
        assert_eq!(windows, [SlotWindow::starting_at(start_at(9, 0))]);
    }

    #[actix_web::test]
    async fn listing_filters_by_provider_and_window() {
        let ledger = AppointmentLedger::new();
        for (provider, hour, reference) in [
            ("provider-1", 14, "REF-1"),
            ("provider-1", 9, "REF-2"),
            ("provider-2", 10, "REF-3"),
            ("provider-1", 16, "REF-4"),
        ] {
            book(&ledger, appointment(provider, hour, reference))
                .await
                .unwrap();
        }

        let listed = ledger
            .appointments_for("provider-1", start_at(0, 0), start_at(15, 0))
            .await;

        let ids: Vec<&str> = listed.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["appointment-1728982800000", "appointment-1729000800000"]);
    }

    #[actix_web::test]
    async fn listing_bound_is_exclusive_at_the_millisecond() {
        let ledger = AppointmentLedger::new();
        let day_start = start_at(0, 0);
        let next_day = day_start + Duration::days(1);
        let last_moment = next_day - Duration::milliseconds(500);

        book(&ledger, appointment_at("provider-1", last_moment, "REF-1"))
            .await
            .unwrap();
        book(&ledger, appointment_at("provider-1", next_day + Duration::hours(1), "REF-2"))
            .await
            .unwrap();

        let listed = ledger
            .appointments_for("provider-1", day_start, next_day)
            .await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].slot.start_time, last_moment);
    }
}
