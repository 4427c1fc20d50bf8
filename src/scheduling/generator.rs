use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Weekday};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::BookingError;
use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::models::patient::PatientInfo;
use crate::models::provider::{Provider, ProviderSummary, find_provider};
use crate::models::slot::{SlotWindow, TimeSlot};
use crate::scheduling::constants::*;
use crate::scheduling::reference::random_reference;
use crate::scheduling::slot_id::decode_start;
use crate::scheduling::zone::PracticeZone;

/// Produces bookable windows and confirmation records for the practice.
///
/// Business hours are wall-clock times in the practice zone, resolved to a
/// UTC offset day by day; "now" comes from the injected [`Clock`].
pub struct Scheduler {
    clock: Arc<dyn Clock>,
    zone: PracticeZone,
}

impl Scheduler {
    pub fn new(clock: Arc<dyn Clock>, zone: PracticeZone) -> Self {
        Scheduler { clock, zone }
    }

    pub fn zone(&self) -> PracticeZone {
        self.zone
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.zone.from_utc(self.clock.now())
    }

    /// Lists the future 30-minute windows of one provider between `start` and
    /// `end` (both inclusive), in chronological order.
    pub fn enumerate_slots(
        &self,
        provider_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeSlot>, BookingError> {
        let provider = resolve(provider_id)?;
        let now = self.now();

        let slots: Vec<TimeSlot> = start
            .iter_days()
            .take_while(|day| *day <= end)
            .filter(|day| !is_weekend(*day))
            .flat_map(|day| self.business_windows(day))
            .filter(|slot_start| *slot_start > now)
            .map(|slot_start| TimeSlot::new(&provider.id, slot_start))
            .collect();

        debug!(
            "generated {} slots for {} between {} and {}",
            slots.len(),
            provider.id,
            start,
            end
        );

        Ok(slots)
    }

    /// Builds a confirmed appointment for `slot_id`, taking its start time from
    /// the id's trailing timestamp.
    pub fn create_appointment(
        &self,
        slot_id: &str,
        provider_id: &str,
        patient: PatientInfo,
        reason: String,
    ) -> Result<Appointment, BookingError> {
        let provider = resolve(provider_id)?;
        let start_time = decode_start(slot_id, &self.zone)?;

        Ok(self.confirm(SlotWindow::starting_at(start_time), provider, patient, reason))
    }

    /// Fabricates the confirmation record for an already-resolved window.
    pub fn confirm(
        &self,
        window: SlotWindow,
        provider: &Provider,
        patient: PatientInfo,
        reason: String,
    ) -> Appointment {
        let now = self.now();

        Appointment {
            id: format!("{}{}", APPOINTMENT_ID_PREFIX, Uuid::new_v4().simple()),
            reference_number: random_reference(window.start_time.date_naive()),
            status: AppointmentStatus::Confirmed,
            slot: window,
            provider: ProviderSummary::from(provider),
            patient,
            reason,
            created_at: now,
        }
    }

    fn business_windows(&self, day: NaiveDate) -> impl Iterator<Item = DateTime<FixedOffset>> + '_ {
        (OPENING_HOUR..CLOSING_HOUR)
            .filter(|hour| *hour != LUNCH_HOUR)
            .flat_map(|hour| (0..60).step_by(SLOT_MINUTES as usize).map(move |minute| (hour, minute)))
            .filter_map(move |(hour, minute)| self.zone.localize(day.and_hms_opt(hour, minute, 0)?))
    }
}

fn resolve(provider_id: &str) -> Result<&'static Provider, BookingError> {
    find_provider(provider_id).ok_or_else(|| BookingError::ProviderNotFound(provider_id.to_string()))
}

fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}
