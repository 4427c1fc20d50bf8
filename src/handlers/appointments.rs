use tracing::{info, warn};

use crate::error::BookingError;
use crate::models::appointment::{Appointment, CreateAppointmentRequest};
use crate::models::provider::find_provider;
use crate::scheduling::reference::random_reference;
use crate::scheduling::slot_id::SlotId;
use crate::state::AppState;
use crate::validation::validate_booking;

/// Validates the request, resolves the slot window and records the
/// confirmed appointment in the ledger.
///
/// Slots handed out by an availability query are taken from the registry.
/// Any other id is decoded from its timestamp suffix, unless the service is
/// configured to accept registered slots only.
pub async fn create_appointment(
    state: &AppState,
    request: CreateAppointmentRequest,
) -> Result<Appointment, BookingError> {
    validate_booking(&request)?;

    let CreateAppointmentRequest {
        slot_id,
        provider_id,
        patient,
        reason,
    } = request;

    let provider = find_provider(&provider_id)
        .ok_or_else(|| BookingError::ProviderNotFound(provider_id.clone()))?;

    let slot = SlotId::parse(&slot_id)?;
    if slot.provider_id != provider.id {
        return Err(BookingError::InvalidSlotId(slot_id));
    }

    let registered = state.registry.lookup(&slot_id).await;
    let appointment = match registered {
        Some(slot) => state.scheduler.confirm(slot.window(), provider, patient, reason),
        None if state.settings.require_registered_slot => {
            warn!("rejecting unregistered slot {}", slot_id);
            return Err(BookingError::UnknownSlot(slot_id));
        }
        None => state
            .scheduler
            .create_appointment(&slot_id, &provider.id, patient, reason)?,
    };

    let slot_date = appointment.slot.start_time.date_naive();
    let appointment = state
        .ledger
        .reserve(slot, appointment, || random_reference(slot_date))
        .await
        .inspect_err(|err| warn!("booking {} failed: {}", slot_id, err))?;

    info!(
        "created appointment {} ({}) with {} at {}",
        appointment.id, appointment.reference_number, provider.id, appointment.slot.start_time
    );

    Ok(appointment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::patient::PatientInfo;
    use crate::models::slot::TimeSlot;
    use crate::state::testing::state_at;
    use chrono::{Duration, FixedOffset, TimeZone, Utc};

    fn request(slot_id: &str) -> CreateAppointmentRequest {
        CreateAppointmentRequest {
            slot_id: slot_id.to_string(),
            provider_id: "provider-1".to_string(),
            patient: PatientInfo {
                first_name: "Jane".into(),
                last_name: "Smith".into(),
                email: "jane.smith@example.com".into(),
                phone: "555-555-5555".into(),
            },
            reason: "Follow-up appointment".into(),
        }
    }

    #[actix_web::test]
    async fn registered_window_takes_precedence_over_the_id() {
        let state = state_at(Utc.with_ymd_and_hms(2024, 10, 14, 8, 0, 0).unwrap(), false);
        let start = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 10, 15, 9, 0, 0)
            .unwrap();
        let mut slot = TimeSlot::new("provider-1", start);
        slot.end_time = start + Duration::minutes(45);
        state.registry.register(std::slice::from_ref(&slot)).await;

        let appointment = create_appointment(&state, request(&slot.id)).await.unwrap();

        assert_eq!(appointment.slot.start_time, start);
        assert_eq!(appointment.slot.end_time, slot.end_time);
    }

    #[actix_web::test]
    async fn unregistered_id_falls_back_to_its_timestamp() {
        let state = state_at(Utc.with_ymd_and_hms(2024, 10, 14, 8, 0, 0).unwrap(), false);

        let appointment = create_appointment(&state, request("slot-provider-1-1728982800000"))
            .await
            .unwrap();

        assert_eq!(appointment.slot.start_time.timestamp_millis(), 1_728_982_800_000);
        assert_eq!(
            appointment.slot.end_time - appointment.slot.start_time,
            Duration::minutes(30)
        );
    }
}
