use tracing::info;

use crate::error::BookingError;
use crate::handlers::parse_range;
use crate::models::appointment::{AppointmentSummary, ProviderAppointmentsResponse};
use crate::models::provider::{Provider, all_providers, find_provider};
use crate::state::AppState;

pub fn list_providers() -> Vec<Provider> {
    all_providers().to_vec()
}

/// Booked appointments of a provider whose start falls on any day from
/// `start_date` through `end_date` in the practice zone.
pub async fn list_provider_appointments(
    state: &AppState,
    provider_id: &str,
    start_date: &str,
    end_date: &str,
) -> Result<ProviderAppointmentsResponse, BookingError> {
    let provider = find_provider(provider_id)
        .ok_or_else(|| BookingError::ProviderNotFound(provider_id.to_string()))?;
    let (start, end) = parse_range(start_date, end_date)?;

    let zone = state.scheduler.zone();
    let from = zone.start_of_day(start);
    let until = end.succ_opt().and_then(|next| zone.start_of_day(next));
    let (Some(from), Some(until)) = (from, until) else {
        return Err(BookingError::InvalidDateRange);
    };

    let appointments: Vec<AppointmentSummary> = state
        .ledger
        .appointments_for(&provider.id, from, until)
        .await
        .iter()
        .map(AppointmentSummary::from)
        .collect();

    info!(
        "listing {} appointments for {} ({} to {})",
        appointments.len(),
        provider.id,
        start,
        end
    );

    Ok(ProviderAppointmentsResponse {
        provider_id: provider.id.clone(),
        appointments,
    })
}
