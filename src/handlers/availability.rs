use tracing::info;

use crate::error::BookingError;
use crate::handlers::parse_bounded_range;
use crate::models::provider::{ProviderSummary, find_provider};
use crate::models::slot::AvailabilityResponse;
use crate::state::AppState;

/// Enumerates a provider's slots, flags the ones overlapping a booking, and
/// records all of them in the slot registry.
pub async fn list_availability(
    state: &AppState,
    provider_id: &str,
    start_date: &str,
    end_date: &str,
) -> Result<AvailabilityResponse, BookingError> {
    let provider = find_provider(provider_id)
        .ok_or_else(|| BookingError::ProviderNotFound(provider_id.to_string()))?;
    let (start, end) = parse_bounded_range(
        start_date,
        end_date,
        state.settings.max_availability_days,
    )?;

    let mut slots = state.scheduler.enumerate_slots(&provider.id, start, end)?;

    let booked = state.ledger.booked_windows(&provider.id).await;
    for slot in slots.iter_mut() {
        let window = slot.window();
        slot.available = !booked.iter().any(|taken| taken.overlaps(&window));
    }

    state.registry.register(&slots).await;

    info!(
        "returning {} slots for {} ({} booked)",
        slots.len(),
        provider.id,
        slots.iter().filter(|slot| !slot.available).count()
    );

    Ok(AvailabilityResponse {
        provider: ProviderSummary::from(provider),
        slots,
    })
}
