use std::sync::Arc;

use crate::cache::SlotRegistry;
use crate::clock::Clock;
use crate::config::Settings;
use crate::ledger::AppointmentLedger;
use crate::scheduling::Scheduler;

/// Shared by every worker through `web::Data`.
pub struct AppState {
    pub settings: Settings,
    pub scheduler: Scheduler,
    pub registry: SlotRegistry,
    pub ledger: AppointmentLedger,
}

impl AppState {
    pub fn new(settings: Settings, clock: Arc<dyn Clock>) -> Self {
        AppState {
            scheduler: Scheduler::new(clock, settings.practice_zone),
            registry: SlotRegistry::new(
                settings.slot_registry_capacity,
                settings.slot_registry_ttl,
            ),
            ledger: AppointmentLedger::new(),
            settings,
        }
    }
}
