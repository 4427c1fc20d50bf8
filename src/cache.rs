use moka::future::Cache;
use std::time::Duration;

use crate::models::slot::TimeSlot;

/// Slots handed out by availability queries, keyed by slot id.
#[derive(Clone)]
pub struct SlotRegistry {
    slots: Cache<String, TimeSlot>,
}

impl SlotRegistry {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        SlotRegistry {
            slots: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub async fn register(&self, slots: &[TimeSlot]) {
        for slot in slots {
            self.slots.insert(slot.id.clone(), slot.clone()).await;
        }
    }

    pub async fn lookup(&self, slot_id: &str) -> Option<TimeSlot> {
        self.slots.get(slot_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    #[actix_web::test]
    async fn registered_slots_can_be_looked_up() {
        let registry = SlotRegistry::new(16, Duration::from_secs(60));
        let start = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 10, 15, 9, 0, 0)
            .unwrap();
        let slot = TimeSlot::new("provider-1", start);

        registry.register(std::slice::from_ref(&slot)).await;

        assert_eq!(registry.lookup(&slot.id).await, Some(slot));
        assert_eq!(registry.lookup("slot-provider-1-0").await, None);
    }
}
