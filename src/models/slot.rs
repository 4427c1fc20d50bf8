use chrono::{DateTime, Duration, FixedOffset};
use serde::Serialize;

use crate::models::provider::ProviderSummary;
use crate::scheduling::constants::SLOT_MINUTES;
use crate::scheduling::slot_id::SlotId;

/// A bookable window offered by a provider.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TimeSlot {
    pub id: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub available: bool,
}

impl TimeSlot {
    pub fn new(provider_id: &str, start_time: DateTime<FixedOffset>) -> Self {
        let window = SlotWindow::starting_at(start_time);
        TimeSlot {
            id: SlotId::new(provider_id, &start_time).to_string(),
            start_time: window.start_time,
            end_time: window.end_time,
            available: true,
        }
    }

    pub fn window(&self) -> SlotWindow {
        SlotWindow {
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct SlotWindow {
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
}

impl SlotWindow {
    pub fn starting_at(start_time: DateTime<FixedOffset>) -> Self {
        SlotWindow {
            start_time,
            end_time: start_time + Duration::minutes(SLOT_MINUTES),
        }
    }

    /// Half-open overlap: back-to-back windows do not overlap.
    pub fn overlaps(&self, other: &SlotWindow) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct AvailabilityResponse {
    pub provider: ProviderSummary,
    pub slots: Vec<TimeSlot>,
}
