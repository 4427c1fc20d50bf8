use chrono::{DateTime, FixedOffset, TimeZone};
use std::fmt;

use crate::error::BookingError;
use crate::scheduling::constants::SLOT_ID_PREFIX;
use crate::scheduling::zone::PracticeZone;

/// Parsed form of `slot-<provider id>-<start epoch millis>`.
///
/// Two ids naming the same provider and start compare equal, so this is the
/// key bookings are held under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotId {
    pub provider_id: String,
    pub start_millis: i64,
}

impl SlotId {
    pub fn new<Tz: TimeZone>(provider_id: &str, start_time: &DateTime<Tz>) -> Self {
        SlotId {
            provider_id: provider_id.to_string(),
            start_millis: start_time.timestamp_millis(),
        }
    }

    /// Accepts only the canonical spelling, so `...-01728986400000` is refused
    /// rather than treated as a second name for `...-1728986400000`.
    pub fn parse(raw: &str) -> Result<Self, BookingError> {
        let invalid = || BookingError::InvalidSlotId(raw.to_string());

        let body = raw.strip_prefix(SLOT_ID_PREFIX).ok_or_else(invalid)?;
        let (provider_id, millis) = body.rsplit_once('-').ok_or_else(invalid)?;
        if provider_id.is_empty() {
            return Err(invalid());
        }

        let id = SlotId {
            provider_id: provider_id.to_string(),
            start_millis: parse_millis(millis).ok_or_else(invalid)?,
        };
        if id.to_string() != raw {
            return Err(invalid());
        }
        Ok(id)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-{}", SLOT_ID_PREFIX, self.provider_id, self.start_millis)
    }
}

/// Reads the start instant from the trailing numeric segment of any slot id,
/// without checking the rest of its shape.
pub fn decode_start(raw: &str, zone: &PracticeZone) -> Result<DateTime<FixedOffset>, BookingError> {
    let millis = raw
        .rsplit('-')
        .next()
        .and_then(parse_millis)
        .ok_or_else(|| BookingError::InvalidSlotId(raw.to_string()))?;

    DateTime::from_timestamp_millis(millis)
        .map(|utc| zone.from_utc(utc))
        .ok_or_else(|| BookingError::InvalidSlotId(raw.to_string()))
}

fn parse_millis(segment: &str) -> Option<i64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
