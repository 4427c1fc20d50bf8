use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;
use tracing::debug;

/// Time zone the practice's business hours are kept in.
///
/// Offsets are resolved per instant, so dates on either side of a DST change
/// each get their own UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PracticeZone {
    /// The host's local time zone.
    Local,
    Named(Tz),
}

impl PracticeZone {
    /// Places a wall-clock time in the zone. Times repeated by a DST fall-back
    /// take the earlier instant; times skipped by a spring-forward have none.
    pub fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            PracticeZone::Local => pick(naive, naive.and_local_timezone(Local)),
            PracticeZone::Named(tz) => pick(naive, naive.and_local_timezone(*tz)),
        }
    }

    pub fn from_utc(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            PracticeZone::Local => instant.with_timezone(&Local).fixed_offset(),
            PracticeZone::Named(tz) => instant.with_timezone(tz).fixed_offset(),
        }
    }

    /// First instant of `day`, which is later than midnight when midnight
    /// itself falls in a DST gap.
    pub fn start_of_day(&self, day: NaiveDate) -> Option<DateTime<FixedOffset>> {
        (0..24).find_map(|hour| self.localize(day.and_hms_opt(hour, 0, 0)?))
    }
}

impl fmt::Display for PracticeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PracticeZone::Local => write!(f, "local"),
            PracticeZone::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

fn pick<Tz2: TimeZone>(
    naive: NaiveDateTime,
    resolved: LocalResult<DateTime<Tz2>>,
) -> Option<DateTime<FixedOffset>> {
    match resolved {
        LocalResult::Single(instant) => Some(instant.fixed_offset()),
        LocalResult::Ambiguous(earliest, _) => {
            debug!("{} occurs twice, using the earlier instant", naive);
            Some(earliest.fixed_offset())
        }
        LocalResult::None => {
            debug!("{} does not exist in the practice zone", naive);
            None
        }
    }
}
