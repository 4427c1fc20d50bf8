pub mod appointments;
pub mod availability;
pub mod providers;

use chrono::NaiveDate;

use crate::error::BookingError;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDate(raw.to_string()))
}

pub(crate) fn parse_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), BookingError> {
    let (start, end) = (parse_date(start)?, parse_date(end)?);
    if end < start {
        return Err(BookingError::InvalidDateRange);
    }
    Ok((start, end))
}

/// Like [`parse_range`], but refuses ranges covering more than `max_days`
/// calendar days, counting both ends.
pub(crate) fn parse_bounded_range(
    start: &str,
    end: &str,
    max_days: i64,
) -> Result<(NaiveDate, NaiveDate), BookingError> {
    let (start, end) = parse_range(start, end)?;
    if (end - start).num_days() + 1 > max_days {
        return Err(BookingError::DateRangeTooLong { max_days });
    }
    Ok((start, end))
}
