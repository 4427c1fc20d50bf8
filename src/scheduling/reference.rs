use chrono::NaiveDate;

use crate::scheduling::constants::REFERENCE_PREFIX;

/// Formats `REF-<YYYYMMDD>-<NNN>`.
pub fn reference_number(date: NaiveDate, suffix: u16) -> String {
    format!(
        "{}-{}-{:03}",
        REFERENCE_PREFIX,
        date.format("%Y%m%d"),
        suffix % 1000
    )
}

pub fn random_suffix() -> u16 {
    rand::random_range(0..1000)
}

pub fn random_reference(date: NaiveDate) -> String {
    reference_number(date, random_suffix())
}
