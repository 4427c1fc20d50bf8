// business day, in practice-local hours
pub const OPENING_HOUR: u32 = 9;
pub const CLOSING_HOUR: u32 = 17;
pub const LUNCH_HOUR: u32 = 12;

pub const SLOT_MINUTES: i64 = 30;

// identifier formats
pub const SLOT_ID_PREFIX: &str = "slot-";
pub const APPOINTMENT_ID_PREFIX: &str = "appointment-";
pub const REFERENCE_PREFIX: &str = "REF";

// redraws of the reference suffix before giving up on a collision
pub const MAX_REFERENCE_ATTEMPTS: usize = 5;
