use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{BookingError, FieldError};
use crate::models::appointment::CreateAppointmentRequest;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern compiles"));
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
// (555) 555-5555, 555.555.5555, +555-555-5555
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\+]?[(]?[0-9]{3}[)]?[-\s\.]?[0-9]{3}[-\s\.]?[0-9]{4,6}$")
        .expect("phone pattern compiles")
});

const NAME_MAX_CHARS: usize = 100;
const REASON_MIN_CHARS: usize = 3;
const REASON_MAX_CHARS: usize = 500;

/// Checks a booking request before it reaches the scheduler, reporting every
/// offending field at once.
pub fn validate_booking(request: &CreateAppointmentRequest) -> Result<(), BookingError> {
    let mut problems = Vec::new();
    let patient = &request.patient;

    check_name("patient.first_name", &patient.first_name, &mut problems);
    check_name("patient.last_name", &patient.last_name, &mut problems);

    if !EMAIL_PATTERN.is_match(&patient.email) {
        problems.push(FieldError {
            field: "patient.email",
            message: "Invalid email format".to_string(),
        });
    }

    if !PHONE_PATTERN.is_match(&patient.phone) {
        problems.push(FieldError {
            field: "patient.phone",
            message: "Invalid phone number format".to_string(),
        });
    }

    let reason_len = request.reason.chars().count();
    if !(REASON_MIN_CHARS..=REASON_MAX_CHARS).contains(&reason_len) {
        problems.push(FieldError {
            field: "reason",
            message: format!(
                "Reason must be between {} and {} characters",
                REASON_MIN_CHARS, REASON_MAX_CHARS
            ),
        });
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(BookingError::Validation(problems))
    }
}

fn check_name(field: &'static str, value: &str, problems: &mut Vec<FieldError>) {
    if value.chars().count() > NAME_MAX_CHARS {
        problems.push(FieldError {
            field,
            message: format!("Name must be at most {} characters", NAME_MAX_CHARS),
        });
    } else if !NAME_PATTERN.is_match(value) {
        problems.push(FieldError {
            field,
            message: "Name must contain only letters and spaces".to_string(),
        });
    }
}
