use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// A single rejected field of a booking request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Provider not found")]
    ProviderNotFound(String),

    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("end_date must not be before start_date")]
    InvalidDateRange,

    #[error("Date range may cover at most {max_days} days")]
    DateRangeTooLong { max_days: i64 },

    #[error("Invalid slot ID format")]
    InvalidSlotId(String),

    #[error("This time slot is not offered for booking")]
    UnknownSlot(String),

    #[error("This time slot has already been booked")]
    SlotAlreadyBooked(String),

    #[error("Invalid appointment request")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    details: Option<Value>,
}

impl BookingError {
    pub fn code(&self) -> &'static str {
        match self {
            BookingError::ProviderNotFound(_) => "NOT_FOUND",
            BookingError::InvalidDate(_)
            | BookingError::InvalidDateRange
            | BookingError::DateRangeTooLong { .. }
            | BookingError::InvalidSlotId(_)
            | BookingError::Validation(_) => "VALIDATION_ERROR",
            BookingError::UnknownSlot(_) => "UNPROCESSABLE_ENTITY",
            BookingError::SlotAlreadyBooked(_) => "CONFLICT_ERROR",
            BookingError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            BookingError::ProviderNotFound(provider_id) => {
                Some(json!({ "provider_id": provider_id }))
            }
            BookingError::InvalidDate(value) => Some(json!({ "value": value })),
            BookingError::DateRangeTooLong { max_days } => Some(json!({ "max_days": max_days })),
            BookingError::InvalidSlotId(slot_id)
            | BookingError::UnknownSlot(slot_id)
            | BookingError::SlotAlreadyBooked(slot_id) => Some(json!({ "slot_id": slot_id })),
            BookingError::Validation(fields) => Some(json!(fields)),
            BookingError::InvalidDateRange | BookingError::Internal(_) => None,
        }
    }
}

impl ResponseError for BookingError {
    fn status_code(&self) -> StatusCode {
        match self {
            BookingError::ProviderNotFound(_) => StatusCode::NOT_FOUND,
            BookingError::InvalidDate(_)
            | BookingError::InvalidDateRange
            | BookingError::DateRangeTooLong { .. }
            | BookingError::InvalidSlotId(_)
            | BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::UnknownSlot(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BookingError::SlotAlreadyBooked(_) => StatusCode::CONFLICT,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            code: self.code(),
            message: self.to_string(),
            details: self.details(),
        })
    }
}
