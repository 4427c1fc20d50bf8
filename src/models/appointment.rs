use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::patient::PatientInfo;
use crate::models::provider::ProviderSummary;
use crate::models::slot::SlotWindow;

/// Appointments are created directly into `Confirmed`; no other state is reachable.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub reference_number: String,
    pub status: AppointmentStatus,
    pub slot: SlotWindow,
    pub provider: ProviderSummary,
    pub patient: PatientInfo,
    pub reason: String,
    pub created_at: DateTime<FixedOffset>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CreateAppointmentRequest {
    pub slot_id: String,
    pub provider_id: String,
    pub patient: PatientInfo,
    pub reason: String,
}

/// Row of a provider's schedule listing.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AppointmentSummary {
    pub id: String,
    pub patient_name: String,
    pub patient_email: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub reason: String,
    pub status: AppointmentStatus,
}

impl From<&Appointment> for AppointmentSummary {
    fn from(appointment: &Appointment) -> Self {
        AppointmentSummary {
            id: appointment.id.clone(),
            patient_name: appointment.patient.full_name(),
            patient_email: appointment.patient.email.clone(),
            start_time: appointment.slot.start_time,
            end_time: appointment.slot.end_time,
            reason: appointment.reason.clone(),
            status: appointment.status,
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct ProviderAppointmentsResponse {
    pub provider_id: String,
    pub appointments: Vec<AppointmentSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(AppointmentStatus::Confirmed).unwrap(),
            "confirmed"
        );
    }
}
