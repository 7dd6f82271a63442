use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

use crate::time::{serde_hhmm, TimeInterval};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    EnRoute,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Terminal states accept no further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, AppointmentStatus::Completed | AppointmentStatus::Cancelled)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "PENDING"),
            AppointmentStatus::Confirmed => write!(f, "CONFIRMED"),
            AppointmentStatus::EnRoute => write!(f, "EN_ROUTE"),
            AppointmentStatus::Completed => write!(f, "COMPLETED"),
            AppointmentStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub company_id: Uuid,
    pub client_id: Uuid,
    pub professional_id: Uuid,
    pub service_id: Uuid,
    pub date: NaiveDate,
    #[serde(with = "serde_hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "serde_hhmm")]
    pub end_time: NaiveTime,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_field_values: Option<HashMap<String, serde_json::Value>>,
}

impl Appointment {
    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.start_time, self.end_time)
    }

    /// Cancelled bookings release their slot and never count toward
    /// conflicts.
    pub fn blocks_slot(&self) -> bool {
        self.status != AppointmentStatus::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_strings_are_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::EnRoute).unwrap(),
            "\"EN_ROUTE\""
        );
        assert_eq!(
            serde_json::from_str::<AppointmentStatus>("\"CANCELLED\"").unwrap(),
            AppointmentStatus::Cancelled
        );
    }

    #[test]
    fn appointment_round_trips_legacy_json() {
        let raw = r#"{"id":"1f0e7a46-96e3-4a0f-9c5a-71a3f0d9a001","companyId":"1f0e7a46-96e3-4a0f-9c5a-71a3f0d9a002","clientId":"1f0e7a46-96e3-4a0f-9c5a-71a3f0d9a003","professionalId":"1f0e7a46-96e3-4a0f-9c5a-71a3f0d9a004","serviceId":"1f0e7a46-96e3-4a0f-9c5a-71a3f0d9a005","date":"2024-06-10","startTime":"09:00","endTime":"10:00","status":"PENDING"}"#;
        let appointment: Appointment = serde_json::from_str(raw).unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert_eq!(appointment.start_time.format("%H:%M").to_string(), "09:00");
        assert_eq!(serde_json::to_string(&appointment).unwrap(), raw);
    }

    #[test]
    fn only_completed_and_cancelled_are_terminal() {
        assert!(AppointmentStatus::Completed.is_terminal());
        assert!(AppointmentStatus::Cancelled.is_terminal());
        assert!(!AppointmentStatus::Pending.is_terminal());
        assert!(!AppointmentStatus::Confirmed.is_terminal());
        assert!(!AppointmentStatus::EnRoute.is_terminal());
    }
}
