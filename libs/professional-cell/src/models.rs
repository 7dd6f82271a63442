use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::{AvailabilityRule, TimeInterval};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfessionalRequest {
    pub name: String,
    pub email: String,
    pub specialty: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub slot_interval: Option<u32>,
    /// Target tenant; only honored for the master admin, everyone else
    /// is stamped with their own company.
    #[serde(default)]
    pub company_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfessionalRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub slot_interval: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceAvailabilityRequest {
    pub availability: Vec<AvailabilityRule>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertExceptionRequest {
    pub date: NaiveDate,
    pub active: bool,
    #[serde(default)]
    pub intervals: Option<Vec<TimeInterval>>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: NaiveDate,
}

/// Resolved working hours for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    pub is_working: bool,
    pub intervals: Vec<TimeInterval>,
}

impl DayAvailability {
    pub fn off() -> Self {
        Self {
            is_working: false,
            intervals: Vec::new(),
        }
    }
}
