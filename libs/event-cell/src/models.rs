use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use uuid::Uuid;

use shared_models::time::{serde_hhmm, serde_hhmm_opt};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "serde_hhmm")]
    pub time: NaiveTime,
    pub speaker: String,
    /// The creation form pre-fills 50 seats.
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Target tenant; only honored for the master admin, everyone else
    /// is stamped with their own company.
    #[serde(default)]
    pub company_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default, with = "serde_hhmm_opt")]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub client_id: Uuid,
}
