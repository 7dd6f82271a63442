use serde::Deserialize;
use uuid::Uuid;

use shared_models::CustomFieldType;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub name: String,
    pub duration_minutes: u32,
    pub price: f64,
    #[serde(default)]
    pub custom_fields: Option<Vec<CustomFieldSpec>>,
    /// Target tenant; only honored for the master admin, everyone else
    /// is stamped with their own company.
    #[serde(default)]
    pub company_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub custom_fields: Option<Vec<CustomFieldSpec>>,
}

/// Booking-form field as submitted by the editor. Existing fields keep
/// their id so stored answers stay attached; new fields come in without
/// one and get minted on save.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldSpec {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: CustomFieldType,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub required: bool,
}
