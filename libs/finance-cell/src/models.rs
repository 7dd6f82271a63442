use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::{PaymentMethod, TransactionStatus, TransactionType};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    /// Booking timestamp; omitted entries are stamped with "now".
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: String,
    /// Manual entries start PENDING unless told otherwise.
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    pub category: String,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub provider_id: Option<String>,
    /// Target tenant; only honored for the master admin, everyone else
    /// is stamped with their own company.
    #[serde(default)]
    pub company_id: Option<Uuid>,
}

/// The three figures on the finance dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinanceSummary {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}
