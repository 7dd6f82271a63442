use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::auth::TenantContext;
use shared_models::error::AppError;
use shared_storage::AppState;
use shared_utils::require_admin;

use crate::error::FinanceError;
use crate::models::CreateTransactionRequest;
use crate::services::LedgerService;

fn map_error(err: FinanceError) -> AppError {
    match err {
        FinanceError::NotFound => AppError::NotFound("Transaction not found".to_string()),
        FinanceError::ValidationError(msg) => AppError::ValidationError(msg),
        FinanceError::StorageError(msg) => AppError::Storage(msg),
    }
}

#[axum::debug_handler]
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = LedgerService::new(&state);
    let transactions = service.list(&ctx).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "count": transactions.len(),
        "transactions": transactions
    })))
}

#[axum::debug_handler]
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = LedgerService::new(&state);
    let transaction = service.record(&ctx, request).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "transaction": transaction
    })))
}

#[axum::debug_handler]
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = LedgerService::new(&state);
    let summary = service.summary(&ctx).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "summary": summary
    })))
}
