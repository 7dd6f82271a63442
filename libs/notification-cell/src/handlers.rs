use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::auth::TenantContext;
use shared_models::error::AppError;
use shared_storage::AppState;

use crate::error::NotificationError;
use crate::services::NotificationService;

fn map_error(err: NotificationError) -> AppError {
    match err {
        NotificationError::StorageError(msg) => AppError::Storage(msg),
    }
}

/// Delivery history for the caller's company, newest first.
#[axum::debug_handler]
pub async fn list_notification_logs(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
) -> Result<Json<Value>, AppError> {
    let service = NotificationService::new(&state);
    let notifications = service.list_logs(&ctx).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "count": notifications.len(),
        "notifications": notifications
    })))
}
