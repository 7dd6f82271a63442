use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::auth::TenantContext;
use shared_models::error::AppError;
use shared_storage::AppState;
use shared_utils::require_admin;

use crate::error::CatalogError;
use crate::models::{CreateServiceRequest, UpdateServiceRequest};
use crate::services::CatalogService;

fn map_error(err: CatalogError) -> AppError {
    match err {
        CatalogError::NotFound => AppError::NotFound("Service not found".to_string()),
        CatalogError::ValidationError(msg) => AppError::ValidationError(msg),
        CatalogError::StorageError(msg) => AppError::Storage(msg),
    }
}

#[axum::debug_handler]
pub async fn list_services(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
) -> Result<Json<Value>, AppError> {
    let service = CatalogService::new(&state);
    let services = service.list(&ctx).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "count": services.len(),
        "services": services
    })))
}

#[axum::debug_handler]
pub async fn get_service(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(service_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = CatalogService::new(&state);
    let offering = service.get(&ctx, service_id).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "service": offering
    })))
}

#[axum::debug_handler]
pub async fn create_service(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Json(request): Json<CreateServiceRequest>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = CatalogService::new(&state);
    let offering = service.create(&ctx, request).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "service": offering
    })))
}

#[axum::debug_handler]
pub async fn update_service(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(service_id): Path<Uuid>,
    Json(request): Json<UpdateServiceRequest>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = CatalogService::new(&state);
    let offering = service
        .update(&ctx, service_id, request)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "service": offering
    })))
}

#[axum::debug_handler]
pub async fn delete_service(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(service_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = CatalogService::new(&state);
    service.delete(&ctx, service_id).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Service deleted"
    })))
}
