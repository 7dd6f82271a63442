use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::auth::TenantContext;
use shared_models::error::AppError;
use shared_storage::AppState;
use shared_utils::require_admin;

use crate::error::ClientError;
use crate::models::{ClientSearchQuery, CreateClientRequest, UpdateClientRequest};
use crate::services::ClientService;

fn map_error(err: ClientError) -> AppError {
    match err {
        ClientError::NotFound => AppError::NotFound("Client not found".to_string()),
        ClientError::ValidationError(msg) => AppError::ValidationError(msg),
        ClientError::StorageError(msg) => AppError::Storage(msg),
    }
}

#[axum::debug_handler]
pub async fn list_clients(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Query(query): Query<ClientSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let service = ClientService::new(&state);
    let clients = service
        .list(&ctx, query.search.as_deref())
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "count": clients.len(),
        "clients": clients
    })))
}

#[axum::debug_handler]
pub async fn get_client(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(client_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = ClientService::new(&state);
    let client = service.get(&ctx, client_id).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "client": client
    })))
}

#[axum::debug_handler]
pub async fn create_client(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Json(request): Json<CreateClientRequest>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = ClientService::new(&state);
    let client = service.create(&ctx, request).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "client": client
    })))
}

#[axum::debug_handler]
pub async fn update_client(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(client_id): Path<Uuid>,
    Json(request): Json<UpdateClientRequest>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = ClientService::new(&state);
    let client = service
        .update(&ctx, client_id, request)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "client": client
    })))
}

#[axum::debug_handler]
pub async fn delete_client(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(client_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = ClientService::new(&state);
    service.delete(&ctx, client_id).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Client deleted"
    })))
}
