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

use crate::error::EventError;
use crate::models::{CreateEventRequest, EnrollRequest, UpdateEventRequest};
use crate::services::EventService;

fn map_error(err: EventError) -> AppError {
    match err {
        EventError::NotFound => AppError::NotFound("Event not found".to_string()),
        EventError::ClientNotFound => AppError::NotFound("Client not found".to_string()),
        EventError::EventFull => AppError::Conflict("Event is at capacity".to_string()),
        EventError::ValidationError(msg) => AppError::ValidationError(msg),
        EventError::StorageError(msg) => AppError::Storage(msg),
    }
}

#[axum::debug_handler]
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
) -> Result<Json<Value>, AppError> {
    let service = EventService::new(&state);
    let events = service.list(&ctx).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "count": events.len(),
        "events": events
    })))
}

#[axum::debug_handler]
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = EventService::new(&state);
    let event = service.get(&ctx, event_id).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "event": event
    })))
}

#[axum::debug_handler]
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Json(request): Json<CreateEventRequest>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = EventService::new(&state);
    let event = service.create(&ctx, request).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "event": event
    })))
}

#[axum::debug_handler]
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(event_id): Path<Uuid>,
    Json(request): Json<UpdateEventRequest>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = EventService::new(&state);
    let event = service
        .update(&ctx, event_id, request)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "event": event
    })))
}

#[axum::debug_handler]
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = EventService::new(&state);
    service.delete(&ctx, event_id).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Event deleted"
    })))
}

#[axum::debug_handler]
pub async fn enroll_client(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(event_id): Path<Uuid>,
    Json(request): Json<EnrollRequest>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = EventService::new(&state);
    let event = service
        .enroll(&ctx, event_id, request.client_id)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "event": event
    })))
}
