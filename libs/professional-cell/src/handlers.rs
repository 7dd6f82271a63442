use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::auth::TenantContext;
use shared_models::error::AppError;
use shared_storage::AppState;
use shared_utils::require_admin;

use crate::error::ProfessionalError;
use crate::models::{
    CreateProfessionalRequest, DayQuery, ReplaceAvailabilityRequest, UpdateProfessionalRequest,
    UpsertExceptionRequest,
};
use crate::services::{AvailabilityService, ProfessionalService, SchedulingService};

fn map_error(err: ProfessionalError) -> AppError {
    match err {
        ProfessionalError::NotFound => AppError::NotFound("Professional not found".to_string()),
        ProfessionalError::ExceptionNotFound(date) => {
            AppError::NotFound(format!("No availability exception on {}", date))
        }
        ProfessionalError::ValidationError(msg) => AppError::ValidationError(msg),
        ProfessionalError::StorageError(msg) => AppError::Storage(msg),
    }
}

#[axum::debug_handler]
pub async fn list_professionals(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
) -> Result<Json<Value>, AppError> {
    let service = ProfessionalService::new(&state);
    let professionals = service.list(&ctx).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "count": professionals.len(),
        "professionals": professionals
    })))
}

#[axum::debug_handler]
pub async fn get_professional(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(professional_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = ProfessionalService::new(&state);
    let professional = service.get(&ctx, professional_id).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "professional": professional
    })))
}

#[axum::debug_handler]
pub async fn create_professional(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Json(request): Json<CreateProfessionalRequest>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = ProfessionalService::new(&state);
    let professional = service.create(&ctx, request).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "professional": professional
    })))
}

#[axum::debug_handler]
pub async fn update_professional(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(professional_id): Path<Uuid>,
    Json(request): Json<UpdateProfessionalRequest>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = ProfessionalService::new(&state);
    let professional = service
        .update(&ctx, professional_id, request)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "professional": professional
    })))
}

#[axum::debug_handler]
pub async fn delete_professional(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(professional_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = ProfessionalService::new(&state);
    service.delete(&ctx, professional_id).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Professional deleted"
    })))
}

#[axum::debug_handler]
pub async fn replace_availability(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(professional_id): Path<Uuid>,
    Json(request): Json<ReplaceAvailabilityRequest>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = AvailabilityService::new(&state);
    let professional = service
        .replace_weekly_rules(&ctx, professional_id, request.availability)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "professional": professional
    })))
}

#[axum::debug_handler]
pub async fn upsert_exception(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(professional_id): Path<Uuid>,
    Json(request): Json<UpsertExceptionRequest>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = AvailabilityService::new(&state);
    let professional = service
        .upsert_exception(&ctx, professional_id, request)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "professional": professional
    })))
}

#[axum::debug_handler]
pub async fn remove_exception(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path((professional_id, date)): Path<(Uuid, NaiveDate)>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = AvailabilityService::new(&state);
    let professional = service
        .remove_exception(&ctx, professional_id, date)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "professional": professional
    })))
}

/// Day sheet: resolved working hours for one date.
#[axum::debug_handler]
pub async fn get_day_schedule(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(professional_id): Path<Uuid>,
    Query(query): Query<DayQuery>,
) -> Result<Json<Value>, AppError> {
    let service = SchedulingService::new(&state);
    let day = service
        .day_schedule(&ctx, professional_id, query.date)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "date": query.date,
        "schedule": day
    })))
}

/// Bookable start times for one date, booked slots already removed.
#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(professional_id): Path<Uuid>,
    Query(query): Query<DayQuery>,
) -> Result<Json<Value>, AppError> {
    let service = SchedulingService::new(&state);
    let slots = service
        .available_slots(&ctx, professional_id, query.date)
        .await
        .map_err(map_error)?;

    let slots: Vec<String> = slots
        .iter()
        .map(|slot| slot.format("%H:%M").to_string())
        .collect();

    Ok(Json(json!({
        "success": true,
        "date": query.date,
        "professionalId": professional_id,
        "slots": slots
    })))
}
