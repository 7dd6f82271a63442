// libs/appointment-cell/src/handlers.rs
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

use crate::error::AppointmentError;
use crate::models::{
    AppointmentSearchQuery, CompleteAppointmentRequest, CreateAppointmentRequest,
    UpdateAppointmentRequest,
};
use crate::services::BookingService;

fn map_error(err: AppointmentError) -> AppError {
    match err {
        AppointmentError::NotFound => AppError::NotFound("Appointment not found".to_string()),
        AppointmentError::ClientNotFound => AppError::NotFound("Client not found".to_string()),
        AppointmentError::ServiceNotFound => AppError::NotFound("Service not found".to_string()),
        AppointmentError::ProfessionalNotFound => {
            AppError::NotFound("Professional not found".to_string())
        }
        AppointmentError::SlotNotAvailable => {
            AppError::Conflict("Requested time is not an offered slot".to_string())
        }
        AppointmentError::ConflictDetected => {
            AppError::Conflict("Appointment conflicts with an existing booking".to_string())
        }
        AppointmentError::InvalidStatusTransition(current, target) => AppError::Conflict(format!(
            "Appointment cannot move from {} to {}",
            current, target
        )),
        AppointmentError::ValidationError(msg) => AppError::ValidationError(msg),
        AppointmentError::StorageError(msg) => AppError::Storage(msg),
    }
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = BookingService::new(&state);
    let appointment = service.book(&ctx, request).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment
    })))
}

#[axum::debug_handler]
pub async fn search_appointments(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Query(query): Query<AppointmentSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let service = BookingService::new(&state);
    let appointments = service.search(&ctx, query).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "count": appointments.len(),
        "appointments": appointments
    })))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = BookingService::new(&state);
    let appointment = service
        .get(&ctx, appointment_id)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment
    })))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = BookingService::new(&state);
    let appointment = service
        .update(&ctx, appointment_id, request)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment
    })))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = BookingService::new(&state);
    let appointment = service
        .cancel(&ctx, appointment_id)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment
    })))
}

#[axum::debug_handler]
pub async fn complete_appointment(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<CompleteAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = BookingService::new(&state);
    let appointment = service
        .complete(&ctx, appointment_id, request.payment_method)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment
    })))
}

#[axum::debug_handler]
pub async fn get_appointment_stats(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
) -> Result<Json<Value>, AppError> {
    let service = BookingService::new(&state);
    let stats = service.stats(&ctx).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "stats": stats
    })))
}
