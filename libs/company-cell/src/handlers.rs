use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::auth::TenantContext;
use shared_models::error::AppError;
use shared_models::NotificationSettings;
use shared_storage::AppState;
use shared_utils::{require_admin, require_master};

use crate::error::CompanyError;
use crate::models::{CreateCompanyRequest, UpdateCompanyRequest};
use crate::services::CompanyService;

fn map_error(err: CompanyError) -> AppError {
    match err {
        CompanyError::NotFound => AppError::NotFound("Company not found".to_string()),
        CompanyError::NoCompanyBound => {
            AppError::BadRequest("Session is not bound to a company".to_string())
        }
        CompanyError::ValidationError(msg) => AppError::ValidationError(msg),
        CompanyError::StorageError(msg) => AppError::Storage(msg),
    }
}

#[axum::debug_handler]
pub async fn list_companies(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
) -> Result<Json<Value>, AppError> {
    require_master(&ctx)?;

    let service = CompanyService::new(&state);
    let companies = service.list(&ctx).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "count": companies.len(),
        "companies": companies
    })))
}

#[axum::debug_handler]
pub async fn get_company(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = CompanyService::new(&state);
    let company = service.get(&ctx, company_id).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "company": company
    })))
}

#[axum::debug_handler]
pub async fn create_company(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Json(request): Json<CreateCompanyRequest>,
) -> Result<Json<Value>, AppError> {
    require_master(&ctx)?;

    let service = CompanyService::new(&state);
    let (company, admin) = service.create(&ctx, request).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "company": company,
        "adminUser": admin
    })))
}

#[axum::debug_handler]
pub async fn update_company(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(company_id): Path<Uuid>,
    Json(request): Json<UpdateCompanyRequest>,
) -> Result<Json<Value>, AppError> {
    require_master(&ctx)?;

    let service = CompanyService::new(&state);
    let company = service
        .update(&ctx, company_id, request)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "company": company
    })))
}

#[axum::debug_handler]
pub async fn delete_company(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    require_master(&ctx)?;

    let service = CompanyService::new(&state);
    service.delete(&ctx, company_id).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Company deleted"
    })))
}

/// The caller's own company, settings included.
#[axum::debug_handler]
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = CompanyService::new(&state);
    let company = service.own_company(&ctx).await.map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "company": company
    })))
}

#[axum::debug_handler]
pub async fn update_notification_settings(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<TenantContext>,
    Json(settings): Json<NotificationSettings>,
) -> Result<Json<Value>, AppError> {
    require_admin(&ctx)?;

    let service = CompanyService::new(&state);
    let company = service
        .update_notification_settings(&ctx, settings)
        .await
        .map_err(map_error)?;

    Ok(Json(json!({
        "success": true,
        "company": company
    })))
}
