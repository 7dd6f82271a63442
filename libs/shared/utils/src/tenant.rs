use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::TypedHeader;
use headers::{authorization::Bearer, Authorization};
use uuid::Uuid;

use shared_models::auth::TenantContext;
use shared_models::error::AppError;
use shared_storage::{AppState, UserDirectory};

/// Session middleware. Credential auth lives outside this backend; the
/// bearer token is the opaque user id issued there, resolved against the
/// user table into the TenantContext every handler scopes by.
pub async fn tenant_middleware(
    State(state): State<Arc<AppState>>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(auth) =
        auth.ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))?;

    let user_id = Uuid::parse_str(auth.token().trim())
        .map_err(|_| AppError::Auth("Malformed session token".to_string()))?;

    let user = state
        .store
        .users
        .find_by_id(user_id)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?
        .ok_or_else(|| AppError::Auth("Unknown session".to_string()))?;

    request.extensions_mut().insert(TenantContext::from(&user));
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Company admins and the master admin pass; booking-side users do not.
pub fn require_admin(ctx: &TenantContext) -> Result<(), AppError> {
    if ctx.role.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden("Administrator access required".to_string()))
    }
}

pub fn require_master(ctx: &TenantContext) -> Result<(), AppError> {
    if ctx.is_master() {
        Ok(())
    } else {
        Err(AppError::Forbidden("Master administrator access required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_models::Role;

    fn ctx(role: Role) -> TenantContext {
        TenantContext {
            user_id: Uuid::new_v4(),
            company_id: Some(Uuid::new_v4()),
            role,
        }
    }

    #[test]
    fn admin_gate_rejects_booking_users() {
        assert!(require_admin(&ctx(Role::MasterAdmin)).is_ok());
        assert!(require_admin(&ctx(Role::CompanyAdmin)).is_ok());
        assert!(require_admin(&ctx(Role::Client)).is_err());
    }

    #[test]
    fn master_gate_rejects_company_admins() {
        assert!(require_master(&ctx(Role::MasterAdmin)).is_ok());
        assert!(require_master(&ctx(Role::CompanyAdmin)).is_err());
    }
}
