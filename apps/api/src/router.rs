use std::sync::Arc;

use axum::{extract::Extension, middleware, response::Json, routing::get, Router};
use serde_json::{json, Value};

use appointment_cell::router::appointment_routes;
use catalog_cell::router::catalog_routes;
use client_cell::router::client_routes;
use company_cell::router::company_routes;
use event_cell::router::event_routes;
use finance_cell::router::finance_routes;
use notification_cell::router::notification_routes;
use professional_cell::router::professional_routes;
use shared_models::User;
use shared_storage::AppState;
use shared_utils::tenant_middleware;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Session probe: resolves the bearer token to its stored user.
    let session_routes = Router::new()
        .route("/me", get(current_user))
        .layer(middleware::from_fn_with_state(state.clone(), tenant_middleware))
        .with_state(state.clone());

    Router::new()
        .route("/", get(|| async { "Cronos API is running!" }))
        .merge(session_routes)
        .nest("/companies", company_routes(state.clone()))
        .nest("/clients", client_routes(state.clone()))
        .nest("/services", catalog_routes(state.clone()))
        .nest("/professionals", professional_routes(state.clone()))
        .nest("/appointments", appointment_routes(state.clone()))
        .nest("/finance", finance_routes(state.clone()))
        .nest("/notifications", notification_routes(state.clone()))
        .nest("/events", event_routes(state))
}

async fn current_user(Extension(user): Extension<User>) -> Json<Value> {
    Json(json!({
        "success": true,
        "user": user
    }))
}
