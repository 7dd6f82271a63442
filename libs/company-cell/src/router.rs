use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use shared_storage::AppState;
use shared_utils::tenant_middleware;

use crate::handlers;

pub fn company_routes(state: Arc<AppState>) -> Router {
    let protected_routes = Router::new()
        // Own-company settings for the signed-in admin
        .route("/settings", get(handlers::get_settings))
        .route("/settings/notifications", put(handlers::update_notification_settings))
        .route("/", get(handlers::list_companies))
        .route("/", post(handlers::create_company))
        .route("/{company_id}", get(handlers::get_company))
        .route("/{company_id}", put(handlers::update_company))
        .route("/{company_id}", delete(handlers::delete_company))
        .layer(middleware::from_fn_with_state(state.clone(), tenant_middleware));

    Router::new().merge(protected_routes).with_state(state)
}
