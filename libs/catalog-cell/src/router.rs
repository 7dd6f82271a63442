use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use shared_storage::AppState;
use shared_utils::tenant_middleware;

use crate::handlers;

pub fn catalog_routes(state: Arc<AppState>) -> Router {
    let protected_routes = Router::new()
        .route("/", get(handlers::list_services))
        .route("/", post(handlers::create_service))
        .route("/{service_id}", get(handlers::get_service))
        .route("/{service_id}", put(handlers::update_service))
        .route("/{service_id}", delete(handlers::delete_service))
        .layer(middleware::from_fn_with_state(state.clone(), tenant_middleware));

    Router::new().merge(protected_routes).with_state(state)
}
