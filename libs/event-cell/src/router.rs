use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use shared_storage::AppState;
use shared_utils::tenant_middleware;

use crate::handlers;

pub fn event_routes(state: Arc<AppState>) -> Router {
    let protected_routes = Router::new()
        .route("/", get(handlers::list_events))
        .route("/", post(handlers::create_event))
        .route("/{event_id}", get(handlers::get_event))
        .route("/{event_id}", put(handlers::update_event))
        .route("/{event_id}", delete(handlers::delete_event))
        .route("/{event_id}/enroll", post(handlers::enroll_client))
        .layer(middleware::from_fn_with_state(state.clone(), tenant_middleware));

    Router::new().merge(protected_routes).with_state(state)
}
