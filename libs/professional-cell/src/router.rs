use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use shared_storage::AppState;
use shared_utils::tenant_middleware;

use crate::handlers;

pub fn professional_routes(state: Arc<AppState>) -> Router {
    let protected_routes = Router::new()
        .route("/", get(handlers::list_professionals))
        .route("/", post(handlers::create_professional))
        .route("/{professional_id}", get(handlers::get_professional))
        .route("/{professional_id}", put(handlers::update_professional))
        .route("/{professional_id}", delete(handlers::delete_professional))
        // Weekly schedule and per-date exceptions
        .route("/{professional_id}/availability", put(handlers::replace_availability))
        .route("/{professional_id}/exceptions", put(handlers::upsert_exception))
        .route(
            "/{professional_id}/exceptions/{date}",
            delete(handlers::remove_exception),
        )
        // Resolved day views
        .route("/{professional_id}/schedule", get(handlers::get_day_schedule))
        .route("/{professional_id}/slots", get(handlers::get_available_slots))
        .layer(middleware::from_fn_with_state(state.clone(), tenant_middleware));

    Router::new().merge(protected_routes).with_state(state)
}
