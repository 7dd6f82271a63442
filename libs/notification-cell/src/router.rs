use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_storage::AppState;
use shared_utils::tenant_middleware;

use crate::handlers;

pub fn notification_routes(state: Arc<AppState>) -> Router {
    let protected_routes = Router::new()
        .route("/", get(handlers::list_notification_logs))
        .layer(middleware::from_fn_with_state(state.clone(), tenant_middleware));

    Router::new().merge(protected_routes).with_state(state)
}
