//! Axum router assembly.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use svcorder_app::ports::ServiceOrderRepository;

use crate::endpoint;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the SOAP endpoint at `soap_path` and a liveness probe at
/// `/health`. Includes a [`TraceLayer`] that logs each HTTP request/response
/// at the `DEBUG` level.
pub fn build<R>(state: AppState<R>, soap_path: &str) -> Router
where
    R: ServiceOrderRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route(soap_path, post(endpoint::handle::<R>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
