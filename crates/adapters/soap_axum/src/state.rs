//! Shared application state for axum handlers.

use std::sync::Arc;

use svcorder_app::ports::ServiceOrderRepository;
use svcorder_app::services::order_service::ServiceOrderService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository to avoid dynamic dispatch. `Clone` is
/// implemented manually so only the `Arc` is cloned.
pub struct AppState<R> {
    pub order_service: Arc<ServiceOrderService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            order_service: Arc::clone(&self.order_service),
        }
    }
}

impl<R> AppState<R>
where
    R: ServiceOrderRepository + Send + Sync + 'static,
{
    pub fn new(order_service: ServiceOrderService<R>) -> Self {
        Self {
            order_service: Arc::new(order_service),
        }
    }
}
