//! Service order repository port: keyed storage for orders.

use std::future::Future;

use svcorder_domain::error::SvcOrderError;
use svcorder_domain::order::ServiceOrder;

/// Repository for persisting and querying [`ServiceOrder`]s by service id.
///
/// Implementations must perform each check-and-mutate (`create`, `update`,
/// `delete_by_id`) atomically with respect to the others.
pub trait ServiceOrderRepository {
    /// Store a new order.
    ///
    /// Fails with [`SvcOrderError::Conflict`] if the id is already taken.
    fn create(
        &self,
        order: ServiceOrder,
    ) -> impl Future<Output = Result<ServiceOrder, SvcOrderError>> + Send;

    /// Get an order by its service id.
    fn find_by_id(
        &self,
        service_id: &str,
    ) -> impl Future<Output = Result<Option<ServiceOrder>, SvcOrderError>> + Send;

    /// Get all orders, in insertion order.
    fn find_all(&self) -> impl Future<Output = Result<Vec<ServiceOrder>, SvcOrderError>> + Send;

    /// Replace an existing order.
    ///
    /// Fails with [`SvcOrderError::NotFound`] if the id is unknown.
    fn update(
        &self,
        order: ServiceOrder,
    ) -> impl Future<Output = Result<ServiceOrder, SvcOrderError>> + Send;

    /// Remove an order, returning whether one was removed.
    fn delete_by_id(
        &self,
        service_id: &str,
    ) -> impl Future<Output = Result<bool, SvcOrderError>> + Send;

    /// Whether an order with this service id exists.
    fn exists_by_id(
        &self,
        service_id: &str,
    ) -> impl Future<Output = Result<bool, SvcOrderError>> + Send;
}
