//! Service order service: use-cases for managing service orders.

use svcorder_domain::error::{ConflictError, NotFoundError, SvcOrderError};
use svcorder_domain::order::ServiceOrder;
use svcorder_domain::record::ServiceRecord;
use svcorder_domain::{transform, validation};

use crate::ports::ServiceOrderRepository;

const SERVICE_ID: &str = "ServiceId";

/// Application service for service order CRUD operations.
///
/// Create and update run validate, existence check, transform, then the
/// store mutation. The first failing step short-circuits.
pub struct ServiceOrderService<R> {
    repo: R,
}

impl<R: ServiceOrderRepository> ServiceOrderService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Activate a new service order.
    ///
    /// # Errors
    ///
    /// Returns [`SvcOrderError::Validation`] if the record is incomplete or a
    /// rule rejects it, [`SvcOrderError::Conflict`] if the id is taken, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, record), fields(service_id = record.id().unwrap_or_default()))]
    pub async fn create_service(&self, record: ServiceRecord) -> Result<ServiceOrder, SvcOrderError> {
        validation::validate(&record)?;
        let service_id = record.id().unwrap_or_default();
        if self.repo.exists_by_id(service_id).await? {
            return Err(ConflictError::new(service_id).into());
        }

        let enriched = transform::apply(&record).into_checked()?;
        let order = self.repo.create(ServiceOrder::stamped(enriched)).await?;
        tracing::info!(
            vip_customer = order.enriched.vip_customer,
            special_offer = order.enriched.special_offer.as_deref(),
            "service order created"
        );
        Ok(order)
    }

    /// Look up an order by service id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SvcOrderError::Validation`] when `service_id` is blank,
    /// [`SvcOrderError::NotFound`] when no order exists, or a storage error
    /// from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_service(&self, service_id: &str) -> Result<ServiceOrder, SvcOrderError> {
        validation::require_id(service_id, SERVICE_ID)?;
        self.repo
            .find_by_id(service_id)
            .await?
            .ok_or_else(|| NotFoundError::new(service_id).into())
    }

    /// List all orders.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_services(&self) -> Result<Vec<ServiceOrder>, SvcOrderError> {
        self.repo.find_all().await
    }

    /// Replace an existing order with a newly validated record.
    ///
    /// # Errors
    ///
    /// Returns [`SvcOrderError::Validation`] if the record is incomplete or a
    /// rule rejects it, [`SvcOrderError::NotFound`] if the id is unknown, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, record), fields(service_id = record.id().unwrap_or_default()))]
    pub async fn update_service(&self, record: ServiceRecord) -> Result<ServiceOrder, SvcOrderError> {
        validation::validate(&record)?;
        let service_id = record.id().unwrap_or_default();
        if !self.repo.exists_by_id(service_id).await? {
            return Err(NotFoundError::new(service_id).into());
        }

        let enriched = transform::apply(&record).into_checked()?;
        self.repo.update(ServiceOrder::stamped(enriched)).await
    }

    /// Delete an order by service id.
    ///
    /// # Errors
    ///
    /// Returns [`SvcOrderError::Validation`] when `service_id` is blank,
    /// [`SvcOrderError::NotFound`] when nothing was removed, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_service(&self, service_id: &str) -> Result<(), SvcOrderError> {
        validation::require_id(service_id, SERVICE_ID)?;
        if self.repo.delete_by_id(service_id).await? {
            Ok(())
        } else {
            Err(NotFoundError::new(service_id).into())
        }
    }
}
