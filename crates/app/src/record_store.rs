//! In-process record store backed by a lock-guarded map.

use std::collections::HashMap;

use tokio::sync::RwLock;

use svcorder_domain::error::{ConflictError, NotFoundError, SvcOrderError};
use svcorder_domain::order::ServiceOrder;

use crate::ports::ServiceOrderRepository;

/// In-memory [`ServiceOrderRepository`].
///
/// Orders live as long as the store. Every check-then-mutate sequence runs
/// under a single write lock, so two concurrent creates of the same id
/// cannot both succeed.
#[derive(Default)]
pub struct InMemoryRecordStore {
    inner: RwLock<Records>,
}

#[derive(Default)]
struct Records {
    by_id: HashMap<String, ServiceOrder>,
    /// Service ids in insertion order.
    order: Vec<String>,
}

impl InMemoryRecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.inner.read().await.by_id.len()
    }
}

impl ServiceOrderRepository for InMemoryRecordStore {
    async fn create(&self, order: ServiceOrder) -> Result<ServiceOrder, SvcOrderError> {
        let service_id = order.service_id().to_string();
        let mut records = self.inner.write().await;
        if records.by_id.contains_key(&service_id) {
            return Err(ConflictError::new(service_id).into());
        }
        records.order.push(service_id.clone());
        records.by_id.insert(service_id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, service_id: &str) -> Result<Option<ServiceOrder>, SvcOrderError> {
        Ok(self.inner.read().await.by_id.get(service_id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<ServiceOrder>, SvcOrderError> {
        let records = self.inner.read().await;
        Ok(records
            .order
            .iter()
            .filter_map(|id| records.by_id.get(id).cloned())
            .collect())
    }

    async fn update(&self, mut order: ServiceOrder) -> Result<ServiceOrder, SvcOrderError> {
        let mut records = self.inner.write().await;
        let Some(existing) = records.by_id.get_mut(order.service_id()) else {
            return Err(NotFoundError::new(order.service_id()).into());
        };
        order.created_at = existing.created_at;
        *existing = order.clone();
        Ok(order)
    }

    async fn delete_by_id(&self, service_id: &str) -> Result<bool, SvcOrderError> {
        let mut records = self.inner.write().await;
        if records.by_id.remove(service_id).is_none() {
            return Ok(false);
        }
        records.order.retain(|id| id != service_id);
        Ok(true)
    }

    async fn exists_by_id(&self, service_id: &str) -> Result<bool, SvcOrderError> {
        Ok(self.inner.read().await.by_id.contains_key(service_id))
    }
}
