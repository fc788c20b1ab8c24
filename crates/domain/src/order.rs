//! Service order: an enriched record as kept by the record store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::ServiceRecord;
use crate::transform::EnrichedRecord;

/// UTC instant an order was stored or last replaced.
pub type Timestamp = DateTime<Utc>;

/// A stored service order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOrder {
    pub enriched: EnrichedRecord,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ServiceOrder {
    /// Wrap a freshly transformed record, stamping both timestamps with `at`.
    #[must_use]
    pub fn new(enriched: EnrichedRecord, at: Timestamp) -> Self {
        Self {
            enriched,
            created_at: at,
            updated_at: at,
        }
    }

    /// Same as [`ServiceOrder::new`], stamped with the current time.
    #[must_use]
    pub fn stamped(enriched: EnrichedRecord) -> Self {
        Self::new(enriched, Utc::now())
    }

    /// The store key. Empty only for orders that skipped validation.
    #[must_use]
    pub fn service_id(&self) -> &str {
        self.enriched.record.id().unwrap_or_default()
    }

    #[must_use]
    pub fn record(&self) -> &ServiceRecord {
        &self.enriched.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform;

    #[test]
    fn should_stamp_both_timestamps_on_creation() {
        let record = ServiceRecord {
            service_id: Some("SVC-9".to_string()),
            ..ServiceRecord::default()
        };
        let at = Utc::now();
        let order = ServiceOrder::new(transform::apply(&record), at);

        assert_eq!(order.service_id(), "SVC-9");
        assert_eq!(order.created_at, at);
        assert_eq!(order.updated_at, at);
    }

    #[test]
    fn should_fall_back_to_empty_id() {
        let order = ServiceOrder::stamped(transform::apply(&ServiceRecord::default()));
        assert_eq!(order.service_id(), "");
    }

    #[test]
    fn should_stamp_with_current_time() {
        let before = Utc::now();
        let order = ServiceOrder::stamped(transform::apply(&ServiceRecord::default()));
        assert!(order.created_at >= before);
        assert!(order.created_at <= Utc::now());
    }
}
