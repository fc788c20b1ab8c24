//! Transformation engine: derives business flags from a validated record.
//!
//! [`apply`] never mutates its input. It returns an [`EnrichedRecord`]
//! holding the (possibly adjusted) record together with the derived flags.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::record::ServiceRecord;
use crate::rules;

/// A record after business rules have been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub record: ServiceRecord,
    pub vip_customer: bool,
    pub special_offer: Option<String>,
    /// Rule code raised while transforming, e.g.
    /// [`rules::INVALID_CONTACT_NUMBER`].
    pub error: Option<String>,
}

impl EnrichedRecord {
    /// Turn a raised rule code into a validation error.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Rule`] when `error` is set.
    pub fn into_checked(self) -> Result<Self, ValidationError> {
        match self.error {
            Some(code) => Err(ValidationError::Rule(code)),
            None => Ok(self),
        }
    }
}

/// Apply every business rule to `record`.
///
/// The rules are independent of each other:
/// - the VIP customer id sets `vip_customer`
/// - a 5G plan without a data limit gets the extra data offer
/// - a customer outside the home country loses roaming
/// - a malformed contact number raises [`rules::INVALID_CONTACT_NUMBER`]
#[must_use]
pub fn apply(record: &ServiceRecord) -> EnrichedRecord {
    let mut record = record.clone();

    let vip_customer = rules::is_vip_customer(record.customer_id.as_deref());

    let special_offer = rules::qualifies_for_special_offer(record.plan_type(), record.data_limit())
        .then(|| rules::EXTRA_DATA_OFFER.to_string());

    if rules::should_remove_roaming(record.country())
        && let Some(details) = record.service_details.as_mut()
    {
        details.roaming_enabled = None;
    }

    // Validation rejects these numbers first, so this only fires for
    // records that bypassed it.
    let error = rules::has_invalid_contact_format(record.contact_number())
        .then(|| rules::INVALID_CONTACT_NUMBER.to_string());

    EnrichedRecord {
        record,
        vip_customer,
        special_offer,
        error,
    }
}
