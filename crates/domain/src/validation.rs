//! Mandatory-field and format validation for incoming records.

use crate::error::ValidationError;
use crate::record::ServiceRecord;
use crate::rules;

/// Check that every mandatory field is present and the contact number is
/// well formed.
///
/// Fields are checked in request order and the first failure is reported.
///
/// # Errors
///
/// Returns the [`ValidationError`] describing the first offending field.
pub fn validate(record: &ServiceRecord) -> Result<(), ValidationError> {
    require_text(record.service_id.as_deref(), "ServiceId")?;
    require_text(record.service_type.as_deref(), "ServiceType")?;
    require_text(record.customer_id.as_deref(), "CustomerId")?;
    require_text(record.subscription_id.as_deref(), "SubscriptionId")?;

    let details = record
        .service_details
        .as_ref()
        .ok_or(ValidationError::MissingValue("ServiceDetails"))?;
    require_text(details.plan_type.as_deref(), "PlanType")?;
    if details.roaming_enabled.is_none() {
        return Err(ValidationError::MissingValue("RoamingEnabled"));
    }

    let customer = record
        .customer_details
        .as_ref()
        .ok_or(ValidationError::MissingValue("CustomerDetails"))?;
    require_text(customer.name.as_deref(), "Name")?;
    require_text(customer.contact_number.as_deref(), "ContactNumber")?;

    if rules::has_invalid_contact_format(customer.contact_number.as_deref()) {
        return Err(ValidationError::InvalidContactNumber);
    }
    Ok(())
}

/// Check that an identifier used for lookups is present and not blank.
///
/// # Errors
///
/// Returns [`ValidationError::Required`] naming `field`.
pub fn require_id(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

fn require_text(value: Option<&str>, field: &'static str) -> Result<(), ValidationError> {
    if rules::is_blank(value) {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}
