//! Business rule predicates shared by validation and transformation.

use std::sync::LazyLock;

use regex::Regex;

/// The single customer id treated as VIP.
pub const VIP_CUSTOMER_ID: &str = "123456789";

/// Plan type eligible for the special offer (compared case-insensitively).
pub const SPECIAL_OFFER_PLAN: &str = "5G";

/// Offer granted to eligible plans.
pub const EXTRA_DATA_OFFER: &str = "ExtraData";

/// Customers in this country keep roaming enabled.
pub const HOME_COUNTRY: &str = "Sweden";

/// Rule code set when a contact number is not in international format.
pub const INVALID_CONTACT_NUMBER: &str = "InvalidContactNumber";

/// A `+` followed by 11 to 15 digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\d{11,15}$").expect("phone pattern is a valid regex"));

/// Whether `value` is absent or only whitespace.
#[must_use]
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Whether a contact number is present but not in international format.
///
/// Blank numbers are not reported here; mandatory-field validation owns
/// that case.
#[must_use]
pub fn has_invalid_contact_format(contact_number: Option<&str>) -> bool {
    match contact_number.map(str::trim) {
        Some(number) if !number.is_empty() => !PHONE_PATTERN.is_match(number),
        _ => false,
    }
}

#[must_use]
pub fn is_vip_customer(customer_id: Option<&str>) -> bool {
    customer_id == Some(VIP_CUSTOMER_ID)
}

/// 5G plans without an explicit data limit qualify for extra data.
#[must_use]
pub fn qualifies_for_special_offer(plan_type: Option<&str>, data_limit: Option<&str>) -> bool {
    plan_type.is_some_and(|plan| plan.eq_ignore_ascii_case(SPECIAL_OFFER_PLAN))
        && is_blank(data_limit)
}

/// Roaming is removed for any known country other than the home country.
#[must_use]
pub fn should_remove_roaming(country: Option<&str>) -> bool {
    country.is_some_and(|c| !c.trim().eq_ignore_ascii_case(HOME_COUNTRY))
}

/// Human readable message for a rule error code.
#[must_use]
pub fn error_message(code: &str) -> String {
    if code == INVALID_CONTACT_NUMBER {
        "Invalid contact number format".to_string()
    } else {
        format!("Validation error: {code}")
    }
}
