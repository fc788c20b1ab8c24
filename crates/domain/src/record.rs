//! Service record: a customer's telecom service subscription as received.
//!
//! Every leaf is optional because requests are parsed leniently; whether a
//! record is acceptable is decided by [`crate::validation`].

use serde::{Deserialize, Serialize};

/// A service subscription keyed by `service_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub service_id: Option<String>,
    pub service_type: Option<String>,
    pub customer_id: Option<String>,
    pub subscription_id: Option<String>,
    pub service_details: Option<ServiceDetails>,
    pub customer_details: Option<CustomerDetails>,
}

/// Plan and options of the subscribed service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDetails {
    pub plan_type: Option<String>,
    pub data_limit: Option<String>,
    pub roaming_enabled: Option<bool>,
    /// Add-on services, in the order they were received.
    #[serde(default)]
    pub additional_services: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl ServiceRecord {
    /// The service id, if one was supplied.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.service_id.as_deref()
    }

    #[must_use]
    pub fn plan_type(&self) -> Option<&str> {
        self.service_details.as_ref()?.plan_type.as_deref()
    }

    #[must_use]
    pub fn data_limit(&self) -> Option<&str> {
        self.service_details.as_ref()?.data_limit.as_deref()
    }

    #[must_use]
    pub fn contact_number(&self) -> Option<&str> {
        self.customer_details.as_ref()?.contact_number.as_deref()
    }

    /// Country of the customer's address, if an address was supplied.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.customer_details
            .as_ref()?
            .address
            .as_ref()?
            .country
            .as_deref()
    }
}
