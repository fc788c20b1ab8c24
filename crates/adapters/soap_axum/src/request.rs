//! Request mapping: XML payload element to [`ServiceRecord`].
//!
//! Parsing is lenient. Missing elements become `None` and containers are
//! only read when present; validation happens later in the domain.

use svcorder_domain::record::{Address, CustomerDetails, ServiceDetails, ServiceRecord};

use crate::xml::Element;

/// Read a `Create` or `Update` payload.
#[must_use]
pub fn parse_record(request: &Element) -> ServiceRecord {
    ServiceRecord {
        service_id: parse_service_id(request),
        service_type: request.find_text("ServiceType"),
        customer_id: request.find_text("CustomerId"),
        subscription_id: request.find_text("SubscriptionId"),
        service_details: request.find("ServiceDetails").map(parse_service_details),
        customer_details: request.find("CustomerDetails").map(parse_customer_details),
    }
}

/// Read the `ServiceId` of any payload.
#[must_use]
pub fn parse_service_id(request: &Element) -> Option<String> {
    request.find_text("ServiceId")
}

/// `RoamingEnabled` is trimmed before the case-insensitive `"true"`
/// comparison, so `" true "` reads as enabled where a strict boolean parse
/// would yield `false`.
fn parse_service_details(element: &Element) -> ServiceDetails {
    ServiceDetails {
        plan_type: element.find_text("PlanType"),
        data_limit: element.find_text("DataLimit"),
        roaming_enabled: element
            .find_text("RoamingEnabled")
            .map(|value| value.trim().eq_ignore_ascii_case("true")),
        additional_services: element
            .find("AdditionalServices")
            .map(|services| {
                services
                    .find_all("Service")
                    .into_iter()
                    .map(Element::text)
                    .collect()
            })
            .unwrap_or_default(),
    }
}

fn parse_customer_details(element: &Element) -> CustomerDetails {
    CustomerDetails {
        name: element.find_text("Name"),
        contact_number: element.find_text("ContactNumber"),
        address: element.find("Address").map(|address| Address {
            street: address.find_text("Street"),
            city: address.find_text("City"),
            postal_code: address.find_text("PostalCode"),
            country: address.find_text("Country"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREATE: &str = r#"
        <tel:Create xmlns:tel="test">
            <tel:ServiceId>SVC-1</tel:ServiceId>
            <tel:ServiceType>Mobile</tel:ServiceType>
            <tel:CustomerId>123456789</tel:CustomerId>
            <tel:SubscriptionId>SUB-1</tel:SubscriptionId>
            <tel:ServiceDetails>
                <tel:PlanType>5G</tel:PlanType>
                <tel:RoamingEnabled>TRUE</tel:RoamingEnabled>
                <tel:AdditionalServices>
                    <tel:Service>VoLTE</tel:Service>
                    <tel:Service>eSIM</tel:Service>
                </tel:AdditionalServices>
            </tel:ServiceDetails>
            <tel:CustomerDetails>
                <tel:Name>Astrid</tel:Name>
                <tel:ContactNumber>+46701234567</tel:ContactNumber>
                <tel:Address>
                    <tel:Street>Storgatan 1</tel:Street>
                    <tel:City>Stockholm</tel:City>
                    <tel:PostalCode>11122</tel:PostalCode>
                    <tel:Country>Sweden</tel:Country>
                </tel:Address>
            </tel:CustomerDetails>
        </tel:Create>"#;

    #[test]
    fn should_parse_full_create_payload() {
        let record = parse_record(&Element::parse(CREATE).unwrap());

        assert_eq!(record.service_id.as_deref(), Some("SVC-1"));
        assert_eq!(record.service_type.as_deref(), Some("Mobile"));
        assert_eq!(record.customer_id.as_deref(), Some("123456789"));
        assert_eq!(record.subscription_id.as_deref(), Some("SUB-1"));

        let details = record.service_details.unwrap();
        assert_eq!(details.plan_type.as_deref(), Some("5G"));
        assert_eq!(details.data_limit, None);
        assert_eq!(details.roaming_enabled, Some(true));
        assert_eq!(details.additional_services, ["VoLTE", "eSIM"]);

        let customer = record.customer_details.unwrap();
        assert_eq!(customer.name.as_deref(), Some("Astrid"));
        assert_eq!(customer.contact_number.as_deref(), Some("+46701234567"));
        let address = customer.address.unwrap();
        assert_eq!(address.street.as_deref(), Some("Storgatan 1"));
        assert_eq!(address.city.as_deref(), Some("Stockholm"));
        assert_eq!(address.postal_code.as_deref(), Some("11122"));
        assert_eq!(address.country.as_deref(), Some("Sweden"));
    }

    #[test]
    fn should_leave_absent_containers_unset() {
        let request = Element::parse("<Create><ServiceId>SVC-2</ServiceId></Create>").unwrap();
        let record = parse_record(&request);

        assert_eq!(record.service_id.as_deref(), Some("SVC-2"));
        assert!(record.service_type.is_none());
        assert!(record.service_details.is_none());
        assert!(record.customer_details.is_none());
    }

    #[test]
    fn should_read_any_roaming_text_other_than_true_as_false() {
        let request = Element::parse(
            "<Create><ServiceDetails><RoamingEnabled>yes</RoamingEnabled></ServiceDetails></Create>",
        )
        .unwrap();
        let details = parse_record(&request).service_details.unwrap();
        assert_eq!(details.roaming_enabled, Some(false));
    }

    #[test]
    fn should_ignore_whitespace_around_roaming_flag() {
        let record = parse_record(
            &Element::parse(
                "<Create><ServiceDetails><RoamingEnabled> true\n</RoamingEnabled></ServiceDetails></Create>",
            )
            .unwrap(),
        );
        let details = record.service_details.unwrap();
        assert_eq!(details.roaming_enabled, Some(true));
    }

    #[test]
    fn should_leave_roaming_unset_when_element_absent() {
        let request =
            Element::parse("<Create><ServiceDetails><PlanType>4G</PlanType></ServiceDetails></Create>")
                .unwrap();
        let details = parse_record(&request).service_details.unwrap();
        assert_eq!(details.roaming_enabled, None);
        assert!(details.additional_services.is_empty());
    }

    #[test]
    fn should_keep_empty_leaf_as_empty_string() {
        let request = Element::parse("<Get><ServiceId></ServiceId></Get>").unwrap();
        assert_eq!(parse_service_id(&request).as_deref(), Some(""));
    }
}
