//! Response rendering: outcome of an operation to a `Response` element.

use svcorder_domain::order::ServiceOrder;

use crate::error::ErrorCode;
use crate::xml::Element;

pub const CREATED_MESSAGE: &str = "Service activated successfully";
pub const UPDATED_MESSAGE: &str = "Service updated successfully";
pub const DELETED_MESSAGE: &str = "Service deleted successfully";

const SUCCESS: &str = "Success";
const ERROR: &str = "Error";

/// `Success` with a human readable message and no record body.
#[must_use]
pub fn success(message: &str) -> Element {
    response(SUCCESS).with_child(Element::text_element("Message", message))
}

/// `Error` with its code and message.
#[must_use]
pub fn error(code: ErrorCode, message: &str) -> Element {
    response(ERROR)
        .with_child(Element::text_element("ErrorCode", code.as_str()))
        .with_child(Element::text_element("ErrorMessage", message))
}

/// `Success` with the `ServiceData` of a single order.
#[must_use]
pub fn service_data(order: &ServiceOrder) -> Element {
    let record = order.record();
    let data = Element::new("ServiceData")
        .with_child(text("ServiceId", record.service_id.as_deref()))
        .with_child(text("ServiceType", record.service_type.as_deref()))
        .with_child(text("CustomerId", record.customer_id.as_deref()));
    response(SUCCESS).with_child(data)
}

/// `Success` with one `Service` entry per order. The `Services` container
/// is present even when there are no orders.
#[must_use]
pub fn service_list(orders: &[ServiceOrder]) -> Element {
    let mut services = Element::new("Services");
    for order in orders {
        let record = order.record();
        services.push_child(
            Element::new("Service")
                .with_child(text("ServiceId", record.service_id.as_deref()))
                .with_child(text("ServiceType", record.service_type.as_deref())),
        );
    }
    response(SUCCESS).with_child(services)
}

fn response(status: &str) -> Element {
    Element::new("Response").with_child(Element::text_element("Status", status))
}

fn text(name: &str, value: Option<&str>) -> Element {
    Element::text_element(name, value.unwrap_or_default())
}
