//! SOAP envelope handling.
//!
//! Payloads may arrive bare or inside `Envelope/Body`. Responses are
//! wrapped the same way the request was.

use crate::error::SoapError;
use crate::xml::Element;

pub const SOAP_11_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const SOAP_12_NS: &str = "http://www.w3.org/2003/05/soap-envelope";

const PREFIX: &str = "soapenv";

/// SOAP namespace of `document` when it is an envelope.
#[must_use]
pub fn soap_namespace(document: &Element) -> Option<&str> {
    if document.local_name() != "Envelope" {
        return None;
    }
    document
        .namespace()
        .filter(|ns| *ns == SOAP_11_NS || *ns == SOAP_12_NS)
}

/// The operation element: the first child of `Body` for an envelope, the
/// document itself otherwise.
///
/// # Errors
///
/// Returns [`SoapError::MissingBody`] or [`SoapError::EmptyBody`] for an
/// envelope without a usable body.
pub fn payload(document: &Element) -> Result<&Element, SoapError> {
    if soap_namespace(document).is_none() {
        return Ok(document);
    }
    let body = document
        .children()
        .find(|child| child.local_name() == "Body")
        .ok_or(SoapError::MissingBody)?;
    body.children().next().ok_or(SoapError::EmptyBody)
}

/// Wrap `response` in an envelope of `soap_ns`, or return it unchanged.
#[must_use]
pub fn wrap(response: Element, soap_ns: Option<&str>) -> Element {
    match soap_ns {
        Some(ns) => Element::new(format!("{PREFIX}:Envelope"))
            .with_attribute(format!("xmlns:{PREFIX}"), ns)
            .with_child(Element::new(format!("{PREFIX}:Header")))
            .with_child(Element::new(format!("{PREFIX}:Body")).with_child(response)),
        None => response,
    }
}
