//! SOAP endpoint: one POST handler dispatching on the payload element.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::Instrument;
use uuid::Uuid;

use svcorder_app::ports::ServiceOrderRepository;

use crate::envelope;
use crate::error::{ErrorCode, SoapError};
use crate::request;
use crate::response::{self, CREATED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE};
use crate::state::AppState;
use crate::xml::Element;

const CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Operations served by the endpoint, keyed by payload local name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Get,
    Update,
    Delete,
    GetAll,
}

impl Operation {
    #[must_use]
    pub fn from_local_name(name: &str) -> Option<Self> {
        match name {
            "Create" => Some(Self::Create),
            "Get" => Some(Self::Get),
            "Update" => Some(Self::Update),
            "Delete" => Some(Self::Delete),
            "GetAll" => Some(Self::GetAll),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Get => "Get",
            Self::Update => "Update",
            Self::Delete => "Delete",
            Self::GetAll => "GetAll",
        }
    }
}

/// A rendered `Response` document, always sent with status `200`.
#[derive(Debug)]
pub struct SoapResponse(pub Element);

impl IntoResponse for SoapResponse {
    fn into_response(self) -> Response {
        match self.0.to_xml() {
            Ok(xml) => ([(header::CONTENT_TYPE, CONTENT_TYPE)], xml).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize response");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// `POST` handler for the SOAP path.
pub async fn handle<R>(State(state): State<AppState<R>>, body: Bytes) -> SoapResponse
where
    R: ServiceOrderRepository + Send + Sync + 'static,
{
    let span = tracing::info_span!(
        "soap_request",
        request_id = %Uuid::new_v4(),
        operation = tracing::field::Empty,
    );
    process(&state, &body).instrument(span).await
}

async fn process<R>(state: &AppState<R>, body: &[u8]) -> SoapResponse
where
    R: ServiceOrderRepository + Send + Sync + 'static,
{
    let document = match Element::parse_bytes(body) {
        Ok(document) => document,
        Err(err) => return SoapResponse(fault(&SoapError::from(err))),
    };

    let soap_ns = envelope::soap_namespace(&document);
    let response = match envelope::payload(&document) {
        Ok(payload) => dispatch(state, payload)
            .await
            .unwrap_or_else(|err| fault(&err)),
        Err(err) => fault(&err),
    };
    SoapResponse(envelope::wrap(response, soap_ns))
}

async fn dispatch<R>(state: &AppState<R>, payload: &Element) -> Result<Element, SoapError>
where
    R: ServiceOrderRepository + Send + Sync + 'static,
{
    let operation = Operation::from_local_name(payload.local_name())
        .ok_or_else(|| SoapError::UnsupportedOperation(payload.local_name().to_string()))?;
    tracing::Span::current().record("operation", operation.as_str());

    let service = &state.order_service;
    let response = match operation {
        Operation::Create => {
            service.create_service(request::parse_record(payload)).await?;
            response::success(CREATED_MESSAGE)
        }
        Operation::Get => {
            let service_id = request::parse_service_id(payload).unwrap_or_default();
            response::service_data(&service.get_service(&service_id).await?)
        }
        Operation::Update => {
            service.update_service(request::parse_record(payload)).await?;
            response::success(UPDATED_MESSAGE)
        }
        Operation::Delete => {
            let service_id = request::parse_service_id(payload).unwrap_or_default();
            service.delete_service(&service_id).await?;
            response::success(DELETED_MESSAGE)
        }
        Operation::GetAll => response::service_list(&service.list_services().await?),
    };
    tracing::debug!("request handled");
    Ok(response)
}

fn fault(err: &SoapError) -> Element {
    let code = err.code();
    match code {
        ErrorCode::Internal => tracing::error!(error = %err, code = %code, "request failed"),
        ErrorCode::BadRequest | ErrorCode::NotFound => {
            tracing::warn!(error = %err, code = %code, "request rejected");
        }
    }
    response::error(code, &err.message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::SOAP_11_NS;
    use crate::router;
    use axum::Router;
    use axum::body::Body;
    use axum::http::Request;
    use svcorder_app::record_store::InMemoryRecordStore;
    use svcorder_app::services::order_service::ServiceOrderService;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AppState::new(ServiceOrderService::new(InMemoryRecordStore::new()));
        router::build(state, "/ws")
    }

    async fn call(app: &Router, body: &str) -> Element {
        call_raw(app, body.as_bytes().to_vec()).await
    }

    async fn call_raw(app: &Router, body: Vec<u8>) -> Element {
        let response = app
            .clone()
            .oneshot(
                Request::post("/ws")
                    .header(header::CONTENT_TYPE, "text/xml")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], CONTENT_TYPE);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        Element::parse(std::str::from_utf8(&bytes).unwrap()).unwrap()
    }

    fn create(id: &str, contact: &str) -> String {
        format!(
            "<Create>\
                <ServiceId>{id}</ServiceId>\
                <ServiceType>Mobile</ServiceType>\
                <CustomerId>42</CustomerId>\
                <SubscriptionId>SUB-1</SubscriptionId>\
                <ServiceDetails><PlanType>4G</PlanType><RoamingEnabled>true</RoamingEnabled></ServiceDetails>\
                <CustomerDetails><Name>Astrid</Name><ContactNumber>{contact}</ContactNumber></CustomerDetails>\
            </Create>"
        )
    }

    #[test]
    fn should_map_local_names_to_operations() {
        assert_eq!(Operation::from_local_name("GetAll"), Some(Operation::GetAll));
        assert_eq!(Operation::from_local_name("Create").map(Operation::as_str), Some("Create"));
        assert_eq!(Operation::from_local_name("create"), None);
    }

    #[tokio::test]
    async fn should_create_then_get_order() {
        let app = app();
        let created = call(&app, &create("SVC-1", "+12345678901")).await;
        assert_eq!(created.find_text("Status").as_deref(), Some("Success"));
        assert_eq!(
            created.find_text("Message").as_deref(),
            Some("Service activated successfully")
        );

        let fetched = call(&app, "<Get><ServiceId>SVC-1</ServiceId></Get>").await;
        let data = fetched.find("ServiceData").unwrap();
        assert_eq!(data.find_text("ServiceId").as_deref(), Some("SVC-1"));
        assert_eq!(data.find_text("ServiceType").as_deref(), Some("Mobile"));
        assert_eq!(data.find_text("CustomerId").as_deref(), Some("42"));
    }

    #[tokio::test]
    async fn should_report_duplicate_create_as_bad_request() {
        let app = app();
        call(&app, &create("SVC-1", "+12345678901")).await;

        let response = call(&app, &create("SVC-1", "+12345678901")).await;
        assert_eq!(response.find_text("Status").as_deref(), Some("Error"));
        assert_eq!(response.find_text("ErrorCode").as_deref(), Some("400"));
        assert_eq!(
            response.find_text("ErrorMessage").as_deref(),
            Some("ServiceId SVC-1 already exists")
        );
    }

    #[tokio::test]
    async fn should_report_bad_contact_number() {
        let response = call(&app(), &create("SVC-1", "+1234567890")).await;
        assert_eq!(response.find_text("ErrorCode").as_deref(), Some("400"));
    }

    #[tokio::test]
    async fn should_report_unknown_id_as_not_found() {
        let app = app();
        for body in [
            "<Get><ServiceId>SVC-404</ServiceId></Get>".to_string(),
            "<Delete><ServiceId>SVC-404</ServiceId></Delete>".to_string(),
            create("SVC-404", "+12345678901").replace("Create>", "Update>"),
        ] {
            let response = call(&app, &body).await;
            assert_eq!(response.find_text("ErrorCode").as_deref(), Some("404"));
            assert_eq!(
                response.find_text("ErrorMessage").as_deref(),
                Some("ServiceId SVC-404 not found")
            );
        }
    }

    #[tokio::test]
    async fn should_require_service_id_on_get_and_delete() {
        let app = app();
        for body in ["<Get><ServiceId> </ServiceId></Get>", "<Delete/>"] {
            let response = call(&app, body).await;
            assert_eq!(response.find_text("ErrorCode").as_deref(), Some("400"));
            assert_eq!(
                response.find_text("ErrorMessage").as_deref(),
                Some("ServiceId is required")
            );
        }
    }

    #[tokio::test]
    async fn should_update_and_delete_order() {
        let app = app();
        call(&app, &create("SVC-1", "+12345678901")).await;

        let update = create("SVC-1", "+12345678901")
            .replace("Create>", "Update>")
            .replace("Mobile", "Broadband");
        let updated = call(&app, &update).await;
        assert_eq!(
            updated.find_text("Message").as_deref(),
            Some("Service updated successfully")
        );
        let fetched = call(&app, "<Get><ServiceId>SVC-1</ServiceId></Get>").await;
        assert_eq!(fetched.find_text("ServiceType").as_deref(), Some("Broadband"));

        let deleted = call(&app, "<Delete><ServiceId>SVC-1</ServiceId></Delete>").await;
        assert_eq!(
            deleted.find_text("Message").as_deref(),
            Some("Service deleted successfully")
        );
        let listed = call(&app, "<GetAll/>").await;
        assert_eq!(listed.find("Services").unwrap().children().count(), 0);
    }

    #[tokio::test]
    async fn should_list_every_order() {
        let app = app();
        for id in ["SVC-1", "SVC-2", "SVC-3"] {
            call(&app, &create(id, "+12345678901")).await;
        }

        let listed = call(&app, "<GetAll/>").await;
        assert_eq!(listed.find_text("Status").as_deref(), Some("Success"));
        assert_eq!(listed.find_all("Service").len(), 3);
    }

    #[tokio::test]
    async fn should_wrap_response_when_request_is_enveloped() {
        let body = format!(
            r#"<soapenv:Envelope xmlns:soapenv="{SOAP_11_NS}" xmlns:tel="urn:telecom">
                <soapenv:Header/>
                <soapenv:Body><tel:GetAll/></soapenv:Body>
            </soapenv:Envelope>"#
        );
        let response = call(&app(), &body).await;

        assert_eq!(response.local_name(), "Envelope");
        assert_eq!(envelope::soap_namespace(&response), Some(SOAP_11_NS));
        let payload = envelope::payload(&response).unwrap();
        assert_eq!(payload.name(), "Response");
        assert_eq!(payload.find_text("Status").as_deref(), Some("Success"));
    }

    #[tokio::test]
    async fn should_answer_malformed_xml_with_error_response() {
        let response = call(&app(), "<Get><ServiceId>SVC-1</Get>").await;
        assert_eq!(response.name(), "Response");
        assert_eq!(response.find_text("Status").as_deref(), Some("Error"));
        assert_eq!(response.find_text("ErrorCode").as_deref(), Some("400"));
    }

    #[tokio::test]
    async fn should_reject_unknown_operation() {
        let response = call(&app(), "<Purge/>").await;
        assert_eq!(response.find_text("ErrorCode").as_deref(), Some("400"));
        assert_eq!(
            response.find_text("ErrorMessage").as_deref(),
            Some("Unsupported operation: Purge")
        );
    }

    #[tokio::test]
    async fn should_answer_invalid_utf8_with_error_response() {
        let mut body = b"<Get><ServiceId>".to_vec();
        body.extend_from_slice(&[0xFF, 0xFE]);
        body.extend_from_slice(b"</ServiceId></Get>");

        let response = call_raw(&app(), body).await;
        assert_eq!(response.name(), "Response");
        assert_eq!(response.find_text("Status").as_deref(), Some("Error"));
        assert_eq!(response.find_text("ErrorCode").as_deref(), Some("400"));
        assert!(
            response
                .find_text("ErrorMessage")
                .is_some_and(|message| message.starts_with("Malformed request: invalid UTF-8"))
        );
    }
}
