//! OpenAPI documentation for the payment API.
//!
//! Served as JSON at `/api/docs` outside production.

use axum::Json;
use utoipa::OpenApi;

use super::payment::{
    CreatePaymentRequest, ErrorResponse, PaymentResponse, UpdatePaymentRequest,
};

/// Path of the OpenAPI document.
pub const DOCS_PATH: &str = "/api/docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment intake API",
        description = "PIX and credit card payment intake with Mercado Pago checkout preferences."
    ),
    paths(
        crate::adapters::http::health_check,
        crate::adapters::http::payment::handlers::create_payment,
        crate::adapters::http::payment::handlers::get_payment,
        crate::adapters::http::payment::handlers::list_payments,
        crate::adapters::http::payment::handlers::update_payment,
    ),
    components(schemas(
        CreatePaymentRequest,
        UpdatePaymentRequest,
        PaymentResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Payments", description = "Payment intake and lookup"),
        (name = "Observability", description = "Service health")
    )
)]
pub struct ApiDoc;

/// GET /api/docs - OpenAPI document
pub async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_payment_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert!(paths.contains(&"/api/v1/health"));
        assert!(paths.contains(&"/api/v1/payment"));
        assert!(paths.contains(&"/api/v1/payment/{id}"));
    }

    #[test]
    fn document_registers_request_and_response_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;

        for name in [
            "CreatePaymentRequest",
            "UpdatePaymentRequest",
            "PaymentResponse",
            "ErrorResponse",
        ] {
            assert!(schemas.contains_key(name), "missing schema {}", name);
        }
    }
}
