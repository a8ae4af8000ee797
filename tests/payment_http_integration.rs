//! Integration tests for the payment HTTP API.
//!
//! Requests go through the full router (middleware included) backed by the
//! in-memory repository and the mock checkout gateway.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use payment_intake::adapters::http::{api_router, PaymentHandlers};
use payment_intake::adapters::{InMemoryPaymentRepository, MockPaymentGateway};
use payment_intake::application::{
    CreatePaymentHandler, GetPaymentHandler, ListPaymentsHandler, UpdatePaymentHandler,
};
use payment_intake::config::ServerConfig;
use payment_intake::ports::GatewayError;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    repository: Arc<InMemoryPaymentRepository>,
    gateway: MockPaymentGateway,
}

impl TestApp {
    fn new() -> Self {
        let repository = Arc::new(InMemoryPaymentRepository::new());
        let gateway = MockPaymentGateway::new();

        let handlers = PaymentHandlers::new(
            Arc::new(CreatePaymentHandler::new(
                repository.clone(),
                Arc::new(gateway.clone()),
            )),
            Arc::new(GetPaymentHandler::new(repository.clone())),
            Arc::new(UpdatePaymentHandler::new(repository.clone())),
            Arc::new(ListPaymentsHandler::new(repository.clone())),
        );

        Self {
            router: api_router(handlers, &ServerConfig::default()),
            repository,
            gateway,
        }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn create(&self, cpf: &str, method: &str) -> Value {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/v1/payment",
                Some(json!({
                    "cpf": cpf,
                    "description": "Monthly plan",
                    "amount": 49.9,
                    "paymentMethod": method
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "unexpected body: {}", body);
        body
    }
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn create_pix_payment_returns_201_with_pending_status() {
    let app = TestApp::new();

    let body = app.create("12345678901", "PIX").await;

    assert_eq!(body["cpf"], "12345678901");
    assert_eq!(body["description"], "Monthly plan");
    assert_eq!(body["amount"], 49.9);
    assert_eq!(body["paymentMethod"], "PIX");
    assert_eq!(body["status"], "PENDING");
    assert!(body.get("externalId").is_none());
    assert_eq!(app.gateway.call_count("create_preference"), 0);
    assert_eq!(app.repository.len().await, 1);
}

#[tokio::test]
async fn create_credit_card_payment_stores_preference_id() {
    let app = TestApp::new();

    let body = app.create("12345678901", "CREDIT_CARD").await;

    let external_id = body["externalId"].as_str().unwrap();
    assert!(external_id.starts_with("pref_mock_"));
    assert_eq!(app.gateway.call_count("create_preference"), 1);

    let requests = app.gateway.preference_requests();
    assert_eq!(requests[0].cpf, "12345678901");
    assert_eq!(requests[0].description, "Monthly plan");
}

#[tokio::test]
async fn create_with_invalid_cpf_returns_400() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/payment",
            Some(json!({
                "cpf": "123",
                "description": "Monthly plan",
                "amount": 10,
                "paymentMethod": "PIX"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PAYMENT_DATA");
    assert_eq!(body["message"], "Invalid CPF");
    assert!(app.repository.is_empty().await);
}

#[tokio::test]
async fn create_with_unknown_method_returns_400() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/payment",
            Some(json!({
                "cpf": "12345678901",
                "description": "Monthly plan",
                "amount": 10,
                "paymentMethod": "BOLETO"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid payment method");
}

#[tokio::test]
async fn create_with_malformed_json_returns_400() {
    let app = TestApp::new();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/payment")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn gateway_failure_returns_502_and_stores_nothing() {
    let app = TestApp::new();
    app.gateway
        .set_method_error("create_preference", GatewayError::network("connection reset"));

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/payment",
            Some(json!({
                "cpf": "12345678901",
                "description": "Monthly plan",
                "amount": 10,
                "paymentMethod": "CREDIT_CARD"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "EXTERNAL_PAYMENT_ERROR");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Failed to create payment preference"));
    assert!(app.repository.is_empty().await);
}

// =============================================================================
// Get / Update
// =============================================================================

#[tokio::test]
async fn get_unknown_payment_returns_404() {
    let app = TestApp::new();
    let id = "6f9619ff-8b86-d011-b42d-00c04fc964ff";

    let (status, body) = app
        .send(Method::GET, &format!("/api/v1/payment/{}", id), None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PAYMENT_NOT_FOUND");
    assert_eq!(body["message"], format!("Payment with id {} not found", id));
}

#[tokio::test]
async fn non_uuid_id_returns_404() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::GET, "/api/v1/payment/abc", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PAYMENT_NOT_FOUND");
    assert_eq!(body["message"], "Payment with id abc not found");

    let (status, _) = app
        .send(
            Method::PUT,
            "/api/v1/payment/abc",
            Some(json!({ "status": "PAID" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sub_cent_amount_is_kept_exactly() {
    let app = TestApp::new();

    let (status, created) = app
        .send(
            Method::POST,
            "/api/v1/payment",
            Some(json!({
                "cpf": "12345678901",
                "description": "Metered usage",
                "amount": 0.001,
                "paymentMethod": "PIX"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/api/v1/payment/{}", created["id"].as_str().unwrap());
    let (_, body) = app.send(Method::GET, &uri, None).await;
    assert_eq!(body["amount"], 0.001);
}

#[tokio::test]
async fn update_then_get_reflects_new_status() {
    let app = TestApp::new();
    let created = app.create("12345678901", "PIX").await;
    let uri = format!("/api/v1/payment/{}", created["id"].as_str().unwrap());

    let (status, body) = app
        .send(
            Method::PUT,
            &uri,
            Some(json!({ "status": "PAID", "externalId": "mp-987" })),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = app.send(Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "PAID");
    assert_eq!(body["externalId"], "mp-987");
    assert_eq!(body["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn update_with_unknown_status_returns_400() {
    let app = TestApp::new();
    let created = app.create("12345678901", "PIX").await;
    let uri = format!("/api/v1/payment/{}", created["id"].as_str().unwrap());

    let (status, _) = app
        .send(Method::PUT, &uri, Some(json!({ "status": "REFUNDED" })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_unknown_payment_returns_404() {
    let app = TestApp::new();

    let (status, _) = app
        .send(
            Method::PUT,
            "/api/v1/payment/6f9619ff-8b86-d011-b42d-00c04fc964ff",
            Some(json!({ "status": "PAID" })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn list_filters_by_cpf_and_paginates() {
    let app = TestApp::new();
    for _ in 0..3 {
        app.create("11111111111", "PIX").await;
    }
    app.create("22222222222", "PIX").await;

    let (status, body) = app
        .send(Method::GET, "/api/v1/payment?cpf=11111111111", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (_, body) = app
        .send(
            Method::GET,
            "/api/v1/payment?cpf=11111111111&skip=1&take=1",
            None,
        )
        .await;
    let page = body.as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["cpf"], "11111111111");
}

#[tokio::test]
async fn list_filters_by_status_and_method() {
    let app = TestApp::new();
    let paid = app.create("11111111111", "CREDIT_CARD").await;
    app.create("11111111111", "PIX").await;
    let uri = format!("/api/v1/payment/{}", paid["id"].as_str().unwrap());
    app.send(Method::PUT, &uri, Some(json!({ "status": "PAID" })))
        .await;

    let (_, body) = app
        .send(
            Method::GET,
            "/api/v1/payment?status=PAID&paymentMethod=CREDIT_CARD",
            None,
        )
        .await;

    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], paid["id"]);
}

#[tokio::test]
async fn list_with_empty_params_returns_everything() {
    let app = TestApp::new();
    app.create("11111111111", "PIX").await;
    app.create("22222222222", "PIX").await;

    let (status, body) = app
        .send(Method::GET, "/api/v1/payment?cpf=&status=", None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn list_with_bad_date_returns_400() {
    let app = TestApp::new();

    let (status, body) = app
        .send(Method::GET, "/api/v1/payment?startDate=yesterday", None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}
