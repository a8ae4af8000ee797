//! HTTP handlers for payment endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::payment::{
    CreatePaymentHandler, GetPaymentHandler, GetPaymentQuery, ListPaymentsHandler,
    ListPaymentsQuery, UpdatePaymentHandler,
};
use crate::domain::foundation::{ErrorCode, PaymentId};
use crate::domain::payment::PaymentError;
use crate::ports::PaymentFilter;

use super::dto::{
    CreatePaymentRequest, ErrorResponse, ListPaymentsParams, PaymentResponse,
    UpdatePaymentRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PaymentHandlers {
    create_handler: Arc<CreatePaymentHandler>,
    get_handler: Arc<GetPaymentHandler>,
    update_handler: Arc<UpdatePaymentHandler>,
    list_handler: Arc<ListPaymentsHandler>,
}

impl PaymentHandlers {
    pub fn new(
        create_handler: Arc<CreatePaymentHandler>,
        get_handler: Arc<GetPaymentHandler>,
        update_handler: Arc<UpdatePaymentHandler>,
        list_handler: Arc<ListPaymentsHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            update_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/payment - Create a payment
#[utoipa::path(
    post,
    path = "/api/v1/payment",
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment created", body = PaymentResponse),
        (status = 400, description = "Invalid payment data", body = ErrorResponse),
        (status = 502, description = "Checkout provider failure", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Payments"
)]
pub async fn create_payment(
    State(handlers): State<PaymentHandlers>,
    body: Result<Json<CreatePaymentRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    match handlers.create_handler.handle(req.into()).await {
        Ok(payment) => {
            let response: PaymentResponse = payment.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_payment_error(e),
    }
}

/// GET /api/v1/payment/:id - Get payment details
#[utoipa::path(
    get,
    path = "/api/v1/payment/{id}",
    params(("id" = String, Path, description = "Payment id")),
    responses(
        (status = 200, description = "Payment found", body = PaymentResponse),
        (status = 404, description = "Payment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Payments"
)]
pub async fn get_payment(
    State(handlers): State<PaymentHandlers>,
    Path(payment_id): Path<String>,
) -> Response {
    let id = match payment_id.parse::<PaymentId>() {
        Ok(id) => id,
        Err(_) => return unknown_id(&payment_id),
    };

    match handlers.get_handler.handle(GetPaymentQuery { id }).await {
        Ok(payment) => {
            let response: PaymentResponse = payment.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_payment_error(e),
    }
}

/// GET /api/v1/payment - List payments
#[utoipa::path(
    get,
    path = "/api/v1/payment",
    params(ListPaymentsParams),
    responses(
        (status = 200, description = "Matching payments, newest first", body = [PaymentResponse]),
        (status = 400, description = "Malformed filter", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Payments"
)]
pub async fn list_payments(
    State(handlers): State<PaymentHandlers>,
    Query(params): Query<ListPaymentsParams>,
) -> Response {
    let filter = match PaymentFilter::try_from(params) {
        Ok(filter) => filter,
        Err(message) => return bad_request(message),
    };

    match handlers.list_handler.handle(ListPaymentsQuery { filter }).await {
        Ok(payments) => {
            let response: Vec<PaymentResponse> =
                payments.into_iter().map(PaymentResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_payment_error(e),
    }
}

/// PUT /api/v1/payment/:id - Update status and/or external id
#[utoipa::path(
    put,
    path = "/api/v1/payment/{id}",
    params(("id" = String, Path, description = "Payment id")),
    request_body = UpdatePaymentRequest,
    responses(
        (status = 204, description = "Payment updated"),
        (status = 400, description = "Malformed body or unknown status", body = ErrorResponse),
        (status = 404, description = "Payment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Payments"
)]
pub async fn update_payment(
    State(handlers): State<PaymentHandlers>,
    Path(payment_id): Path<String>,
    body: Result<Json<UpdatePaymentRequest>, JsonRejection>,
) -> Response {
    let id = match payment_id.parse::<PaymentId>() {
        Ok(id) => id,
        Err(_) => return unknown_id(&payment_id),
    };

    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let cmd = match req.into_command(id) {
        Ok(cmd) => cmd,
        Err(message) => return bad_request(message),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_payment_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}

/// Ids that are not UUIDs cannot name a stored payment.
fn unknown_id(raw: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(
            ErrorCode::PaymentNotFound,
            format!("Payment with id {} not found", raw),
        )),
    )
        .into_response()
}

fn handle_payment_error(error: PaymentError) -> Response {
    let body = ErrorResponse::new(error.code(), error.message());
    match error {
        PaymentError::NotFound(_) => (StatusCode::NOT_FOUND, Json(body)).into_response(),
        PaymentError::InvalidData(_) => (StatusCode::BAD_REQUEST, Json(body)).into_response(),
        PaymentError::ExternalFailure(message) => {
            tracing::warn!(error = %message, "Checkout provider call failed");
            (StatusCode::BAD_GATEWAY, Json(body)).into_response()
        }
        PaymentError::Infrastructure(err) => {
            tracing::error!(code = %err.code, error = %err.message, "Payment request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}
