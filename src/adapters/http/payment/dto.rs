//! Request and response DTOs for payment endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::handlers::payment::{CreatePaymentCommand, UpdatePaymentCommand};
use crate::domain::foundation::{ErrorCode, PaymentId, Timestamp};
use crate::domain::payment::{Payment, PaymentMethod, PaymentStatus};
use crate::ports::PaymentFilter;

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /payment`.
///
/// Every field is optional here; the create handler reports missing or
/// malformed values as invalid payment data.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    #[schema(example = "12345678901")]
    pub cpf: Option<String>,
    #[schema(example = "Monthly plan")]
    pub description: Option<String>,
    #[schema(value_type = Option<f64>, example = 49.9)]
    pub amount: Option<Decimal>,
    #[schema(example = "CREDIT_CARD")]
    pub payment_method: Option<String>,
}

impl From<CreatePaymentRequest> for CreatePaymentCommand {
    fn from(req: CreatePaymentRequest) -> Self {
        Self {
            cpf: req.cpf,
            description: req.description,
            amount: req.amount,
            payment_method: req.payment_method,
        }
    }
}

/// Body of `PUT /payment/:id`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentRequest {
    #[schema(example = "PAID")]
    pub status: Option<String>,
    #[schema(example = "1319876543")]
    pub external_id: Option<String>,
}

impl UpdatePaymentRequest {
    /// Builds the update command. Empty strings count as not supplied.
    pub fn into_command(self, id: PaymentId) -> Result<UpdatePaymentCommand, String> {
        let status = match non_empty(self.status) {
            Some(s) => Some(s.parse::<PaymentStatus>().map_err(|e| e.to_string())?),
            None => None,
        };

        Ok(UpdatePaymentCommand {
            id,
            status,
            external_id: non_empty(self.external_id),
        })
    }
}

/// Query string of `GET /payment`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListPaymentsParams {
    pub cpf: Option<String>,
    /// `PIX` or `CREDIT_CARD`
    pub payment_method: Option<String>,
    /// `PENDING`, `PAID` or `FAIL`
    pub status: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`, inclusive
    pub start_date: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`, inclusive
    pub end_date: Option<String>,
    pub skip: Option<String>,
    pub take: Option<String>,
}

impl TryFrom<ListPaymentsParams> for PaymentFilter {
    type Error = String;

    fn try_from(params: ListPaymentsParams) -> Result<Self, Self::Error> {
        Ok(PaymentFilter {
            cpf: non_empty(params.cpf),
            payment_method: non_empty(params.payment_method)
                .map(|m| m.parse::<PaymentMethod>())
                .transpose()
                .map_err(|e| e.to_string())?,
            status: non_empty(params.status)
                .map(|s| s.parse::<PaymentStatus>())
                .transpose()
                .map_err(|e| e.to_string())?,
            start_date: parse_date("startDate", params.start_date)?,
            end_date: parse_date("endDate", params.end_date)?,
            skip: parse_count("skip", params.skip)?,
            take: parse_count("take", params.take)?,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_date(field: &str, value: Option<String>) -> Result<Option<Timestamp>, String> {
    match non_empty(value) {
        None => Ok(None),
        Some(v) => Timestamp::parse(&v)
            .map(Some)
            .ok_or_else(|| format!("Invalid {}: expected RFC 3339 or YYYY-MM-DD", field)),
    }
}

fn parse_count(field: &str, value: Option<String>) -> Result<Option<u32>, String> {
    match non_empty(value) {
        None => Ok(None),
        Some(v) => v
            .parse::<u32>()
            .map(Some)
            .map_err(|_| format!("Invalid {}: expected a non-negative integer", field)),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

/// Payment as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    pub cpf: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 49.9)]
    pub amount: Decimal,
    #[schema(value_type = String, example = "PIX")]
    pub payment_method: PaymentMethod,
    #[schema(value_type = String, example = "PENDING")]
    pub status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id.to_string(),
            cpf: payment.cpf,
            description: payment.description,
            amount: payment.amount,
            payment_method: payment.payment_method,
            status: payment.status,
            external_id: payment.external_id,
            created_at: payment.created_at.to_rfc3339(),
            updated_at: payment.updated_at.to_rfc3339(),
        }
    }
}

/// Error body returned by every payment endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "PAYMENT_NOT_FOUND")]
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError, "Internal server error")
    }
}
