//! Payment gateway port for the external checkout provider.
//!
//! Defines the contract for creating checkout preferences and reading the
//! status of provider-side payments. Implementations perform a single
//! request per call; callers decide what a failure means.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Port for checkout provider integrations (e.g., Mercado Pago).
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a checkout preference for a card payment.
    ///
    /// Returns the provider's preference, whose id is stored on the payment.
    async fn create_preference(
        &self,
        request: CreatePreferenceRequest,
    ) -> Result<Preference, GatewayError>;

    /// Get the status string of a provider-side payment.
    async fn get_payment_status(&self, payment_id: &str) -> Result<String, GatewayError>;
}

/// Request to create a checkout preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePreferenceRequest {
    pub amount: Decimal,

    /// Shown to the payer as the item title.
    pub description: String,

    /// Payer taxpayer identifier.
    pub cpf: String,

    /// Correlation token echoed back by the provider.
    pub external_reference: String,
}

/// Checkout preference created at the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    /// Provider's preference ID.
    pub id: String,

    /// URL the payer is redirected to.
    pub init_point: String,

    pub status: Option<String>,
}

/// Errors from checkout provider operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayError {
    /// Error code for categorization.
    pub code: GatewayErrorCode,

    /// Human-readable message.
    pub message: String,

    /// HTTP status returned by the provider (if any).
    pub http_status: Option<u16>,
}

impl GatewayError {
    /// Create a new gateway error.
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            http_status: None,
        }
    }

    /// Attach the provider's HTTP status.
    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::NetworkError, message)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::AuthenticationError, message)
    }

    pub fn not_found(resource: &str) -> Self {
        Self::new(GatewayErrorCode::NotFound, format!("{} not found", resource))
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::ProviderError, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::InvalidResponse, message)
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for GatewayError {}

/// Gateway error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayErrorCode {
    /// Network connectivity issue or timeout.
    NetworkError,

    /// Access token rejected.
    AuthenticationError,

    /// Resource not found.
    NotFound,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Provider answered with an error status.
    ProviderError,

    /// Provider answered 2xx with a body we could not read.
    InvalidResponse,
}

impl std::fmt::Display for GatewayErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GatewayErrorCode::NetworkError => "network_error",
            GatewayErrorCode::AuthenticationError => "authentication_error",
            GatewayErrorCode::NotFound => "not_found",
            GatewayErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            GatewayErrorCode::ProviderError => "provider_error",
            GatewayErrorCode::InvalidResponse => "invalid_response",
        };
        write!(f, "{}", s)
    }
}
