//! Payment-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | InvalidData | 400 |
//! | ExternalFailure | 502 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, PaymentId};

/// Errors surfaced by the payment handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// No payment exists with this id.
    NotFound(PaymentId),

    /// Intake data failed validation.
    InvalidData(String),

    /// The checkout provider call failed. Carries the full message.
    ExternalFailure(String),

    /// Repository or other port failure, passed through unchanged.
    Infrastructure(DomainError),
}

impl PaymentError {
    pub fn not_found(id: PaymentId) -> Self {
        PaymentError::NotFound(id)
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        PaymentError::InvalidData(message.into())
    }

    /// Wraps a checkout provider failure raised while creating a preference.
    pub fn preference_failed(cause: impl std::fmt::Display) -> Self {
        PaymentError::ExternalFailure(format!("Failed to create payment preference: {}", cause))
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PaymentError::NotFound(_) => ErrorCode::PaymentNotFound,
            PaymentError::InvalidData(_) => ErrorCode::InvalidPaymentData,
            PaymentError::ExternalFailure(_) => ErrorCode::ExternalPaymentError,
            PaymentError::Infrastructure(err) => err.code,
        }
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> String {
        match self {
            PaymentError::NotFound(id) => format!("Payment with id {} not found", id),
            PaymentError::InvalidData(msg) => msg.clone(),
            PaymentError::ExternalFailure(msg) => msg.clone(),
            PaymentError::Infrastructure(err) => err.message().to_string(),
        }
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentError::Infrastructure(err) => write!(f, "{}", err),
            other => write!(f, "{}", other.message()),
        }
    }
}

impl std::error::Error for PaymentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaymentError::Infrastructure(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomainError> for PaymentError {
    fn from(err: DomainError) -> Self {
        PaymentError::Infrastructure(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_id() {
        let id = PaymentId::new();
        let err = PaymentError::not_found(id);
        assert_eq!(err.code(), ErrorCode::PaymentNotFound);
        assert_eq!(err.to_string(), format!("Payment with id {} not found", id));
    }

    #[test]
    fn invalid_data_keeps_message() {
        let err = PaymentError::invalid_data("Invalid CPF");
        assert_eq!(err.code(), ErrorCode::InvalidPaymentData);
        assert_eq!(err.message(), "Invalid CPF");
    }

    #[test]
    fn preference_failed_embeds_cause() {
        let err = PaymentError::preference_failed("connection reset");
        assert_eq!(err.code(), ErrorCode::ExternalPaymentError);
        assert_eq!(
            err.message(),
            "Failed to create payment preference: connection reset"
        );
    }

    #[test]
    fn infrastructure_keeps_original_code_and_display() {
        let inner = DomainError::database("pool timed out");
        let err: PaymentError = inner.clone().into();

        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert_eq!(err.to_string(), inner.to_string());
        assert!(std::error::Error::source(&err).is_some());
    }
}
