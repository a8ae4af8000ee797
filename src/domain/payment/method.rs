//! Payment methods accepted at intake.

use crate::domain::foundation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the payer intends to settle the payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Instant bank transfer. Settled outside the checkout provider.
    Pix,

    /// Card payment. Requires a checkout preference at the provider.
    CreditCard,
}

impl PaymentMethod {
    /// Wire and storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "PIX",
            PaymentMethod::CreditCard => "CREDIT_CARD",
        }
    }

    /// Returns true if creating a payment with this method involves the checkout provider.
    pub fn requires_preference(&self) -> bool {
        matches!(self, PaymentMethod::CreditCard)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PIX" => Ok(PaymentMethod::Pix),
            "CREDIT_CARD" => Ok(PaymentMethod::CreditCard),
            other => Err(ValidationError::invalid_format(
                "paymentMethod",
                format!("unknown payment method '{}'", other),
            )),
        }
    }
}
