//! Payment aggregate entity.
//!
//! A Payment is a plain record with two mutators. Validation of the intake
//! fields happens in the create handler before the entity is built; the
//! entity itself trusts its inputs.

use crate::domain::foundation::{PaymentId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PaymentMethod, PaymentStatus};

/// Attributes supplied when creating a new payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentAttributes {
    pub cpf: String,
    pub description: String,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
    pub external_id: Option<String>,
}

/// Payment aggregate.
///
/// # Invariants
///
/// - `id` is assigned at creation and never changes
/// - `amount` never changes after creation
/// - `external_id` may be set but is never cleared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,

    /// 11-character taxpayer identifier of the payer.
    pub cpf: String,

    pub description: String,

    /// Amount in the single configured currency.
    pub amount: Decimal,

    pub payment_method: PaymentMethod,

    pub status: PaymentStatus,

    /// Identifier of the matching record at the checkout provider, if any.
    pub external_id: Option<String>,

    pub created_at: Timestamp,

    /// Refreshed by status changes only.
    pub updated_at: Timestamp,
}

impl Payment {
    /// Creates a new payment with a fresh id and both timestamps set to now.
    pub fn create(attributes: PaymentAttributes) -> Self {
        let now = Timestamp::now();
        Self {
            id: PaymentId::new(),
            cpf: attributes.cpf,
            description: attributes.description,
            amount: attributes.amount,
            payment_method: attributes.payment_method,
            status: attributes.status,
            external_id: attributes.external_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the status and refreshes `updated_at`.
    pub fn update_status(&mut self, status: PaymentStatus) {
        self.status = status;
        self.updated_at = Timestamp::now();
    }

    /// Attaches a provider-side identifier. Leaves `updated_at` untouched.
    pub fn set_external_id(&mut self, external_id: impl Into<String>) {
        self.external_id = Some(external_id.into());
    }
}
