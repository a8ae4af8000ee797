//! Payment repository port.
//!
//! Defines the contract for persisting and retrieving Payment aggregates.
//! Filtering, ordering and pagination of `find_all` are owned by the
//! implementation; handlers pass the filter through untouched.

use crate::domain::foundation::{DomainError, PaymentId, Timestamp};
use crate::domain::payment::{Payment, PaymentMethod, PaymentStatus};
use async_trait::async_trait;

/// Repository port for Payment persistence.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Persist a new payment and return the stored record.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, payment: &Payment) -> Result<Payment, DomainError>;

    /// Persist the mutable fields of an existing payment and return the stored record.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` if the payment does not exist or on persistence failure
    async fn update(&self, payment: &Payment) -> Result<Payment, DomainError>;

    /// Find a payment by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, DomainError>;

    /// List payments matching the filter, newest first.
    ///
    /// An empty result is not an error.
    async fn find_all(&self, filter: &PaymentFilter) -> Result<Vec<Payment>, DomainError>;
}

/// Criteria for listing payments. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentFilter {
    /// Exact match on the payer CPF.
    pub cpf: Option<String>,

    pub payment_method: Option<PaymentMethod>,

    pub status: Option<PaymentStatus>,

    /// Inclusive lower bound on `created_at`.
    pub start_date: Option<Timestamp>,

    /// Inclusive upper bound on `created_at`.
    pub end_date: Option<Timestamp>,

    /// Number of matching records to skip.
    pub skip: Option<u32>,

    /// Maximum number of records to return.
    pub take: Option<u32>,
}

impl PaymentFilter {
    /// Returns true if the payment satisfies every equality and date criterion.
    ///
    /// Pagination is not considered.
    pub fn matches(&self, payment: &Payment) -> bool {
        if let Some(cpf) = &self.cpf {
            if &payment.cpf != cpf {
                return false;
            }
        }
        if let Some(method) = self.payment_method {
            if payment.payment_method != method {
                return false;
            }
        }
        if let Some(status) = self.status {
            if payment.status != status {
                return false;
            }
        }
        if let Some(start) = &self.start_date {
            if payment.created_at.is_before(start) {
                return false;
            }
        }
        if let Some(end) = &self.end_date {
            if payment.created_at.is_after(end) {
                return false;
            }
        }
        true
    }
}
