//! GetPaymentHandler - Query handler for a single payment.

use std::sync::Arc;

use crate::domain::foundation::PaymentId;
use crate::domain::payment::{Payment, PaymentError};
use crate::ports::PaymentRepository;

/// Query to get a payment by id.
#[derive(Debug, Clone)]
pub struct GetPaymentQuery {
    pub id: PaymentId,
}

/// Result of successful payment query.
pub type GetPaymentResult = Payment;

/// Handler for retrieving a payment.
///
/// Repository errors are returned as they are, without retry.
pub struct GetPaymentHandler {
    repository: Arc<dyn PaymentRepository>,
}

impl GetPaymentHandler {
    pub fn new(repository: Arc<dyn PaymentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetPaymentQuery) -> Result<GetPaymentResult, PaymentError> {
        self.repository
            .find_by_id(&query.id)
            .await?
            .ok_or_else(|| PaymentError::not_found(query.id))
    }
}
