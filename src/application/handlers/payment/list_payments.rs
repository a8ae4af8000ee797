//! ListPaymentsHandler - Query handler for filtered payment listings.

use std::sync::Arc;

use crate::domain::payment::{Payment, PaymentError};
use crate::ports::{PaymentFilter, PaymentRepository};

/// Query to list payments.
#[derive(Debug, Clone, Default)]
pub struct ListPaymentsQuery {
    pub filter: PaymentFilter,
}

/// Result of successful listing.
pub type ListPaymentsResult = Vec<Payment>;

/// Handler for listing payments.
///
/// The filter goes to the repository as given. Filtering semantics,
/// ordering and pagination belong to the repository.
pub struct ListPaymentsHandler {
    repository: Arc<dyn PaymentRepository>,
}

impl ListPaymentsHandler {
    pub fn new(repository: Arc<dyn PaymentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListPaymentsQuery,
    ) -> Result<ListPaymentsResult, PaymentError> {
        Ok(self.repository.find_all(&query.filter).await?)
    }
}
