//! In-memory payment repository.
//!
//! Mirrors the PostgreSQL adapter's filter, ordering and pagination rules.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, PaymentId};
use crate::domain::payment::Payment;
use crate::ports::{PaymentFilter, PaymentRepository};

/// In-memory storage for payments
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentRepository {
    payments: Arc<RwLock<HashMap<PaymentId, Payment>>>,
}

impl InMemoryPaymentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored payments
    pub async fn len(&self) -> usize {
        self.payments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.payments.read().await.is_empty()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.payments.write().await.clear();
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn save(&self, payment: &Payment) -> Result<Payment, DomainError> {
        let mut payments = self.payments.write().await;
        if payments.contains_key(&payment.id) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save payment: duplicate id {}", payment.id),
            ));
        }
        payments.insert(payment.id, payment.clone());
        Ok(payment.clone())
    }

    async fn update(&self, payment: &Payment) -> Result<Payment, DomainError> {
        let mut payments = self.payments.write().await;
        let stored = payments.get_mut(&payment.id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update payment: no row with id {}", payment.id),
            )
        })?;

        stored.status = payment.status;
        stored.external_id = payment.external_id.clone();
        stored.updated_at = payment.updated_at;

        Ok(stored.clone())
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, DomainError> {
        Ok(self.payments.read().await.get(id).cloned())
    }

    async fn find_all(&self, filter: &PaymentFilter) -> Result<Vec<Payment>, DomainError> {
        let payments = self.payments.read().await;

        let mut matching: Vec<Payment> = payments
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let skip = filter.skip.unwrap_or(0) as usize;
        let take = filter.take.map(|t| t as usize).unwrap_or(usize::MAX);

        Ok(matching.into_iter().skip(skip).take(take).collect())
    }
}
