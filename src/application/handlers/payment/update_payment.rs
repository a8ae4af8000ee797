//! UpdatePaymentHandler - Command handler for partial payment updates.

use std::sync::Arc;

use crate::domain::foundation::PaymentId;
use crate::domain::payment::{Payment, PaymentError, PaymentStatus};
use crate::ports::PaymentRepository;

/// Command to update a payment.
///
/// An empty `external_id` counts as not supplied, so an external id can
/// never be cleared through this command.
#[derive(Debug, Clone)]
pub struct UpdatePaymentCommand {
    pub id: PaymentId,
    pub status: Option<PaymentStatus>,
    pub external_id: Option<String>,
}

/// Result of successful payment update.
pub type UpdatePaymentResult = Payment;

/// Handler for updating payment status and external id.
///
/// Always performs exactly one repository update for an existing payment,
/// even when the command carries no changes.
pub struct UpdatePaymentHandler {
    repository: Arc<dyn PaymentRepository>,
}

impl UpdatePaymentHandler {
    pub fn new(repository: Arc<dyn PaymentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdatePaymentCommand,
    ) -> Result<UpdatePaymentResult, PaymentError> {
        let mut payment = self
            .repository
            .find_by_id(&cmd.id)
            .await?
            .ok_or_else(|| PaymentError::not_found(cmd.id))?;

        if let Some(status) = cmd.status {
            payment.update_status(status);
        }

        if let Some(external_id) = cmd.external_id.filter(|id| !id.is_empty()) {
            payment.set_external_id(external_id);
        }

        Ok(self.repository.update(&payment).await?)
    }
}
