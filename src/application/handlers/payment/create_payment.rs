//! CreatePaymentHandler - Command handler for payment intake.
//!
//! Validates the intake fields, creates a checkout preference when the
//! method requires one, and persists the new payment exactly once.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::foundation::new_external_reference;
use crate::domain::payment::{
    Payment, PaymentAttributes, PaymentError, PaymentMethod, PaymentStatus,
};
use crate::ports::{CreatePreferenceRequest, PaymentGateway, PaymentRepository};

/// Command to create a payment.
///
/// Fields are optional so that missing input is reported as invalid data
/// rather than rejected by deserialization.
#[derive(Debug, Clone, Default)]
pub struct CreatePaymentCommand {
    pub cpf: Option<String>,
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub payment_method: Option<String>,
}

/// Result of successful payment creation.
pub type CreatePaymentResult = Payment;

/// Intake fields after validation.
struct ValidatedIntake {
    cpf: String,
    description: String,
    amount: Decimal,
    payment_method: PaymentMethod,
}

/// Handler for creating payments.
pub struct CreatePaymentHandler {
    repository: Arc<dyn PaymentRepository>,
    gateway: Arc<dyn PaymentGateway>,
}

impl CreatePaymentHandler {
    pub fn new(repository: Arc<dyn PaymentRepository>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            repository,
            gateway,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreatePaymentCommand,
    ) -> Result<CreatePaymentResult, PaymentError> {
        let intake = validate(cmd)?;

        let external_id = if intake.payment_method.requires_preference() {
            let preference = self
                .gateway
                .create_preference(CreatePreferenceRequest {
                    amount: intake.amount,
                    description: intake.description.clone(),
                    cpf: intake.cpf.clone(),
                    external_reference: new_external_reference(),
                })
                .await
                .map_err(|e| PaymentError::preference_failed(e.message))?;
            Some(preference.id)
        } else {
            None
        };

        let payment = Payment::create(PaymentAttributes {
            cpf: intake.cpf,
            description: intake.description,
            amount: intake.amount,
            payment_method: intake.payment_method,
            status: PaymentStatus::Pending,
            external_id,
        });

        Ok(self.repository.save(&payment).await?)
    }
}

/// Checks the intake fields in order, failing on the first defect.
fn validate(cmd: CreatePaymentCommand) -> Result<ValidatedIntake, PaymentError> {
    let cpf = match cmd.cpf {
        Some(cpf) if cpf.chars().count() == 11 => cpf,
        _ => return Err(PaymentError::invalid_data("Invalid CPF")),
    };

    let description = match cmd.description {
        Some(description) if !description.trim().is_empty() => description,
        _ => return Err(PaymentError::invalid_data("Description is required")),
    };

    let amount = match cmd.amount {
        Some(amount) if amount > Decimal::ZERO => amount,
        _ => {
            return Err(PaymentError::invalid_data(
                "Amount must be greater than zero",
            ))
        }
    };

    let payment_method = cmd
        .payment_method
        .as_deref()
        .and_then(|m| m.parse::<PaymentMethod>().ok())
        .ok_or_else(|| PaymentError::invalid_data("Invalid payment method"))?;

    Ok(ValidatedIntake {
        cpf,
        description,
        amount,
        payment_method,
    })
}
