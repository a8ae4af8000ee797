//! Payment handlers.
//!
//! ## Commands
//! - Creating payments (with a checkout preference for card payments)
//! - Updating status and external id
//!
//! ## Queries
//! - Get a payment by id
//! - List payments with filters and pagination

mod create_payment;
mod get_payment;
mod list_payments;
mod update_payment;

#[cfg(test)]
mod test_support;

// Commands
pub use create_payment::{CreatePaymentCommand, CreatePaymentHandler, CreatePaymentResult};
pub use update_payment::{UpdatePaymentCommand, UpdatePaymentHandler, UpdatePaymentResult};

// Queries
pub use get_payment::{GetPaymentHandler, GetPaymentQuery, GetPaymentResult};
pub use list_payments::{ListPaymentsHandler, ListPaymentsQuery, ListPaymentsResult};
