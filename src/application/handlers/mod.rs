//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod payment;

pub use payment::{
    CreatePaymentCommand, CreatePaymentHandler, CreatePaymentResult, GetPaymentHandler,
    GetPaymentQuery, GetPaymentResult, ListPaymentsHandler, ListPaymentsQuery,
    ListPaymentsResult, UpdatePaymentCommand, UpdatePaymentHandler, UpdatePaymentResult,
};
