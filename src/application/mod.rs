//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers never log; errors travel back to the adapter that called them.

pub mod handlers;

pub use handlers::{
    CreatePaymentCommand, CreatePaymentHandler, CreatePaymentResult, GetPaymentHandler,
    GetPaymentQuery, GetPaymentResult, ListPaymentsHandler, ListPaymentsQuery,
    ListPaymentsResult, UpdatePaymentCommand, UpdatePaymentHandler, UpdatePaymentResult,
};
