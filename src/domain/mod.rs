//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `payment` - Payment aggregate and its error taxonomy

pub mod foundation;
pub mod payment;
