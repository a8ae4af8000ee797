//! Payment domain module.
//!
//! # Module Structure
//!
//! - `aggregate` - Payment aggregate entity
//! - `method` - PaymentMethod accepted at intake
//! - `status` - PaymentStatus values
//! - `errors` - PaymentError taxonomy surfaced by the handlers

mod aggregate;
mod errors;
mod method;
mod status;

pub use aggregate::{Payment, PaymentAttributes};
pub use errors::PaymentError;
pub use method::PaymentMethod;
pub use status::PaymentStatus;
