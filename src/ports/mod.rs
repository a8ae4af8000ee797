//! Ports - Interfaces between the payment core and the outside world.
//!
//! - `PaymentRepository` - persistence of Payment aggregates
//! - `PaymentGateway` - external checkout provider

mod payment_gateway;
mod payment_repository;

pub use payment_gateway::{
    CreatePreferenceRequest, GatewayError, GatewayErrorCode, PaymentGateway, Preference,
};
pub use payment_repository::{PaymentFilter, PaymentRepository};
