//! Mercado Pago checkout adapter.
//!
//! Implements the `PaymentGateway` port against the Mercado Pago REST API:
//! - Checkout preferences for card payments
//! - Payment status lookup
//!
//! # Configuration
//!
//! The access token is passed in explicitly through `MercadoPagoConfig`
//! and held as a `secrecy::SecretString`.

mod api_types;
mod mercado_pago_gateway;
mod mock_gateway;

pub use mercado_pago_gateway::{MercadoPagoConfig, MercadoPagoGateway, DEFAULT_API_BASE_URL};
pub use mock_gateway::{MethodCall, MockPaymentGateway};
