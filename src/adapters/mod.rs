//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the payment core to external systems:
//! - `postgres` - PaymentRepository on PostgreSQL
//! - `memory` - PaymentRepository held in process memory
//! - `mercado_pago` - PaymentGateway for the Mercado Pago checkout API
//! - `http` - axum REST API

pub mod http;
pub mod memory;
pub mod mercado_pago;
pub mod postgres;

pub use memory::InMemoryPaymentRepository;
pub use mercado_pago::{MercadoPagoConfig, MercadoPagoGateway, MockPaymentGateway};
pub use postgres::PostgresPaymentRepository;
