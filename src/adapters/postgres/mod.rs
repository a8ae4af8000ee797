//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresPaymentRepository` - Payment persistence

mod payment_repository;

pub use payment_repository::PostgresPaymentRepository;
