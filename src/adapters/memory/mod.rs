//! In-memory adapters.
//!
//! Useful for tests and local runs without a database.

mod payment_repository;

pub use payment_repository::InMemoryPaymentRepository;
