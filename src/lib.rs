//! Payment Intake - PIX and credit card payment service
//!
//! Accepts, updates and lists payment records. Card payments get a
//! Mercado Pago checkout preference before they are stored.
//!
//! # Layers
//!
//! - `domain` - Payment aggregate, enums and error taxonomy
//! - `ports` - Repository and checkout gateway traits
//! - `application` - Create/get/update/list handlers
//! - `adapters` - PostgreSQL, in-memory, Mercado Pago and HTTP implementations

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
