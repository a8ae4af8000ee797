//! HTTP adapter for payment endpoints.

mod dto;
pub(super) mod handlers;
mod routes;

pub use dto::{
    CreatePaymentRequest, ErrorResponse, ListPaymentsParams, PaymentResponse,
    UpdatePaymentRequest,
};
pub use handlers::PaymentHandlers;
pub use routes::payment_routes;
