//! HTTP routes for payment endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_payment, get_payment, list_payments, update_payment, PaymentHandlers,
};

/// Creates the payment router with all endpoints.
///
/// The webhook callback announced to the checkout provider is not served here.
pub fn payment_routes(handlers: PaymentHandlers) -> Router {
    Router::new()
        .route("/payment", get(list_payments).post(create_payment))
        .route("/payment/:id", get(get_payment).put(update_payment))
        .with_state(handlers)
}
