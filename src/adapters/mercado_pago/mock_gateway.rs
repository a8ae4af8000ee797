//! Mock payment gateway for testing.
//!
//! Provides a configurable implementation of `PaymentGateway` for unit and
//! integration tests. Supports:
//! - Pre-configured responses
//! - Error injection
//! - Call tracking

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::ports::{CreatePreferenceRequest, GatewayError, PaymentGateway, Preference};

/// Mock payment gateway for testing.
///
/// Clones share state, so a clone handed to a handler can be inspected later.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentGateway::new();
/// mock.set_error(GatewayError::network("Test outage"));
///
/// let handler = CreatePaymentHandler::new(repo, Arc::new(mock.clone()));
/// assert_eq!(mock.call_count("create_preference"), 1);
/// ```
#[derive(Default, Clone)]
pub struct MockPaymentGateway {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Preference to return on next `create_preference` call.
    next_preference: Option<Preference>,

    /// Known provider payments and their status.
    payment_statuses: HashMap<String, String>,

    /// Error to return on next call (consumed).
    next_error: Option<GatewayError>,

    /// Errors by method name (sticky).
    method_errors: HashMap<String, GatewayError>,

    call_log: Vec<MethodCall>,

    /// Requests received by `create_preference`.
    preference_requests: Vec<CreatePreferenceRequest>,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Set the preference to return on next `create_preference` call.
    pub fn set_preference(&self, preference: Preference) {
        self.state().next_preference = Some(preference);
    }

    /// Register a provider payment for `get_payment_status`.
    pub fn add_payment_status(&self, payment_id: impl Into<String>, status: impl Into<String>) {
        self.state()
            .payment_statuses
            .insert(payment_id.into(), status.into());
    }

    /// Set an error to return on the next call to any method.
    pub fn set_error(&self, error: GatewayError) {
        self.state().next_error = Some(error);
    }

    /// Set an error for a specific method.
    pub fn set_method_error(&self, method: &str, error: GatewayError) {
        self.state().method_errors.insert(method.to_string(), error);
    }

    pub fn clear_errors(&self) {
        let mut state = self.state();
        state.next_error = None;
        state.method_errors.clear();
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    pub fn calls(&self) -> Vec<MethodCall> {
        self.state().call_log.clone()
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.state()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    /// Requests received by `create_preference`, oldest first.
    pub fn preference_requests(&self) -> Vec<CreatePreferenceRequest> {
        self.state().preference_requests.clone()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Internal Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn record_call(&self, method: &str, args: Vec<String>) {
        self.state().call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });
    }

    fn check_error(&self, method: &str) -> Result<(), GatewayError> {
        let mut state = self.state();

        if let Some(error) = state.method_errors.get(method) {
            return Err(error.clone());
        }

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        Ok(())
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_preference(
        &self,
        request: CreatePreferenceRequest,
    ) -> Result<Preference, GatewayError> {
        self.record_call(
            "create_preference",
            vec![request.external_reference.clone(), request.amount.to_string()],
        );
        self.check_error("create_preference")?;

        let mut state = self.state();
        let reference = request.external_reference.clone();
        state.preference_requests.push(request);

        Ok(state.next_preference.take().unwrap_or_else(|| Preference {
            id: format!("pref_mock_{}", reference),
            init_point: format!(
                "https://www.mercadopago.com/checkout/v1/redirect?pref_id=pref_mock_{}",
                reference
            ),
            status: None,
        }))
    }

    async fn get_payment_status(&self, payment_id: &str) -> Result<String, GatewayError> {
        self.record_call("get_payment_status", vec![payment_id.to_string()]);
        self.check_error("get_payment_status")?;

        self.state()
            .payment_statuses
            .get(payment_id)
            .cloned()
            .ok_or_else(|| GatewayError::not_found(&format!("Payment {}", payment_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::GatewayErrorCode;
    use rust_decimal::Decimal;

    fn request(reference: &str) -> CreatePreferenceRequest {
        CreatePreferenceRequest {
            amount: Decimal::new(5000, 2),
            description: "Test".to_string(),
            cpf: "12345678901".to_string(),
            external_reference: reference.to_string(),
        }
    }

    #[tokio::test]
    async fn default_preference_derives_from_reference() {
        let mock = MockPaymentGateway::new();

        let preference = mock.create_preference(request("abc")).await.unwrap();

        assert_eq!(preference.id, "pref_mock_abc");
        assert_eq!(mock.call_count("create_preference"), 1);
        assert_eq!(mock.preference_requests()[0].external_reference, "abc");
    }

    #[tokio::test]
    async fn configured_preference_is_returned_once() {
        let mock = MockPaymentGateway::new();
        mock.set_preference(Preference {
            id: "fixed".to_string(),
            init_point: "https://example.com".to_string(),
            status: Some("active".to_string()),
        });

        let first = mock.create_preference(request("a")).await.unwrap();
        let second = mock.create_preference(request("b")).await.unwrap();

        assert_eq!(first.id, "fixed");
        assert_eq!(second.id, "pref_mock_b");
    }

    #[tokio::test]
    async fn next_error_is_consumed() {
        let mock = MockPaymentGateway::new();
        mock.set_error(GatewayError::network("outage"));

        assert!(mock.create_preference(request("a")).await.is_err());
        assert!(mock.create_preference(request("b")).await.is_ok());
    }

    #[tokio::test]
    async fn method_error_is_sticky_until_cleared() {
        let mock = MockPaymentGateway::new();
        mock.set_method_error("get_payment_status", GatewayError::authentication("denied"));

        assert!(mock.get_payment_status("1").await.is_err());
        assert!(mock.get_payment_status("1").await.is_err());

        mock.clear_errors();
        mock.add_payment_status("1", "approved");
        assert_eq!(mock.get_payment_status("1").await.unwrap(), "approved");
    }

    #[tokio::test]
    async fn unknown_payment_status_is_not_found() {
        let mock = MockPaymentGateway::new();

        let err = mock.get_payment_status("404").await.unwrap_err();

        assert_eq!(err.code, GatewayErrorCode::NotFound);
        assert_eq!(mock.calls().len(), 1);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let mock = MockPaymentGateway::new();
        let clone = mock.clone();

        clone.create_preference(request("x")).await.unwrap();

        assert_eq!(mock.call_count("create_preference"), 1);
    }
}
