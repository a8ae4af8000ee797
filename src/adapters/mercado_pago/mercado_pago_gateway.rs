//! Mercado Pago payment gateway adapter.
//!
//! Creates checkout preferences for card payments and reads payment status.
//! Every call is a single HTTP request; failures are mapped to
//! `GatewayError` and never retried.
//!
//! # Configuration
//!
//! ```ignore
//! let config = MercadoPagoConfig::new(access_token, app_url, frontend_url);
//! let gateway = MercadoPagoGateway::new(config);
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};

use crate::ports::{
    CreatePreferenceRequest, GatewayError, GatewayErrorCode, PaymentGateway, Preference,
};

use super::api_types::{
    BackUrls, Identification, Payer, PaymentResponse, PreferenceItem, PreferenceRequestBody,
    PreferenceResponse,
};

/// Default Mercado Pago API host.
pub const DEFAULT_API_BASE_URL: &str = "https://api.mercadopago.com";

/// Path of the webhook endpoint on this service, announced to the provider.
const NOTIFICATION_PATH: &str = "/api/v1/payment/webhook";

/// Mercado Pago API configuration.
#[derive(Clone)]
pub struct MercadoPagoConfig {
    /// Bearer access token.
    access_token: SecretString,

    /// Base URL for the API (default: https://api.mercadopago.com).
    api_base_url: String,

    /// Public base URL of this service, used for the notification URL.
    app_url: String,

    /// Base URL of the frontend, used for the success/failure redirects.
    frontend_url: String,

    currency_id: String,

    request_timeout: Duration,
}

impl MercadoPagoConfig {
    /// Create a new configuration with default host, BRL currency and a 30 second timeout.
    pub fn new(
        access_token: impl Into<String>,
        app_url: impl Into<String>,
        frontend_url: impl Into<String>,
    ) -> Self {
        Self {
            access_token: SecretString::new(access_token.into()),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            app_url: trim_trailing_slash(app_url.into()),
            frontend_url: trim_trailing_slash(frontend_url.into()),
            currency_id: "BRL".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = trim_trailing_slash(url.into());
        self
    }

    pub fn with_currency(mut self, currency_id: impl Into<String>) -> Self {
        self.currency_id = currency_id.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    fn notification_url(&self) -> String {
        format!("{}{}", self.app_url, NOTIFICATION_PATH)
    }

    /// `{base}/v1/payments/{id}` with the id encoded as a single path segment.
    fn payment_url(&self, payment_id: &str) -> Result<Url, GatewayError> {
        let mut url = Url::parse(&self.api_base_url).map_err(|e| {
            GatewayError::provider(format!("Invalid Mercado Pago base URL: {}", e))
        })?;
        url.path_segments_mut()
            .map_err(|_| GatewayError::provider("Mercado Pago base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(["v1", "payments", payment_id]);
        Ok(url)
    }

    fn back_urls(&self) -> BackUrls {
        BackUrls {
            success: format!("{}/success", self.frontend_url),
            failure: format!("{}/failure", self.frontend_url),
        }
    }
}

impl std::fmt::Debug for MercadoPagoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MercadoPagoConfig")
            .field("access_token", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("app_url", &self.app_url)
            .field("frontend_url", &self.frontend_url)
            .field("currency_id", &self.currency_id)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

/// Mercado Pago payment gateway adapter.
pub struct MercadoPagoGateway {
    config: MercadoPagoConfig,
    http_client: reqwest::Client,
}

impl MercadoPagoGateway {
    /// Create a new gateway with the given configuration.
    pub fn new(config: MercadoPagoConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Turns a non-2xx response into a gateway error.
    async fn error_from_response(response: reqwest::Response, operation: &str) -> GatewayError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::error!(
            operation,
            http_status = status.as_u16(),
            error = %body,
            "Mercado Pago request failed"
        );
        map_status(status, &body).with_http_status(status.as_u16())
    }
}

/// Maps an error status to the matching gateway error.
fn map_status(status: StatusCode, body: &str) -> GatewayError {
    let message = format!("Mercado Pago API error ({}): {}", status.as_u16(), body);
    let code = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayErrorCode::AuthenticationError,
        StatusCode::NOT_FOUND => GatewayErrorCode::NotFound,
        StatusCode::TOO_MANY_REQUESTS => GatewayErrorCode::RateLimitExceeded,
        _ => GatewayErrorCode::ProviderError,
    };
    GatewayError::new(code, message)
}

#[async_trait]
impl PaymentGateway for MercadoPagoGateway {
    async fn create_preference(
        &self,
        request: CreatePreferenceRequest,
    ) -> Result<Preference, GatewayError> {
        let url = format!("{}/checkout/preferences", self.config.api_base_url);

        let body = PreferenceRequestBody {
            items: vec![PreferenceItem {
                title: &request.description,
                quantity: 1,
                currency_id: &self.config.currency_id,
                unit_price: request.amount,
            }],
            payer: Payer {
                identification: Identification {
                    kind: "CPF",
                    number: &request.cpf,
                },
            },
            external_reference: &request.external_reference,
            notification_url: self.config.notification_url(),
            back_urls: self.config.back_urls(),
            auto_return: "approved",
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.config.access_token.expose_secret())
            .timeout(self.config.request_timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Mercado Pago create_preference transport failure");
                GatewayError::network(e.to_string())
            })?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response, "create_preference").await);
        }

        let preference: PreferenceResponse = response.json().await.map_err(|e| {
            GatewayError::invalid_response(format!(
                "Failed to parse Mercado Pago response: {}",
                e
            ))
        })?;

        tracing::info!(
            preference_id = %preference.id,
            external_reference = %request.external_reference,
            "Created Mercado Pago preference"
        );

        Ok(Preference {
            id: preference.id,
            init_point: preference.init_point,
            status: preference.status,
        })
    }

    async fn get_payment_status(&self, payment_id: &str) -> Result<String, GatewayError> {
        let url = self.config.payment_url(payment_id)?;

        let response = self
            .http_client
            .get(url)
            .bearer_auth(self.config.access_token.expose_secret())
            .timeout(self.config.request_timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Mercado Pago get_payment_status transport failure");
                GatewayError::network(e.to_string())
            })?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response, "get_payment_status").await);
        }

        let payment: PaymentResponse = response.json().await.map_err(|e| {
            GatewayError::invalid_response(format!(
                "Failed to parse Mercado Pago response: {}",
                e
            ))
        })?;

        Ok(payment.status)
    }
}
