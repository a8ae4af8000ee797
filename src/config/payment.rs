//! Checkout provider configuration (Mercado Pago)

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Mercado Pago configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Bearer access token
    #[serde(default)]
    pub access_token: String,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Public base URL of this service, used to build the notification URL
    #[serde(default)]
    pub app_url: String,

    /// Frontend base URL, used to build the success/failure redirects
    #[serde(default)]
    pub frontend_url: String,

    #[serde(default = "default_currency_id")]
    pub currency_id: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl PaymentConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check if using a Mercado Pago sandbox token
    pub fn is_test_mode(&self) -> bool {
        self.access_token.starts_with("TEST-")
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.access_token.is_empty() {
            return Err(ValidationError::MissingRequired("MERCADO_PAGO__ACCESS_TOKEN"));
        }
        if self.app_url.is_empty() {
            return Err(ValidationError::MissingRequired("MERCADO_PAGO__APP_URL"));
        }
        if self.frontend_url.is_empty() {
            return Err(ValidationError::MissingRequired("MERCADO_PAGO__FRONTEND_URL"));
        }
        for (field, url) in [
            ("MERCADO_PAGO__API_BASE_URL", &self.api_base_url),
            ("MERCADO_PAGO__APP_URL", &self.app_url),
            ("MERCADO_PAGO__FRONTEND_URL", &self.frontend_url),
        ] {
            if !is_http_url(url) {
                return Err(ValidationError::InvalidUrl { field });
            }
        }
        if self.currency_id.len() != 3 || !self.currency_id.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(ValidationError::InvalidCurrency(self.currency_id.clone()));
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout {
                actual: self.request_timeout_secs,
                max: 120,
            });
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            api_base_url: default_api_base_url(),
            app_url: String::new(),
            frontend_url: String::new(),
            currency_id: default_currency_id(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn default_api_base_url() -> String {
    crate::adapters::mercado_pago::DEFAULT_API_BASE_URL.to_string()
}

fn default_currency_id() -> String {
    "BRL".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> PaymentConfig {
        PaymentConfig {
            access_token: "TEST-1234".to_string(),
            app_url: "https://api.example.com".to_string(),
            frontend_url: "https://shop.example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_point_at_mercado_pago_in_brl() {
        let config = PaymentConfig::default();
        assert_eq!(config.api_base_url, "https://api.mercadopago.com");
        assert_eq!(config.currency_id, "BRL");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn sandbox_tokens_are_test_mode() {
        assert!(valid().is_test_mode());
        let live = PaymentConfig {
            access_token: "APP_USR-1234".to_string(),
            ..valid()
        };
        assert!(!live.is_test_mode());
    }

    #[test]
    fn missing_token_is_required() {
        let config = PaymentConfig {
            access_token: String::new(),
            ..valid()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("MERCADO_PAGO__ACCESS_TOKEN"))
        );
    }

    #[test]
    fn non_http_frontend_url_is_rejected() {
        let config = PaymentConfig {
            frontend_url: "shop.example.com".to_string(),
            ..valid()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidUrl {
                field: "MERCADO_PAGO__FRONTEND_URL"
            })
        );
    }

    #[test]
    fn lowercase_currency_is_rejected() {
        let config = PaymentConfig {
            currency_id: "brl".to_string(),
            ..valid()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidCurrency(_))));
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid().validate().is_ok());
    }
}
