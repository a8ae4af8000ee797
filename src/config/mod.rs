//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `PAYMENT_INTAKE`
//! prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use payment_intake::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod payment;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

use crate::adapters::mercado_pago::MercadoPagoConfig;

/// Environment variable prefix
const ENV_PREFIX: &str = "PAYMENT_INTAKE";

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, HTTP layers)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Checkout provider configuration
    #[serde(default)]
    pub mercado_pago: PaymentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `PAYMENT_INTAKE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PAYMENT_INTAKE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PAYMENT_INTAKE__DATABASE__URL=...` -> `database.url = ...`
    /// - `PAYMENT_INTAKE__MERCADO_PAGO__ACCESS_TOKEN=...` -> `mercado_pago.access_token = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or cannot be
    /// parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.mercado_pago.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Gateway configuration with the access token moved behind a secret
    pub fn gateway_config(&self) -> MercadoPagoConfig {
        let settings = &self.mercado_pago;
        MercadoPagoConfig::new(
            settings.access_token.clone(),
            settings.app_url.clone(),
            settings.frontend_url.clone(),
        )
        .with_base_url(settings.api_base_url.clone())
        .with_currency(settings.currency_id.clone())
        .with_timeout(settings.request_timeout())
    }
}
