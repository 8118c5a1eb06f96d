pub mod constants;

use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::converter::MagnitudeCeiling;
use crate::error::{AppError, Result};
use constants::{DEFAULT_MAX_AMOUNT, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECONDS};

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Port the HTTP server listens on (default: 3000)
    pub port: u16,

    /// Magnitude ceiling of the converter (default: trillion)
    pub magnitude_ceiling: MagnitudeCeiling,

    /// Inclusive application limit on amounts (default: 10000)
    pub max_amount: Decimal,

    /// Request timeout (default: 30 seconds)
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            magnitude_ceiling: MagnitudeCeiling::default(),
            max_amount: Decimal::from(DEFAULT_MAX_AMOUNT),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unparseable numbers fall back to their defaults; an unknown magnitude
    /// name is an error because it would silently change which amounts are
    /// accepted.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT").and_then(|v| v.parse().ok()) {
            config.port = port;
        }

        if let Some(name) = lookup("CURRENCY_TEXT_MAGNITUDE") {
            config.magnitude_ceiling = name.parse().map_err(AppError::Config)?;
        }

        if let Some(max) = lookup("CURRENCY_TEXT_MAX_AMOUNT")
            .and_then(|v| Decimal::from_str(v.trim()).ok())
            .filter(|v| !v.is_sign_negative())
        {
            config.max_amount = max;
        }

        if let Some(seconds) = lookup("REQUEST_TIMEOUT_SECONDS").and_then(|v| v.parse::<u64>().ok()) {
            config.request_timeout = Duration::from_secs(seconds);
        }

        Ok(config)
    }
}
