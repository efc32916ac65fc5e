//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `UPI_ID` - The store's UPI virtual payment address (never sent to
//!   clients outside the deep link)
//!
//! ## Optional
//! - `PAYMENT_SERVER_HOST` - Bind address (default: 127.0.0.1)
//! - `PAYMENT_SERVER_PORT` - Listen port (default: 3001)
//! - `UPI_PAYEE_NAME` - Payee display name (default: Navratri Store)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Payment server configuration.
///
/// Implements `Debug` manually to redact the UPI id.
#[derive(Clone)]
pub struct PaymentServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// The store's UPI virtual payment address (server-side only)
    pub upi_id: SecretString,
    /// Payee display name shown in payment apps
    pub payee_name: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl std::fmt::Debug for PaymentServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("upi_id", &"[REDACTED]")
            .field("payee_name", &self.payee_name)
            .field("sentry_dsn", &self.sentry_dsn)
            .finish()
    }
}

impl PaymentServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid,
    /// or if the UPI id looks like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("PAYMENT_SERVER_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("PAYMENT_SERVER_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("PAYMENT_SERVER_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("PAYMENT_SERVER_PORT".to_string(), e.to_string())
            })?;

        let upi_id = get_required_env("UPI_ID")?;
        validate_upi_id(&upi_id, "UPI_ID")?;

        let payee_name = get_env_or_default("UPI_PAYEE_NAME", "Navratri Store");
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            upi_id: SecretString::from(upi_id),
            payee_name,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a UPI id has the `account@psp` shape and is not a
/// placeholder left over from setup.
fn validate_upi_id(upi_id: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = upi_id.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let mut parts = upi_id.split('@');
    let account = parts.next().unwrap_or_default();
    let psp = parts.next().unwrap_or_default();
    if account.is_empty() || psp.is_empty() || parts.next().is_some() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must have the form account@psp".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config_with(upi_id: &str) -> PaymentServerConfig {
        PaymentServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3001,
            upi_id: SecretString::from(upi_id),
            payee_name: "Navratri Store".to_string(),
            sentry_dsn: None,
        }
    }

    #[test]
    fn test_validate_upi_id_valid() {
        assert!(validate_upi_id("dandiyaa@ptyes", "UPI_ID").is_ok());
        assert!(validate_upi_id("store.payments@okaxis", "UPI_ID").is_ok());
    }

    #[test]
    fn test_validate_upi_id_placeholder() {
        let result = validate_upi_id("your-upi-id@psp", "UPI_ID");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_upi_id_shape() {
        assert!(validate_upi_id("no-at-sign", "UPI_ID").is_err());
        assert!(validate_upi_id("@psp", "UPI_ID").is_err());
        assert!(validate_upi_id("account@", "UPI_ID").is_err());
        assert!(validate_upi_id("a@b@c", "UPI_ID").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = config_with("dandiyaa@ptyes");
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3001);
    }

    #[test]
    fn test_debug_redacts_upi_id() {
        let config = config_with("dandiyaa@ptyes");
        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("Navratri Store"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("dandiyaa@ptyes"));
    }
}
