//! Payment-intent HTTP client.
//!
//! Asks the payment server to turn a cart total into a UPI payment-intent
//! descriptor. Only called once the shipping form has validated.

use serde::Deserialize;
use thiserror::Error;

use dandiya_store_core::PaymentIntentDescriptor;

/// Errors that can occur when fetching a payment intent.
#[derive(Debug, Error)]
pub enum IntentError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error response.
    #[error("payment server error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body, if any.
        message: String,
    },

    /// Failed to parse the response.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Error body returned by the payment server.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Client for the payment-intent server.
#[derive(Debug, Clone)]
pub struct PaymentIntentClient {
    client: reqwest::Client,
    base_url: String,
}

impl PaymentIntentClient {
    /// Create a client against the given server base URL
    /// (e.g., `http://localhost:3001`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch a payment-intent descriptor for the given total.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unparseable response body. The caller leaves the checkout step
    /// unchanged in every error case so the user can retry.
    pub async fn fetch(&self, amount: u64) -> Result<PaymentIntentDescriptor, IntentError> {
        let url = format!("{}/upi-payment-details?amount={amount}", self.base_url);
        tracing::debug!(%url, "fetching payment details");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map_or_else(|_| String::new(), |body| body.error);
            return Err(IntentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<PaymentIntentDescriptor>()
            .await
            .map_err(|e| IntentError::Parse(e.to_string()))
    }
}
