//! Order-intake relay client.
//!
//! After the user asserts payment completion, the order details are
//! submitted to an external form-intake service. The submission is
//! best-effort: a failure is surfaced to the user but never blocks the
//! rest of the completion flow, since the payment itself already happened
//! outside this system.

use thiserror::Error;

use dandiya_store_core::CartLineItem;

use crate::validator::FormField;

/// Errors that can occur when submitting an order to the relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Relay returned an error response.
    #[error("relay error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body text, if any.
        message: String,
    },

    /// Failed to serialize the order details.
    #[error("serialize error: {0}")]
    Serialize(String),
}

/// Client for the external order-intake relay.
#[derive(Debug, Clone)]
pub struct OrderRelayClient {
    client: reqwest::Client,
    endpoint: String,
}

impl OrderRelayClient {
    /// Create a client for the given relay endpoint URL.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Submit an order as a form post.
    ///
    /// The form carries every shipping field by its label, plus
    /// `order_details` (the serialized cart) and `total_amount`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn submit_order(
        &self,
        shipping_fields: &[FormField],
        items: &[CartLineItem],
        total_amount: u64,
    ) -> Result<(), RelayError> {
        let order_details =
            serde_json::to_string(items).map_err(|e| RelayError::Serialize(e.to_string()))?;

        let mut form: Vec<(String, String)> = shipping_fields
            .iter()
            .map(|field| (field.label.clone(), field.value.clone()))
            .collect();
        form.push(("order_details".to_string(), order_details));
        form.push(("total_amount".to_string(), total_amount.to_string()));

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RelayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
