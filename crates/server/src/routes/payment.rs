//! Payment-intent route handler.
//!
//! The single real responsibility of this server: turn a validated amount
//! into a UPI deep link and transaction note. The UPI id is only ever
//! embedded inside the deep link, never returned as a standalone field.

use axum::{Json, extract::Query, extract::State};
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::instrument;

use dandiya_store_core::PaymentIntentDescriptor;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query parameters for the payment-details endpoint.
#[derive(Debug, Deserialize)]
pub struct PaymentDetailsQuery {
    /// Amount in whole rupees; absent or non-numeric input is a 400.
    pub amount: Option<String>,
}

/// Build a payment-intent descriptor for the requested amount.
///
/// GET /upi-payment-details?amount=500
#[instrument(skip(state))]
pub async fn payment_details(
    State(state): State<AppState>,
    Query(query): Query<PaymentDetailsQuery>,
) -> Result<Json<PaymentIntentDescriptor>> {
    let amount = query
        .amount
        .as_deref()
        .and_then(|raw| raw.parse::<u64>().ok())
        .filter(|amount| *amount > 0)
        .ok_or_else(|| AppError::BadRequest("Valid amount required".to_string()))?;

    let config = state.config();
    let descriptor = build_descriptor(
        config.upi_id.expose_secret(),
        &config.payee_name,
        amount,
    );

    tracing::info!(amount, "payment intent issued");
    Ok(Json(descriptor))
}

/// Construct the transaction note and deep link for an amount.
fn build_descriptor(upi_id: &str, payee_name: &str, amount: u64) -> PaymentIntentDescriptor {
    let transaction_note = format!("{payee_name} Purchase - ₹{amount}");

    let upi_url = format!(
        "upi://pay?pa={upi_id}&pn={}&am={amount}&cu=INR&tn={}",
        urlencoding::encode(payee_name),
        urlencoding::encode(&transaction_note),
    );

    PaymentIntentDescriptor {
        payee_name: payee_name.to_string(),
        amount,
        transaction_note,
        upi_url,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::PaymentServerConfig;
    use secrecy::SecretString;

    fn test_state() -> AppState {
        AppState::new(PaymentServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3001,
            upi_id: SecretString::from("dandiyaa@ptyes"),
            payee_name: "Navratri Store".to_string(),
            sentry_dsn: None,
        })
    }

    fn query(amount: Option<&str>) -> Query<PaymentDetailsQuery> {
        Query(PaymentDetailsQuery {
            amount: amount.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_valid_amount() {
        let Json(descriptor) = payment_details(State(test_state()), query(Some("500")))
            .await
            .unwrap();

        assert_eq!(descriptor.payee_name, "Navratri Store");
        assert_eq!(descriptor.amount, 500);
        assert!(descriptor.transaction_note.contains("500"));
        assert!(descriptor.upi_url.contains("am=500"));
        assert!(descriptor.upi_url.contains("cu=INR"));
        assert!(descriptor.upi_url.starts_with("upi://pay?pa=dandiyaa@ptyes&"));
    }

    #[tokio::test]
    async fn test_payee_name_is_percent_encoded() {
        let Json(descriptor) = payment_details(State(test_state()), query(Some("500")))
            .await
            .unwrap();
        assert!(descriptor.upi_url.contains("pn=Navratri%20Store"));
    }

    #[tokio::test]
    async fn test_non_numeric_amount_is_bad_request() {
        let err = payment_details(State(test_state()), query(Some("abc")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_missing_amount_is_bad_request() {
        let err = payment_details(State(test_state()), query(None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_zero_amount_is_bad_request() {
        let err = payment_details(State(test_state()), query(Some("0")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_note_embeds_store_name_and_amount() {
        let descriptor = build_descriptor("dandiyaa@ptyes", "Navratri Store", 297);
        assert_eq!(descriptor.transaction_note, "Navratri Store Purchase - ₹297");
        // The rupee sign percent-encodes inside the deep link note.
        assert!(descriptor.upi_url.contains("tn=Navratri%20Store%20Purchase%20-%20%E2%82%B9297"));
    }
}
