//! HTTP route handlers for the payment server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health               - Liveness check
//! GET  /upi-payment-details  - Build a UPI payment intent for an amount
//! ```

pub mod payment;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Create all routes for the payment server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/upi-payment-details", get(payment::payment_details))
}
