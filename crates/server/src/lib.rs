//! Dandiya Store payment server library.
//!
//! This crate provides the payment-intent server as a library, allowing
//! the full router to be exercised in tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the full application router with its middleware stack.
///
/// Callers serve this with
/// `into_make_service_with_connect_info::<SocketAddr>()` so the rate
/// limiter can key on the peer address when no proxy header is present.
#[must_use]
pub fn app(state: state::AppState) -> Router {
    routes::routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(middleware::payment_rate_limiter())
        .with_state(state)
}
