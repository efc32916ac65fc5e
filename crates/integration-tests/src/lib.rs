//! Shared helpers for Dandiya Store integration tests.
//!
//! Spins up the real payment server and a recording stand-in for the
//! external order-intake relay, both on ephemeral ports.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use secrecy::SecretString;

use dandiya_store_server::config::PaymentServerConfig;
use dandiya_store_server::state::AppState;

/// Form submissions captured by the relay stub.
pub type CapturedForms = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// Start the payment server with a test configuration.
///
/// Returns the base URL to point clients at.
///
/// # Panics
///
/// Panics if no ephemeral port can be bound.
pub async fn spawn_payment_server() -> String {
    let config = PaymentServerConfig {
        host: "127.0.0.1".parse().expect("valid host"),
        port: 0,
        upi_id: SecretString::from("dandiyaa@ptyes"),
        payee_name: "Navratri Store".to_string(),
        sentry_dsn: None,
    };
    let app = dandiya_store_server::app(AppState::new(config));

    serve(app).await
}

/// Start a relay stub that records every form submission and answers
/// with the given status.
///
/// # Panics
///
/// Panics if no ephemeral port can be bound.
pub async fn spawn_relay_stub(status: StatusCode) -> (String, CapturedForms) {
    let captured: CapturedForms = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route("/", post(record_submission))
        .with_state((captured.clone(), status));

    (serve(app).await, captured)
}

async fn record_submission(
    State((captured, status)): State<(CapturedForms, StatusCode)>,
    Form(form): Form<HashMap<String, String>>,
) -> StatusCode {
    if let Ok(mut forms) = captured.lock() {
        forms.push(form);
    }
    status
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("server task");
    });

    format!("http://{addr}")
}
