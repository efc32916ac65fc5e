//! HTTP middleware stack for the payment server.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. CORS (the storefront page calls this origin directly)
//! 3. Security headers
//! 4. Rate limiting (governor)

pub mod rate_limit;
pub mod security_headers;

pub use rate_limit::payment_rate_limiter;
pub use security_headers::security_headers_middleware;
