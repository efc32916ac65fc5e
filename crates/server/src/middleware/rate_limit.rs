//! Rate limiting middleware using governor and `tower_governor`.
//!
//! One blanket per-IP limiter covers the whole service boundary; the
//! payment endpoint has no stricter tier of its own.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::ConnectInfo;
use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{GovernorError, GovernorLayer, governor::GovernorConfigBuilder};

// =============================================================================
// IP Key Extractor
// =============================================================================

/// Key extractor that checks standard proxy headers first, then falls
/// back to the peer address.
#[derive(Clone, Copy)]
pub struct ProxyIpKeyExtractor;

impl tower_governor::key_extractor::KeyExtractor for ProxyIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        let headers = req.headers();

        // Try X-Forwarded-For (first IP in the chain)
        if let Some(ip) = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.split(',').next())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
        {
            return Ok(ip);
        }

        // Try X-Real-IP
        if let Some(ip) = headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
        {
            return Ok(ip);
        }

        // Fall back to the direct peer address
        if let Some(ip) = req
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|connect_info| connect_info.0.ip())
        {
            return Ok(ip);
        }

        Err(GovernorError::UnableToExtractKey)
    }
}

// =============================================================================
// Rate Limiter Configuration
// =============================================================================

/// Rate limiter layer type for Axum.
pub type RateLimiterLayer =
    GovernorLayer<ProxyIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Create the blanket per-IP rate limiter: ~100 requests per 15 minutes.
///
/// Configuration: 1 token every 9 seconds (replenish), burst of 100, so a
/// client can use its full 15-minute allowance at once but no faster.
///
/// # Panics
///
/// This function will not panic. The configuration uses only valid
/// positive integers (`per_second(9)` and `burst_size(100)`), which are
/// always accepted by `GovernorConfigBuilder`.
#[must_use]
pub fn payment_rate_limiter() -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(ProxyIpKeyExtractor)
        .per_second(9) // Replenish 1 token every 9 seconds (~100 per 15 minutes)
        .burst_size(100) // Allow the full window's worth in a burst
        .finish()
        .expect("rate limiter config with per_second(9) and burst_size(100) is valid");
    GovernorLayer::new(Arc::new(config))
}
