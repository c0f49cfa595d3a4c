//! Random slowdown middleware, lets the client's loading states show up.

use axum::body::Body;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::IntoResponse;
use rand_distr::{Distribution, Normal};
use std::time::Duration;

const MEAN_DELAY_MS: f64 = 500.0;
const DELAY_STD_DEV_MS: f64 = 300.0;

/// Delays the request by a normally distributed amount, negative samples
/// count as zero.
pub async fn slowdown_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let delay_ms = match Normal::new(MEAN_DELAY_MS, DELAY_STD_DEV_MS) {
        Ok(normal) => 0.0f64.max(normal.sample(&mut rand::rng())),
        Err(_) => MEAN_DELAY_MS,
    };

    tokio::time::sleep(Duration::from_millis(delay_ms as u64)).await;
    next.run(request).await
}
