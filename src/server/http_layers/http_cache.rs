//! Cache-Control middlewares

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::IntoResponse,
};

pub async fn http_cache(
    State(max_age_sec): State<usize>,
    request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    let mut response = next.run(request).await.into_response();
    if let Ok(value) = HeaderValue::from_str(&format!("max-age={}", max_age_sec)) {
        response.headers_mut().insert(header::CACHE_CONTROL, value);
    }
    response
}

/// Every call generates new random data, so nothing may be reused.
pub async fn no_store(request: Request<Body>, next: Next) -> impl IntoResponse {
    let mut response = next.run(request).await.into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}
