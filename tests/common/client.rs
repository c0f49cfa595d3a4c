//! HTTP client for end-to-end tests
//!
//! When API routes or query formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /api/photos?page={page}&limit={limit}
    pub async fn get_photos(&self, page: u32, limit: u32) -> Response {
        self.get_photos_raw(&format!("page={}&limit={}", page, limit))
            .await
    }

    /// GET /api/photos?{query}, for malformed parameters
    pub async fn get_photos_raw(&self, query: &str) -> Response {
        self.client
            .get(format!("{}/api/photos?{}", self.base_url, query))
            .send()
            .await
            .expect("Get photos request failed")
    }

    /// GET /api/stats
    pub async fn get_stats(&self) -> Response {
        self.client
            .get(format!("{}/api/stats", self.base_url))
            .send()
            .await
            .expect("Get stats request failed")
    }

    /// GET /
    pub async fn get_home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Get home request failed")
    }
}
