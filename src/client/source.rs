//! Where the client gets its albums from.

use super::error::{GalleryError, GalleryResult};
use crate::gallery::{MockAlbumGenerator, PhotosPage};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait AlbumSource: Send + Sync {
    async fn fetch_page(&self, page: u32, limit: u32) -> GalleryResult<PhotosPage>;
}

/// Calls the generator in-process, skipping HTTP entirely.
pub struct LocalAlbumSource {
    generator: Arc<MockAlbumGenerator>,
}

impl LocalAlbumSource {
    pub fn new(generator: Arc<MockAlbumGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl AlbumSource for LocalAlbumSource {
    async fn fetch_page(&self, page: u32, limit: u32) -> GalleryResult<PhotosPage> {
        Ok(self.generator.generate_page(page, limit))
    }
}

/// Talks to a running gallery server through `GET /api/photos`.
pub struct HttpAlbumSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAlbumSource {
    /// # Arguments
    /// * `base_url` - Base URL of the gallery server (e.g., "http://localhost:3001")
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(base_url: String, timeout_sec: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    async fn get_photos(&self, page: u32, limit: u32) -> Result<PhotosPage> {
        let url = format!("{}/api/photos", self.base_url);
        debug!("GET {}?page={}&limit={}", url, page, limit);
        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await
            .context("Failed to connect to gallery server")?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Failed to fetch page {}: status {}",
                page,
                response.status()
            );
        }

        response
            .json()
            .await
            .context("Failed to parse photos response")
    }
}

#[async_trait]
impl AlbumSource for HttpAlbumSource {
    async fn fetch_page(&self, page: u32, limit: u32) -> GalleryResult<PhotosPage> {
        self.get_photos(page, limit)
            .await
            .map_err(|err| GalleryError::Fetch(format!("{:#}", err)))
    }
}
