mod file_config;

pub use file_config::{FileConfig, GalleryConfig};

use crate::gallery::{
    GeneratorSettings, DEFAULT_IMAGE_BASE_URL, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE,
};
use crate::server::{RequestsLoggingLevel, ServerConfig, DEFAULT_MAX_PAGE_SIZE};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::Path;

/// CLI arguments that can be overridden by the TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    pub seed: Option<u64>,
    pub max_pages: u32,
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub image_base_url: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        let server = ServerConfig::default();
        CliConfig {
            port: server.port,
            logging_level: server.requests_logging_level,
            content_cache_age_sec: server.content_cache_age_sec,
            frontend_dir_path: None,
            seed: None,
            max_pages: DEFAULT_MAX_PAGES,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_owned(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,

    /// None seeds the generator from the OS.
    pub seed: Option<u64>,
    pub max_pages: u32,
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub image_base_url: String,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();
        let gallery = file.gallery.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);

        let logging_level = match file.logging_level {
            Some(raw) => match parse_logging_level(&raw) {
                Some(level) => level,
                None => bail!("Unknown logging_level in config file: {:?}", raw),
            },
            None => cli.logging_level.clone(),
        };

        let content_cache_age_sec = file
            .content_cache_age_sec
            .unwrap_or(cli.content_cache_age_sec);

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());
        if let Some(path) = &frontend_dir_path {
            if !Path::new(path).is_dir() {
                bail!("Frontend directory does not exist: {:?}", path);
            }
        }

        let seed = gallery.seed.or(cli.seed);

        let max_pages = gallery.max_pages.unwrap_or(cli.max_pages);
        if max_pages == 0 {
            bail!("max_pages must be at least 1");
        }

        let default_page_size = gallery.default_page_size.unwrap_or(cli.default_page_size);
        let max_page_size = gallery.max_page_size.unwrap_or(cli.max_page_size);
        if default_page_size == 0 || max_page_size == 0 {
            bail!("Page sizes must be at least 1");
        }
        if default_page_size > max_page_size {
            bail!(
                "default_page_size ({}) exceeds max_page_size ({})",
                default_page_size,
                max_page_size
            );
        }

        let image_base_url = gallery
            .image_base_url
            .unwrap_or_else(|| cli.image_base_url.clone())
            .trim_end_matches('/')
            .to_owned();
        if image_base_url.is_empty() {
            bail!("image_base_url must not be empty");
        }

        Ok(Self {
            port,
            logging_level,
            content_cache_age_sec,
            frontend_dir_path,
            seed,
            max_pages,
            default_page_size,
            max_page_size,
            image_base_url,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            port: self.port,
            content_cache_age_sec: self.content_cache_age_sec,
            frontend_dir_path: self.frontend_dir_path.clone(),
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
        }
    }

    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            max_pages: self.max_pages,
            image_base_url: self.image_base_url.clone(),
        }
    }
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
