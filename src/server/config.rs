use super::RequestsLoggingLevel;
use crate::gallery::DEFAULT_PAGE_SIZE;

pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    /// Applied to the static frontend only, photos are never cached.
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    /// Used when `limit` is missing or unparsable.
    pub default_page_size: u32,
    /// Larger `limit` values are clamped down to this.
    pub max_page_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 3001,
            content_cache_age_sec: 3600,
            frontend_dir_path: None,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}
