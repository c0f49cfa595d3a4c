use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Every field is optional, present values override the CLI.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub logging_level: Option<String>,
    pub content_cache_age_sec: Option<usize>,
    pub frontend_dir_path: Option<String>,

    pub gallery: Option<GalleryConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct GalleryConfig {
    pub seed: Option<u64>,
    pub max_pages: Option<u32>,
    pub default_page_size: Option<u32>,
    pub max_page_size: Option<u32>,
    pub image_base_url: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_partial_file() {
        let config: FileConfig = toml::from_str(
            r#"
            port = 4000

            [gallery]
            max_pages = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.port, Some(4000));
        assert!(config.logging_level.is_none());
        let gallery = config.gallery.unwrap();
        assert_eq!(gallery.max_pages, Some(3));
        assert!(gallery.seed.is_none());
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.port.is_none());
        assert!(config.gallery.is_none());
    }

    #[test]
    fn load_reports_bad_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "port = \"not a number\"").unwrap();
        let err = FileConfig::load(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));

        assert!(FileConfig::load(Path::new("/definitely/not/here.toml")).is_err());
    }
}
