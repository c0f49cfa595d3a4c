use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use masonry_gallery::config;
use masonry_gallery::gallery::{
    MockAlbumGenerator, DEFAULT_IMAGE_BASE_URL, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE,
};
use masonry_gallery::server::{run_server, RequestsLoggingLevel, DEFAULT_MAX_PAGE_SIZE};

fn parse_path(s: &str) -> Result<PathBuf, String> {
    let path_buf = PathBuf::from(s);
    if path_buf.is_absolute() {
        return Ok(path_buf);
    }
    let cwd = std::env::current_dir().map_err(|e| format!("Failed to get current dir: {}", e))?;
    Ok(cwd.join(path_buf))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to TOML configuration file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// The maximum age of frontend files in the cache in seconds.
    #[clap(long, default_value_t = 3600)]
    pub content_cache_age_sec: usize,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Seed for the album generator, same seed gives the same sequence of pages.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Number of pages reported before `hasMore` turns false.
    #[clap(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: u32,

    /// Albums per page when the request has no usable `limit`.
    #[clap(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub default_page_size: u32,

    /// Upper bound for `limit`.
    #[clap(long, default_value_t = DEFAULT_MAX_PAGE_SIZE)]
    pub max_page_size: u32,

    /// Where photo URLs point to.
    #[clap(long, default_value = DEFAULT_IMAGE_BASE_URL)]
    pub image_base_url: String,
}

impl From<&CliArgs> for config::CliConfig {
    fn from(args: &CliArgs) -> Self {
        config::CliConfig {
            port: args.port,
            logging_level: args.logging_level.clone(),
            content_cache_age_sec: args.content_cache_age_sec,
            frontend_dir_path: args.frontend_dir_path.clone(),
            seed: args.seed,
            max_pages: args.max_pages,
            default_page_size: args.default_page_size,
            max_page_size: args.max_page_size,
            image_base_url: args.image_base_url.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            Some(config::FileConfig::load(path)?)
        }
        None => None,
    };

    let cli_config: config::CliConfig = (&cli_args).into();
    let app_config = config::AppConfig::resolve(&cli_config, file_config)?;

    info!("Configuration loaded:");
    info!("  port: {}", app_config.port);
    info!("  logging_level: {}", app_config.logging_level);
    info!("  max_pages: {}", app_config.max_pages);
    info!(
        "  page size: {} (max {})",
        app_config.default_page_size, app_config.max_page_size
    );
    info!("  image_base_url: {}", app_config.image_base_url);
    if let Some(path) = &app_config.frontend_dir_path {
        info!("  frontend_dir_path: {}", path);
    }

    let generator = match app_config.seed {
        Some(seed) => {
            info!("Seeding album generator with {}", seed);
            MockAlbumGenerator::seeded(app_config.generator_settings(), seed)
        }
        None => MockAlbumGenerator::new(app_config.generator_settings()),
    };

    run_server(app_config.server_config(), Arc::new(generator)).await
}
