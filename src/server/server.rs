use anyhow::{Context, Result};
use std::time::Duration;

use tower_http::services::ServeDir;
use tracing::{debug, info};

use axum::{
    extract::{Query, State},
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

#[cfg(feature = "slowdown")]
use super::slowdown_request;
use super::{http_cache, log_requests, no_store, state::*, ServerConfig};
use crate::gallery::PhotosPage;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

/// Raw query values, kept as strings so that garbage falls back to the
/// defaults instead of being rejected.
#[derive(Deserialize, Debug, Default)]
pub struct PhotosQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse::<u32>().ok().filter(|value| *value >= 1)
}

impl PhotosQuery {
    /// Returns `(page, limit)`: page defaults to 1, limit to the configured
    /// page size and is clamped to the configured maximum.
    pub fn resolve(&self, config: &ServerConfig) -> (u32, u32) {
        let page = parse_positive(self.page.as_deref()).unwrap_or(1);
        let limit = parse_positive(self.limit.as_deref())
            .unwrap_or(config.default_page_size)
            .min(config.max_page_size);
        (page, limit)
    }
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    };
    Json(stats)
}

async fn get_photos(
    State(state): State<ServerState>,
    Query(query): Query<PhotosQuery>,
) -> Json<PhotosPage> {
    let (page, limit) = query.resolve(&state.config);
    let photos_page = state.generator.generate_page(page, limit);
    debug!(
        "Generated page {} with {} albums (hasMore={})",
        page,
        photos_page.albums.len(),
        photos_page.has_more
    );
    Json(photos_page)
}

pub fn make_app(config: ServerConfig, generator: GuardedGenerator) -> Result<Router> {
    let state = ServerState::new(config.clone(), generator);

    let api_routes: Router = Router::new()
        .route("/photos", get(get_photos))
        .layer(middleware::from_fn(no_store))
        .route("/stats", get(home))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new()
                .fallback_service(static_files_service)
                .layer(middleware::from_fn_with_state(
                    config.content_cache_age_sec,
                    http_cache,
                ))
        }
        None => Router::new().route("/", get(home)).with_state(state.clone()),
    };

    #[allow(unused_mut)]
    let mut app: Router = home_router.nest("/api", api_routes);

    #[cfg(feature = "slowdown")]
    {
        app = app.layer(middleware::from_fn(slowdown_request));
    }
    app = app.layer(middleware::from_fn_with_state(state.clone(), log_requests));

    Ok(app)
}

pub async fn run_server(config: ServerConfig, generator: GuardedGenerator) -> Result<()> {
    let port = config.port;
    let app = make_app(config, generator)?;

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    info!("Gallery server listening on http://127.0.0.1:{}", port);

    Ok(axum::serve(listener, app).await?)
}
