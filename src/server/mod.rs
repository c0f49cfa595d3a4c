pub mod config;
mod http_layers;
#[allow(clippy::module_inception)]
pub mod server;
pub mod state;

pub use config::{ServerConfig, DEFAULT_MAX_PAGE_SIZE};
pub use http_layers::*;
pub use server::{make_app, run_server};
