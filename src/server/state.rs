use axum::extract::FromRef;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;
use crate::gallery::MockAlbumGenerator;

pub type GuardedGenerator = Arc<MockAlbumGenerator>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub generator: GuardedGenerator,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, generator: GuardedGenerator) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            generator,
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

impl FromRef<ServerState> for GuardedGenerator {
    fn from_ref(input: &ServerState) -> Self {
        input.generator.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
