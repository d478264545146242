mod aggregator;
mod analyzer;
mod config;
mod model;
mod parser;
mod scraper;
mod server;

use aggregator::Aggregator;
use config::load_config;
use parser::TeamListParser;
use crate::scraper::HttpClient;
use server::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        error!("Panic occurred: {}", panic_info);
    }));

    let config_path = std::env::var("VEX_SCOUT_CONFIG").unwrap_or_else(|_| "config.json".into());
    let config = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let client = match HttpClient::new(&config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return;
        }
    };

    let parser = match TeamListParser::new(&config.team_selector) {
        Ok(p) => p,
        Err(e) => {
            error!("Team selector error: {}", e);
            return;
        }
    };

    let state = Arc::new(AppState {
        client: Arc::new(client),
        parser,
        aggregator: Aggregator::from_config(&config),
        teams_page_url: config.teams_page_url.clone(),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };

    info!(
        "Server started on port {} (season: {}, concurrent sources: {})",
        config.port, config.season, config.concurrent_sources
    );
    if let Err(e) = axum::serve(listener, server::router(state)).await {
        error!("Server error: {}", e);
    }
}
