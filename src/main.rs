use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};

/// HTTP service that assigns Nordic codenames to registered players
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Listen port (overrides the PORT environment variable)
    #[arg(long, short = 'p')]
    port: Option<u16>,

    /// Directory for persisted state (overrides STATE_PATH)
    #[arg(long)]
    state_path: Option<String>,
}

mod error;
mod models;
mod names;
mod store;
mod web;

use store::{create_shared_player_store, PlayerStore};
use web::{start_web_server, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    let state_path = args
        .state_path
        .or_else(|| std::env::var("STATE_PATH").ok())
        .unwrap_or_else(|| "state".to_string());

    // Ensure state directory exists
    tokio::fs::create_dir_all(&state_path).await.ok();

    info!("Loading player store...");
    let store_path = format!("{}/players.json", state_path);
    let player_store = PlayerStore::load(&store_path).await.unwrap_or_else(|e| {
        warn!("Could not load player store: {}, using empty store", e);
        PlayerStore::new()
    });
    info!(
        "Loaded {} player record(s) from {}",
        player_store.player_count(),
        store_path
    );
    let shared_store = create_shared_player_store(player_store);

    let mut config = ServerConfig::from_env();
    if let Some(port) = args.port {
        config.port = port;
    }

    let state = AppState {
        store: shared_store,
        store_path,
    };

    start_web_server(config, state).await
}
