//! Pulseboard server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), seeds the
//! in-memory facility store with demo data, starts the KPI simulator, and
//! serves the JSON API under `/api`.

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context as _;
use axum::Router;
use clap::Parser;
use pulseboard_api::{ApiState, SessionManager, api_router};
use pulseboard_sim::{ChaChaNoise, Simulator};
use pulseboard_store_memory::MemoryStore;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Pulseboard facility dashboard server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
struct ServerConfig {
  #[serde(default = "default_host")]
  host:               String,
  #[serde(default = "default_port")]
  port:               u16,
  /// Seconds between KPI simulator ticks.
  #[serde(default = "default_tick")]
  tick_interval_secs: u64,
  /// Fixed simulator seed. Omit for a fresh drift on every start.
  rng_seed:           Option<u64>,
  /// Where to persist the session record. Omit to keep sessions in memory.
  session_cache:      Option<PathBuf>,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5310 }
fn default_tick() -> u64 { 3 }

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("PULSEBOARD"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let sessions = match &server_cfg.session_cache {
    Some(path) => SessionManager::with_cache(path.clone()),
    None => SessionManager::new(),
  };

  let noise = match server_cfg.rng_seed {
    Some(seed) => ChaChaNoise::seeded(seed),
    None => ChaChaNoise::from_entropy(),
  };
  let simulator = Simulator::spawn(
    Duration::from_secs(server_cfg.tick_interval_secs),
    noise,
  );

  // Build application state.
  let state = ApiState {
    store:    Arc::new(MemoryStore::with_demo_data()),
    sessions: Arc::new(sessions),
    kpi:      simulator.subscribe(),
  };

  let app = Router::new()
    .nest("/api", api_router(state))
    .layer(TraceLayer::new_for_http());
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
