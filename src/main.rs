//! Smartnotes CLI - standalone notes server

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smartnotes::ai::openai::OpenAiGateway;
use smartnotes::ai::EnrichmentBackend;
use smartnotes::api::{self, AppState};
use smartnotes::{Config, Database};

#[derive(Parser, Debug)]
#[command(name = "smartnotes")]
#[command(version)]
#[command(about = "Smartnotes - self-hosted notes server with LLM-assisted enrichment", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "~/.smartnotes/config.toml")]
    config: PathBuf,

    /// Override server port
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Override server host
    #[arg(long)]
    host: Option<String>,

    /// Override data directory (holds notes.db)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Initialize a new config file with defaults
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading any environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("smartnotes={},tower_http=debug", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Handle --init flag
    if args.init {
        let config_path = expand_path(&args.config);
        if config_path.exists() {
            tracing::warn!("Config file already exists: {}", config_path.display());
            return Ok(());
        }
        Config::create_default(&config_path)?;
        tracing::info!("Created default config at: {}", config_path.display());
        return Ok(());
    }

    // Load configuration
    let config_path = expand_path(&args.config);
    let mut config = if config_path.exists() {
        Config::from_file(&config_path)?
    } else {
        tracing::warn!(
            "Config file not found at {}, using defaults",
            config_path.display()
        );
        Config::default()
    };

    // Apply CLI and environment overrides
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    config.ai.apply_env();

    if config.ai.api_key.is_none() {
        tracing::warn!(
            "No API key configured (set OPENAI_API_KEY); enrichment requests will fail"
        );
    }

    // Open the note store and build the enrichment gateway
    let db = Arc::new(Database::open(config.db_path())?);
    let gateway: Arc<dyn EnrichmentBackend> = Arc::new(OpenAiGateway::new(config.ai.clone())?);
    tracing::info!("Enrichment model: {}", gateway.model_name());

    let state = AppState { db, gateway };

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address: {}", e))?;

    // Start the server (blocks until shutdown)
    api::serve(addr, state).await?;

    Ok(())
}

/// Expand ~ to home directory
fn expand_path(path: &PathBuf) -> PathBuf {
    if path.starts_with("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(path.strip_prefix("~").unwrap());
        }
    }
    path.clone()
}
