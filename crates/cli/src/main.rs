use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use offerscope_http::{
    AppState, OffersHttpServer, default_config_path, load_config_from_path, resolve_bind_address,
};
use offerscope_pool::InMemoryOfferPool;
use offerscope_types::wire;
use tracing::info;

/// Standalone server for the scheduler offers introspection endpoint.
#[derive(Debug, Parser)]
#[command(name = "offerscope", version, about)]
struct Args {
    /// Path to the JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind address override, for example 127.0.0.1:8081.
    #[arg(long)]
    bind: Option<String>,

    /// Append the fixed diagnostic sample offer to every response.
    #[arg(long)]
    include_sample_offer: bool,

    /// JSON file holding an array of wire offers to preload into the pool.
    #[arg(long)]
    fixtures: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let mut config = load_config_from_path(&config_path)
        .with_context(|| format!("load config from {}", config_path.display()))?;
    if let Some(bind) = args.bind {
        config.bind_address = Some(bind);
    }
    if args.include_sample_offer {
        config.include_sample_offer = true;
    }

    let pool = Arc::new(InMemoryOfferPool::new());
    if let Some(path) = args.fixtures.as_deref() {
        let offers = load_fixtures(path)?;
        info!(offers = offers.len(), path = %path.display(), "preloading fixture offers");
        for offer in offers {
            pool.insert(offer)?;
        }
    }

    let bind_address = resolve_bind_address(config.bind_address.as_deref())?;
    let state = AppState::new(pool, config.include_sample_offer);
    let running = OffersHttpServer::new(bind_address, state).start().await?;
    info!(address = %running.bound_address(), "serving offers; press ctrl-c to stop");

    tokio::signal::ctrl_c().await?;
    running.stop().await
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Reads a JSON array of wire offers for preloading the in-memory pool.
fn load_fixtures(path: &Path) -> Result<Vec<wire::Offer>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read fixtures from {}", path.display()))?;
    let offers: Vec<wire::Offer> = serde_json::from_str(&content)
        .with_context(|| format!("parse fixtures in {}", path.display()))?;
    Ok(offers)
}
