use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use texture_admin::{
    catalog::CatalogService,
    config::Config,
    sources::TextureEnumerator,
    store::HttpMetadataStore,
    web::WebServer,
};

#[derive(Parser)]
#[command(name = "texture-admin")]
#[command(version = "0.1.0")]
#[command(about = "Development-mode admin service for curating a game texture catalog")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.log_level == "trace" {
        format!("texture_admin={},tower_http=trace", cli.log_level)
    } else {
        format!("texture_admin={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting texture admin service v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }

    if !config.dev_mode {
        warn!("Development mode is off; the admin API will serve an access-restricted placeholder");
    }

    let enumerator = TextureEnumerator::new(
        config.storage.textures_path.clone(),
        config.storage.image_base_path.clone(),
    );
    let store = Arc::new(HttpMetadataStore::new(
        &config.metadata_store.base_url,
        Duration::from_secs(config.metadata_store.timeout_seconds),
    )?);
    let catalog = Arc::new(CatalogService::new(
        enumerator,
        store,
        config.storage.cache_path.clone(),
    ));
    info!("Catalog service initialized");

    // Populate the catalog on mount; a failed first load degrades to an
    // empty catalog that the operator can reload manually.
    if config.dev_mode {
        if let Err(e) = catalog.load(false).await {
            warn!("Initial catalog load failed: {}", e);
        }
    }

    let web_server = WebServer::new(config, catalog)?;
    info!(
        "Starting web server on {}:{}",
        web_server.host(),
        web_server.port()
    );
    web_server.serve().await?;

    Ok(())
}
