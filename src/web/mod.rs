//! Web layer
//!
//! HTTP interface for the texture admin service: thin axum handlers that
//! delegate to the catalog service and the pure view projector. The whole
//! admin API sits behind a development-mode gate; outside development the
//! router serves an access-restricted placeholder instead.

use anyhow::Result;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::{catalog::CatalogService, config::Config};

pub mod api;

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: Config, catalog: Arc<CatalogService>) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
        let app = create_router(config, catalog);

        Ok(Self { app, addr })
    }

    /// Start the web server
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, self.app).await?;
        Ok(())
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Build the router; the dev-mode check happens once here, at mount
pub fn create_router(config: Config, catalog: Arc<CatalogService>) -> Router {
    if !config.dev_mode {
        // The page is inert outside development: health stays up for probes,
        // everything else renders the access-restricted placeholder.
        return Router::new()
            .route("/health", get(api::health_check))
            .fallback(api::access_restricted);
    }

    Router::new()
        .route("/health", get(api::health_check))
        .nest("/api/v1", api_v1_routes())
        .layer(CorsLayer::permissive())
        .with_state(AppState { catalog })
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        // Catalog browsing
        .route("/textures", get(api::list_textures))
        .route("/textures/:id", put(api::update_texture))
        .route("/categories", get(api::list_categories))
        // Cache diagnostics and invalidation
        .route("/cache", get(api::get_cache_info))
        .route("/cache/clear", post(api::clear_cache))
        // Forced reload (the page's own reload control)
        .route("/reload", post(api::reload_catalog))
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
}
