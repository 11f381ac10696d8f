use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use super::AppState;
use crate::errors::AppError;
use crate::models::{CacheDiagnostics, CacheStatus, CatalogItem};
use crate::view::{self, ViewState};

#[derive(Debug, Deserialize)]
pub struct TextureListParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TextureListResponse {
    pub textures: Vec<CatalogItem>,
    pub total_items: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_window: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CacheStatusResponse {
    pub has_fast_tier_cache: bool,
    pub has_durable_tier_cache: bool,
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,
    pub label: &'static str,
}

impl From<CacheStatus> for CacheStatusResponse {
    fn from(status: CacheStatus) -> Self {
        Self {
            label: status.label(),
            has_fast_tier_cache: status.has_fast_tier_cache,
            has_durable_tier_cache: status.has_durable_tier_cache,
            last_updated: status.last_updated,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CacheInfoResponse {
    pub catalog: CacheStatusResponse,
    pub metadata: CacheStatusResponse,
    pub categories: CacheStatusResponse,
}

impl From<CacheDiagnostics> for CacheInfoResponse {
    fn from(diagnostics: CacheDiagnostics) -> Self {
        Self {
            catalog: diagnostics.catalog.into(),
            metadata: diagnostics.metadata.into(),
            categories: diagnostics.categories.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateTextureBody {
    pub name: String,
    pub category: String,
}

fn error_response(error: &AppError) -> (StatusCode, Json<SaveResponse>) {
    let status = match error {
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::Fetch(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(SaveResponse {
            success: false,
            message: error.to_string(),
        }),
    )
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Placeholder served for every route when development mode is off
pub async fn access_restricted() -> (StatusCode, Json<Value>) {
    (
        StatusCode::FORBIDDEN,
        Json(json!({
            "error": "access restricted",
            "message": "this page is only available in development mode"
        })),
    )
}

/// The visible catalog slice for the given search/category/page parameters
pub async fn list_textures(
    State(state): State<AppState>,
    Query(params): Query<TextureListParams>,
) -> Json<TextureListResponse> {
    let catalog = state.catalog.state().await;

    // Run the parameters through the view-state transitions so the page
    // reset rules apply uniformly; the page parameter lands last.
    let mut view_state = ViewState::default();
    if let Some(category) = params.category {
        view_state.set_category(category);
    }
    if let Some(search) = params.search {
        view_state.set_search(search);
    }
    if let Some(page) = params.page {
        view_state.set_page(page);
    }

    let page = view::project(&catalog.items, &view_state);
    Json(TextureListResponse {
        textures: page.items,
        total_items: page.total_items,
        total_pages: page.total_pages,
        page: page.page,
        page_window: page.page_window,
    })
}

/// The authoritative category list, for filters and the edit modal
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    let catalog = state.catalog.state().await;
    Json(catalog.snapshot.categories)
}

/// Commit one texture's name/category edit
pub async fn update_texture(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<UpdateTextureBody>,
) -> Result<Json<SaveResponse>, (StatusCode, Json<SaveResponse>)> {
    match state.catalog.commit_edit(&id, &body.name, &body.category).await {
        Ok(()) => Ok(Json(SaveResponse {
            success: true,
            message: format!("texture '{}' updated", id),
        })),
        Err(e) => {
            error!("Failed to update texture '{}': {}", id, e);
            Err(error_response(&e))
        }
    }
}

/// Cache occupancy and last-update diagnostics for the operator
pub async fn get_cache_info(State(state): State<AppState>) -> Json<CacheInfoResponse> {
    Json(state.catalog.diagnostics().await.into())
}

/// Manual cache-clear action: clear all three caches, then reload from scratch
pub async fn clear_cache(State(state): State<AppState>) -> Json<SaveResponse> {
    state.catalog.clear_caches().await;
    info!("Caches cleared by operator action");

    // The view keeps its last-good snapshot if the reload fails; the caches
    // stay empty until the next successful load.
    if let Err(e) = state.catalog.load(true).await {
        warn!("Reload after cache clear failed: {}", e);
    }

    Json(SaveResponse {
        success: true,
        message: "cache cleared".to_string(),
    })
}

/// Forced reload of the whole catalog
pub async fn reload_catalog(
    State(state): State<AppState>,
) -> Result<Json<SaveResponse>, (StatusCode, Json<SaveResponse>)> {
    match state.catalog.load(true).await {
        Ok(()) => {
            let catalog = state.catalog.state().await;
            Ok(Json(SaveResponse {
                success: true,
                message: format!("catalog reloaded: {} textures", catalog.items.len()),
            }))
        }
        Err(e) => {
            error!("Forced reload failed: {}", e);
            Err(error_response(&e))
        }
    }
}
