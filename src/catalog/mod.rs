//! Catalog synchronization
//!
//! The synchronizer reconciles three independently cached data sources — the
//! raw texture enumeration, the name/category metadata, and the category
//! list — into one published catalog snapshot. Every mutation invalidates
//! all three caches together and runs a full forced reload, so the published
//! snapshot always matches what the metadata store actually persisted.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info};

use crate::cache::TieredCache;
use crate::errors::AppError;
use crate::models::{
    CacheDiagnostics, CatalogItem, MetadataSnapshot, TextureUpdateRequest, UNCATEGORIZED,
};
use crate::sources::{TextureEnumerator, TextureFile};
use crate::store::MetadataStore;

/// The published view of the catalog: last successfully loaded data only
///
/// Load failures never touch this; the page keeps showing the last
/// successful load, or the empty default before the first one.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub items: Vec<CatalogItem>,
    /// Authoritative metadata/category pair, fetched directly from the store
    /// rather than through the merge path
    pub snapshot: MetadataSnapshot,
    pub diagnostics: CacheDiagnostics,
}

pub struct CatalogService {
    enumerator: TextureEnumerator,
    store: Arc<dyn MetadataStore>,
    catalog_cache: TieredCache<Vec<CatalogItem>>,
    metadata_cache: TieredCache<MetadataSnapshot>,
    category_cache: TieredCache<Vec<String>>,
    state: RwLock<CatalogState>,
    /// Serializes loads; a load runs to completion before the next may start
    load_lock: Mutex<()>,
}

impl CatalogService {
    pub fn new(
        enumerator: TextureEnumerator,
        store: Arc<dyn MetadataStore>,
        cache_dir: PathBuf,
    ) -> Self {
        Self {
            enumerator,
            store,
            catalog_cache: TieredCache::new("texture-catalog", cache_dir.clone()),
            metadata_cache: TieredCache::new("texture-metadata", cache_dir.clone()),
            category_cache: TieredCache::new("texture-categories", cache_dir),
            state: RwLock::new(CatalogState::default()),
            load_lock: Mutex::new(()),
        }
    }

    /// Reload the catalog and republish the snapshot
    ///
    /// With `force_refresh` all three caches are cleared first, guaranteeing
    /// fresh data at the cost of a full re-fetch. On any failure the
    /// previously published state is left untouched.
    pub async fn load(&self, force_refresh: bool) -> Result<(), AppError> {
        let _guard = self.load_lock.lock().await;

        let result = self.load_locked(force_refresh).await;
        if let Err(ref e) = result {
            error!("Catalog load failed, keeping last published state: {}", e);
        }
        result
    }

    async fn load_locked(&self, force_refresh: bool) -> Result<(), AppError> {
        if force_refresh {
            self.clear_caches().await;
        }

        let items = self.merged_catalog().await?;

        // The category list shown in filters and the edit modal must reflect
        // the authoritative store, not a possibly stale merged projection.
        let snapshot = self.store.fetch().await?;

        let diagnostics = self.diagnostics().await;
        let mut state = self.state.write().await;
        info!(
            "Catalog loaded: {} textures, {} categories",
            items.len(),
            snapshot.categories.len()
        );
        *state = CatalogState {
            items,
            snapshot,
            diagnostics,
        };
        Ok(())
    }

    /// The merged catalog, read through the catalog cache
    async fn merged_catalog(&self) -> Result<Vec<CatalogItem>, AppError> {
        if let Some(entry) = self.catalog_cache.read().await {
            return Ok(entry.value);
        }

        let files = self.enumerator.enumerate().await?;
        let metadata = self.metadata_snapshot().await?;
        let items = merge_catalog(files, &metadata);
        self.catalog_cache.write(items.clone()).await?;
        Ok(items)
    }

    /// Metadata snapshot, read through the metadata cache
    ///
    /// A store fetch on miss also repopulates the category cache, keeping the
    /// two auxiliary caches in step.
    async fn metadata_snapshot(&self) -> Result<MetadataSnapshot, AppError> {
        if let Some(entry) = self.metadata_cache.read().await {
            return Ok(entry.value);
        }

        let snapshot = self.store.fetch().await?;
        self.metadata_cache.write(snapshot.clone()).await?;
        self.category_cache.write(snapshot.categories.clone()).await?;
        Ok(snapshot)
    }

    /// Validate and persist one texture's name/category edit
    ///
    /// On store acknowledgement all three caches are cleared and a forced
    /// reload republishes the snapshot. On failure the caches are left
    /// untouched and no reload runs, so the operator can retry.
    pub async fn commit_edit(&self, id: &str, name: &str, category: &str) -> Result<(), AppError> {
        let name = name.trim();
        let category = category.trim();
        if name.is_empty() || category.is_empty() {
            return Err(AppError::validation(
                "texture name and category must be non-empty",
            ));
        }

        let request = TextureUpdateRequest {
            texture_id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
        };
        self.store.update(&request).await?;

        info!("Texture '{}' updated, forcing catalog reload", id);
        self.clear_caches().await;
        self.load(true).await
    }

    /// Clear all three caches; sequential clears with no reload in between,
    /// so callers observe the clear as atomic
    pub async fn clear_caches(&self) {
        self.catalog_cache.clear().await;
        self.metadata_cache.clear().await;
        self.category_cache.clear().await;
    }

    /// Snapshot of the last successful load
    pub async fn state(&self) -> CatalogState {
        self.state.read().await.clone()
    }

    /// Current occupancy of the three caches
    pub async fn diagnostics(&self) -> CacheDiagnostics {
        CacheDiagnostics {
            catalog: self.catalog_cache.info().await,
            metadata: self.metadata_cache.info().await,
            categories: self.category_cache.info().await,
        }
    }
}

/// Build one catalog item per enumerated file, resolving name and category
/// from the metadata snapshot or falling back to defaults
fn merge_catalog(files: Vec<TextureFile>, metadata: &MetadataSnapshot) -> Vec<CatalogItem> {
    files
        .into_iter()
        .map(|file| {
            let (name, category) = match metadata.textures.get(&file.id) {
                Some(meta) => (meta.name.clone(), meta.category.clone()),
                None => (file.id.clone(), UNCATEGORIZED.to_string()),
            };
            CatalogItem {
                id: file.id,
                file_name: file.file_name,
                image_path: file.image_path,
                code: file.code,
                name,
                category,
            }
        })
        .collect()
}
