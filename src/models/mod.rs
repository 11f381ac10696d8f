use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentinel category filter value meaning "show every category"
pub const ALL_CATEGORIES: &str = "all";

/// Default category for textures without a metadata override
pub const UNCATEGORIZED: &str = "uncategorized";

/// One merged catalog entry: enumeration data plus resolved metadata
///
/// `id` is derived from the source file reference and is stable across
/// reloads, so cache entries and UI selection survive a reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub file_name: String,
    pub image_path: String,
    /// Deterministic short code generated from the file, used for display/search
    pub code: String,
    pub name: String,
    pub category: String,
}

/// Per-texture name/category override held by the metadata store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureMetadata {
    pub name: String,
    pub category: String,
}

/// Full payload of the metadata store read endpoint
///
/// `textures` may be sparse: textures without an override simply have no key
/// here and resolve to defaults during the merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataSnapshot {
    pub textures: HashMap<String, TextureMetadata>,
    pub categories: Vec<String>,
}

/// Body of the metadata store write endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureUpdateRequest {
    pub texture_id: String,
    pub name: String,
    pub category: String,
}

/// Diagnostics for one two-tier cache, surfaced to the operator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStatus {
    pub has_fast_tier_cache: bool,
    pub has_durable_tier_cache: bool,
    pub last_updated: Option<DateTime<Utc>>,
}

impl CacheStatus {
    /// Human-readable cache state label shown next to the catalog header
    pub fn label(&self) -> &'static str {
        if self.has_fast_tier_cache {
            "fast cache"
        } else if self.has_durable_tier_cache {
            "durable cache"
        } else {
            "no cache"
        }
    }
}

/// Combined diagnostics across the three caches
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheDiagnostics {
    pub catalog: CacheStatus,
    pub metadata: CacheStatus,
    pub categories: CacheStatus,
}
