//! Two-tier read-through cache
//!
//! Each cache pairs a fast in-process tier with a durable file-backed tier
//! that survives restarts. Reads check the fast tier first and promote
//! durable hits into it; writes keep both tiers in agreement; `clear` empties
//! both. There is no timer expiry: the catalog only changes via operator
//! action, so staleness is resolved by explicit invalidation alone.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::CacheStatus;

/// A cached value together with the time it was written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub value: T,
    pub last_updated: DateTime<Utc>,
}

/// Generic two-tier cache keyed by a fixed namespace
///
/// The durable tier is one JSON file named after the namespace inside the
/// cache directory, mirroring the `{value, last_updated}` shape of the fast
/// tier so the tiers can never disagree about what a hit looks like.
pub struct TieredCache<T> {
    namespace: &'static str,
    cache_dir: PathBuf,
    fast: RwLock<Option<CacheEntry<T>>>,
}

impl<T> TieredCache<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(namespace: &'static str, cache_dir: PathBuf) -> Self {
        Self {
            namespace,
            cache_dir,
            fast: RwLock::new(None),
        }
    }

    fn durable_path(&self) -> PathBuf {
        self.cache_dir.join(format!("{}.json", self.namespace))
    }

    /// Read the cached value, if any
    ///
    /// Promotion is a documented side effect: a durable-tier hit is copied
    /// into the fast tier before it is returned.
    pub async fn read(&self) -> Option<CacheEntry<T>> {
        {
            let fast = self.fast.read().await;
            if let Some(entry) = fast.as_ref() {
                return Some(entry.clone());
            }
        }

        let entry = self.read_durable().await?;
        let mut fast = self.fast.write().await;
        *fast = Some(entry.clone());
        debug!("Promoted durable cache entry into fast tier: {}", self.namespace);
        Some(entry)
    }

    /// Write a value to both tiers
    ///
    /// The durable tier is written first so that a failed write leaves the
    /// fast tier untouched rather than ahead of the durable tier.
    pub async fn write(&self, value: T) -> Result<(), AppError> {
        let entry = CacheEntry {
            value,
            last_updated: Utc::now(),
        };

        fs::create_dir_all(&self.cache_dir).await?;
        let bytes = serde_json::to_vec(&entry)
            .map_err(|e| AppError::cache(self.namespace, e.to_string()))?;
        fs::write(self.durable_path(), bytes).await?;

        let mut fast = self.fast.write().await;
        *fast = Some(entry);
        Ok(())
    }

    /// Empty both tiers; subsequent reads return absent until the next write
    pub async fn clear(&self) {
        {
            let mut fast = self.fast.write().await;
            *fast = None;
        }

        let path = self.durable_path();
        if let Err(e) = fs::remove_file(&path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to clear durable cache {}: {}", self.namespace, e);
            }
        }
    }

    /// Current tier occupancy and last update time
    pub async fn info(&self) -> CacheStatus {
        let (has_fast, fast_updated) = {
            let fast = self.fast.read().await;
            (
                fast.is_some(),
                fast.as_ref().map(|entry| entry.last_updated),
            )
        };

        // The durable timestamp is only consulted when the fast tier is empty;
        // after a successful write the tiers carry the same timestamp anyway.
        let durable = self.read_durable().await;
        let last_updated = fast_updated.or_else(|| durable.as_ref().map(|e| e.last_updated));

        CacheStatus {
            has_fast_tier_cache: has_fast,
            has_durable_tier_cache: durable.is_some(),
            last_updated,
        }
    }

    async fn read_durable(&self) -> Option<CacheEntry<T>> {
        let bytes = match fs::read(self.durable_path()).await {
            Ok(bytes) => bytes,
            Err(_) => return None,
        };

        match serde_json::from_slice(&bytes) {
            Ok(entry) => Some(entry),
            Err(e) => {
                // A corrupt durable file counts as a miss, not an error
                debug!("Discarding unreadable durable cache {}: {}", self.namespace, e);
                None
            }
        }
    }
}
