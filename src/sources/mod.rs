//! Raw texture enumeration
//!
//! Scans the configured textures directory and produces one entry per image
//! file. The entry `id` is the file stem and is stable across reloads; the
//! short display code is derived deterministically from the file name.

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::errors::{AppError, FetchError};

/// One enumerated texture file before metadata resolution
#[derive(Debug, Clone, PartialEq)]
pub struct TextureFile {
    pub id: String,
    pub file_name: String,
    pub image_path: String,
    pub code: String,
}

#[derive(Clone)]
pub struct TextureEnumerator {
    textures_dir: PathBuf,
    image_base_path: String,
}

impl TextureEnumerator {
    pub fn new(textures_dir: PathBuf, image_base_path: String) -> Self {
        Self {
            textures_dir,
            image_base_path: image_base_path.trim_end_matches('/').to_string(),
        }
    }

    /// List every texture file in the source directory, in file name order
    pub async fn enumerate(&self) -> Result<Vec<TextureFile>, AppError> {
        let mut entries = fs::read_dir(&self.textures_dir).await.map_err(|e| {
            FetchError::enumeration(self.textures_dir.display().to_string(), e.to_string())
        })?;

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            FetchError::enumeration(self.textures_dir.display().to_string(), e.to_string())
        })? {
            let file_name = entry.file_name().to_string_lossy().to_string();
            if !is_texture_file(&file_name) {
                debug!("Skipping non-texture file: {}", file_name);
                continue;
            }

            let id = file_stem(&file_name);
            let image_path = format!("{}/{}", self.image_base_path, file_name);
            let code = texture_code(&file_name);

            files.push(TextureFile {
                id,
                file_name,
                image_path,
                code,
            });
        }

        // Directory iteration order is platform-dependent; sort so ids map to
        // a stable catalog order across reloads.
        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(files)
    }
}

/// Deterministic short display code: "TXC-" plus the first 8 hex characters
/// of the SHA-256 of the file name
pub fn texture_code(file_name: &str) -> String {
    let digest = Sha256::digest(file_name.as_bytes());
    let hex: String = digest.iter().take(4).map(|b| format!("{:02x}", b)).collect();
    format!("TXC-{}", hex.to_uppercase())
}

fn file_stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string())
}

fn is_texture_file(file_name: &str) -> bool {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    matches!(
        extension.to_lowercase().as_str(),
        "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg"
    )
}
