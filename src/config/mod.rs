use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub web: WebConfig,
    pub storage: StorageConfig,
    pub metadata_store: MetadataStoreConfig,
    /// The admin surface is inert outside development mode
    pub dev_mode: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory scanned for raw texture files
    pub textures_path: PathBuf,
    /// Directory holding the durable cache tier files
    pub cache_path: PathBuf,
    /// Public URL prefix under which texture images are served
    pub image_base_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataStoreConfig {
    /// Base URL of the metadata store endpoints
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web: WebConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            storage: StorageConfig {
                textures_path: PathBuf::from("./data/textures"),
                cache_path: PathBuf::from("./data/cache"),
                image_base_path: "/resources/textures".to_string(),
            },
            metadata_store: MetadataStoreConfig {
                base_url: "http://localhost:3000/api/texture-data".to_string(),
                timeout_seconds: 30,
            },
            dev_mode: true,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(config_file: P) -> Result<Self> {
        let config_file = config_file.as_ref();

        if config_file.exists() {
            let contents = std::fs::read_to_string(config_file)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::create_dir_all(&default_config.storage.textures_path)?;
            std::fs::create_dir_all(&default_config.storage.cache_path)?;
            std::fs::write(config_file, contents)?;
            Ok(default_config)
        }
    }
}
