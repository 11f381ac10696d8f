//! Metadata store client
//!
//! The metadata store is the authoritative external source of human-assigned
//! texture names/categories and of the category list. It is read with one
//! call and written with one call per edit; the trait seam exists so tests
//! can substitute an in-process store.

use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use crate::errors::{AppError, FetchError};
use crate::models::{MetadataSnapshot, TextureUpdateRequest};

#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Fetch the full name/category mapping plus the category list
    async fn fetch(&self) -> Result<MetadataSnapshot, FetchError>;

    /// Persist one texture's name/category override
    async fn update(&self, request: &TextureUpdateRequest) -> Result<(), FetchError>;
}

/// HTTP-backed metadata store client
pub struct HttpMetadataStore {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpMetadataStore {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let endpoint = Url::parse(base_url)
            .map_err(|e| AppError::configuration(format!("invalid metadata store URL: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("texture-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Http)?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl MetadataStore for HttpMetadataStore {
    async fn fetch(&self) -> Result<MetadataSnapshot, FetchError> {
        let response = self.client.get(self.endpoint.clone()).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::ReadRejected {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json::<MetadataSnapshot>().await?)
    }

    async fn update(&self, request: &TextureUpdateRequest) -> Result<(), FetchError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        // Failure is signalled by a non-2xx status; the body is unspecified
        if !response.status().is_success() {
            return Err(FetchError::WriteRejected {
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        let result = HttpMetadataStore::new("not a url", Duration::from_secs(5));
        assert!(matches!(result, Err(AppError::Configuration { .. })));
    }

    #[test]
    fn test_accepts_valid_base_url() {
        let result =
            HttpMetadataStore::new("http://localhost:3000/api/texture-data", Duration::from_secs(5));
        assert!(result.is_ok());
    }
}
