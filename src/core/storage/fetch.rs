//! Object retrieval with bounded in-memory buffering.
//!
//! Storage may deliver an object as a stream of chunks; the pipeline wants
//! one contiguous buffer it can hand to the transcription provider. The
//! fetcher performs that translation explicitly, and refuses objects whose
//! reported size exceeds the configured ceiling before reading any of the
//! body. Trading memory for simplicity is acceptable here because inputs are
//! short-form audio clips, and the ceiling keeps the trade bounded.

use std::sync::Arc;

use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as ObjectPath;
use object_store::{Error as ObjectStoreError, ObjectStore};
use tracing::{debug, info};

use super::StorageError;
use crate::config::ServerConfig;

/// Build the read-side object store handle from server configuration.
pub fn build_object_store(config: &ServerConfig) -> Result<Arc<dyn ObjectStore>, StorageError> {
    let mut builder = AmazonS3Builder::new()
        .with_bucket_name(&config.s3_bucket)
        .with_region(&config.s3_region)
        .with_access_key_id(&config.s3_access_key_id)
        .with_secret_access_key(&config.s3_secret_access_key);

    if let Some(ref endpoint) = config.s3_endpoint {
        builder = builder.with_endpoint(endpoint);
        if endpoint.starts_with("http://") {
            builder = builder.with_allow_http(true);
        }
    }

    let store = builder
        .build()
        .map_err(|e| StorageError::Backend(e.to_string()))?;
    Ok(Arc::new(store))
}

/// Fetches uploaded objects into contiguous buffers.
pub struct ObjectFetcher {
    store: Arc<dyn ObjectStore>,
    max_fetch_bytes: u64,
}

impl ObjectFetcher {
    pub fn new(store: Arc<dyn ObjectStore>, max_fetch_bytes: u64) -> Self {
        Self {
            store,
            max_fetch_bytes,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, StorageError> {
        Ok(Self::new(build_object_store(config)?, config.max_fetch_bytes))
    }

    /// Retrieve the object under `key`, accumulating all chunks into one
    /// buffer.
    ///
    /// The size reported by storage metadata is checked against the ceiling
    /// first, so oversized objects fail fast without being read.
    pub async fn fetch(&self, key: &str) -> Result<Bytes, StorageError> {
        let path = ObjectPath::parse(key)
            .map_err(|e| StorageError::Backend(format!("invalid object path '{key}': {e}")))?;

        let get_result = match self.store.get(&path).await {
            Ok(result) => result,
            Err(ObjectStoreError::NotFound { .. }) => {
                return Err(StorageError::NotFound(key.to_string()));
            }
            Err(e) => return Err(StorageError::Backend(e.to_string())),
        };

        let size = get_result.meta.size as u64;
        if size > self.max_fetch_bytes {
            return Err(StorageError::TooLarge {
                key: key.to_string(),
                size,
                limit: self.max_fetch_bytes,
            });
        }

        debug!(key, size, "buffering object from storage");

        let bytes = get_result
            .bytes()
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        info!(key, size = bytes.len(), "object fetched");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::memory::InMemory;

    async fn fetcher_with_object(key: &str, data: Vec<u8>, limit: u64) -> ObjectFetcher {
        let store = Arc::new(InMemory::new());
        store
            .put(&ObjectPath::parse(key).unwrap(), data.into())
            .await
            .unwrap();
        ObjectFetcher::new(store, limit)
    }

    #[tokio::test]
    async fn test_fetch_returns_full_object() {
        let data = vec![7u8; 4096];
        let fetcher = fetcher_with_object("abc-clip.wav", data.clone(), 1024 * 1024).await;

        let bytes = fetcher.fetch("abc-clip.wav").await.unwrap();
        assert_eq!(bytes.len(), 4096);
        assert_eq!(&bytes[..], &data[..]);
    }

    #[tokio::test]
    async fn test_fetch_missing_object_is_not_found() {
        let fetcher = ObjectFetcher::new(Arc::new(InMemory::new()), 1024);
        let result = fetcher.fetch("does-not-exist.mp3").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_fetch_rejects_oversized_object() {
        let fetcher = fetcher_with_object("abc-big.wav", vec![0u8; 2048], 1024).await;

        let result = fetcher.fetch("abc-big.wav").await;
        match result {
            Err(StorageError::TooLarge { size, limit, .. }) => {
                assert_eq!(size, 2048);
                assert_eq!(limit, 1024);
            }
            other => panic!("expected TooLarge, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_at_exact_ceiling_succeeds() {
        let fetcher = fetcher_with_object("abc-edge.wav", vec![0u8; 1024], 1024).await;
        let bytes = fetcher.fetch("abc-edge.wav").await.unwrap();
        assert_eq!(bytes.len(), 1024);
    }
}
