//! Storage service implementation using Apache OpenDAL.

use async_trait::async_trait;
use bytes::Bytes;
use opendal::{Operator, services};

use super::config::StorageBackend;
use super::error::StorageError;

/// A store that accepts byte buffers under a key and hands back the public
/// URL of the stored object.
///
/// Handlers hold the store behind this trait so tests can substitute an
/// in-memory double for the real backend.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `data` under `key`, overwriting any existing object.
    ///
    /// Returns the public URL of the stored object. No retry is performed;
    /// the caller decides what to do with a failure.
    async fn put(&self, key: &str, data: Bytes) -> Result<String, StorageError>;
}

/// Storage service for uploaded files.
pub struct StorageService {
    operator: Operator,
    backend: StorageBackend,
}

impl StorageService {
    /// Create a new storage service for the given backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be initialized.
    pub fn new(backend: StorageBackend) -> Result<Self, StorageError> {
        let operator = Self::create_operator(&backend)?;
        Ok(Self { operator, backend })
    }

    /// Create OpenDAL operator from backend config.
    fn create_operator(backend: &StorageBackend) -> Result<Operator, StorageError> {
        match backend {
            StorageBackend::S3 {
                bucket,
                region,
                access_key_id,
                secret_access_key,
                endpoint,
            } => {
                let mut builder = services::S3::default()
                    .bucket(bucket)
                    .region(region)
                    .access_key_id(access_key_id)
                    .secret_access_key(secret_access_key);

                if let Some(endpoint) = endpoint {
                    builder = builder.endpoint(endpoint);
                }

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish())
            }
            StorageBackend::LocalFs { root } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StorageError::configuration("invalid path"))?,
                );

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish())
            }
        }
    }

    /// Public URL of the object stored under `key`.
    ///
    /// AWS buckets use the canonical virtual-hosted form; a custom endpoint
    /// switches to path-style addressing.
    #[must_use]
    pub fn public_url(&self, key: &str) -> String {
        match &self.backend {
            StorageBackend::S3 {
                bucket,
                region,
                endpoint,
                ..
            } => match endpoint {
                Some(endpoint) => {
                    format!("{}/{bucket}/{key}", endpoint.trim_end_matches('/'))
                }
                None => format!("https://{bucket}.s3.{region}.amazonaws.com/{key}"),
            },
            StorageBackend::LocalFs { root } => {
                format!("file://{}", root.join(key).display())
            }
        }
    }

    /// Get the backend name.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Get the bucket name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        self.backend.bucket()
    }
}

#[async_trait]
impl ObjectStore for StorageService {
    async fn put(&self, key: &str, data: Bytes) -> Result<String, StorageError> {
        if key.is_empty() {
            return Err(StorageError::invalid_key("key must not be empty"));
        }

        self.operator.write(key, data).await?;
        Ok(self.public_url(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn s3_service() -> StorageService {
        StorageService::new(StorageBackend::s3(
            "uploads",
            "eu-west-1",
            "key",
            "secret",
            None,
        ))
        .expect("should create service")
    }

    fn temp_root() -> PathBuf {
        let root = std::env::temp_dir().join(format!("updock-storage-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&root).expect("should create temp dir");
        root
    }

    #[test]
    fn test_public_url_aws_format() {
        let service = s3_service();
        assert_eq!(
            service.public_url("invoice.pdf"),
            "https://uploads.s3.eu-west-1.amazonaws.com/invoice.pdf"
        );
    }

    #[test]
    fn test_public_url_custom_endpoint() {
        let service = StorageService::new(StorageBackend::s3(
            "uploads",
            "auto",
            "key",
            "secret",
            Some("http://localhost:9090/".to_string()),
        ))
        .expect("should create service");

        assert_eq!(
            service.public_url("invoice.pdf"),
            "http://localhost:9090/uploads/invoice.pdf"
        );
    }

    #[tokio::test]
    async fn test_put_rejects_empty_key() {
        let service = s3_service();
        let err = service.put("", Bytes::from_static(b"data")).await;
        assert!(matches!(err, Err(StorageError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_put_round_trip() {
        let root = temp_root();
        let service =
            StorageService::new(StorageBackend::local_fs(&root)).expect("should create service");

        let content = b"hello object store";
        let url = service
            .put("greeting.txt", Bytes::from_static(content))
            .await
            .expect("put should succeed");

        assert_eq!(url, format!("file://{}", root.join("greeting.txt").display()));
        let stored = std::fs::read(root.join("greeting.txt")).expect("object should exist");
        assert_eq!(stored, content);

        std::fs::remove_dir_all(&root).ok();
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_key() {
        let root = temp_root();
        let service =
            StorageService::new(StorageBackend::local_fs(&root)).expect("should create service");

        let first = service
            .put("report.csv", Bytes::from_static(b"v1"))
            .await
            .expect("first put should succeed");
        let second = service
            .put("report.csv", Bytes::from_static(b"v2"))
            .await
            .expect("second put should succeed");

        // Same key, same URL; only the content changes server-side.
        assert_eq!(first, second);
        let stored = std::fs::read(root.join("report.csv")).expect("object should exist");
        assert_eq!(stored, b"v2");

        std::fs::remove_dir_all(&root).ok();
    }
}
