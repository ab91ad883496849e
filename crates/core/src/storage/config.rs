//! Storage backend configuration.

use std::path::PathBuf;

/// Storage backend configuration.
#[derive(Debug, Clone)]
pub enum StorageBackend {
    /// S3-compatible storage: AWS S3, Cloudflare R2, MinIO.
    S3 {
        /// Bucket name.
        bucket: String,
        /// Bucket region.
        region: String,
        /// Access key ID.
        access_key_id: String,
        /// Secret access key.
        secret_access_key: String,
        /// Custom endpoint URL; AWS when unset.
        endpoint: Option<String>,
    },
    /// Local filesystem (development and tests only).
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
}

impl StorageBackend {
    /// Create an S3-compatible backend.
    #[must_use]
    pub fn s3(
        bucket: impl Into<String>,
        region: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        endpoint: Option<String>,
    ) -> Self {
        Self::S3 {
            bucket: bucket.into(),
            region: region.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            endpoint,
        }
    }

    /// Create a local filesystem backend (development and tests only).
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Get the backend name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::S3 { .. } => "s3",
            Self::LocalFs { .. } => "local",
        }
    }

    /// Get the bucket name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        match self {
            Self::S3 { bucket, .. } => bucket,
            Self::LocalFs { root } => root.to_str().unwrap_or("local"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_s3() {
        let backend = StorageBackend::s3("uploads", "us-east-1", "key", "secret", None);
        assert_eq!(backend.name(), "s3");
        assert_eq!(backend.bucket(), "uploads");
    }

    #[test]
    fn test_backend_local() {
        let backend = StorageBackend::local_fs("./storage");
        assert_eq!(backend.name(), "local");
    }
}
