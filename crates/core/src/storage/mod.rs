//! Object storage client built on Apache OpenDAL.
//!
//! Supported backends:
//! - S3-compatible: AWS S3, Cloudflare R2, MinIO
//! - Local filesystem (development and tests only)
//!
//! The client exposes a single operation: write a byte buffer under a key in
//! the configured bucket and return the object's public URL.

mod config;
mod error;
mod service;

pub use config::StorageBackend;
pub use error::StorageError;
pub use service::{ObjectStore, StorageService};
