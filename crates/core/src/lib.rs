//! Object storage client for Updock.
//!
//! This crate contains the store-facing logic with ZERO web dependencies:
//! backend configuration, the upload operation, and public URL derivation.

pub mod storage;
