//! Shared configuration for Updock.
//!
//! This crate provides the environment-sourced application configuration
//! used by the server binary and handed down to the storage layer.

pub mod config;

pub use config::AppConfig;
