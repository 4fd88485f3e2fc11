//! # API Shared
//!
//! Shared utilities and definitions for the ShortUID APIs.
//!
//! Contains:
//! - Request/response types (`types` module), with OpenAPI schemas
//! - Shared services like `HealthService`
//! - Startup configuration (`ServerConfig`)
//!
//! Used by `api-rest` and the `shortuid-run` binary.

pub mod config;
pub mod health;
pub mod types;

pub use config::{ConfigError, ServerConfig};
pub use health::HealthService;
pub use types::*;
