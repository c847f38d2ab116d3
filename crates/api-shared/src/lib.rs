//! # API Shared
//!
//! Shared definitions for the notes HTTP API.
//!
//! Contains:
//! - Request/response bodies (`types` module), with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and by anything that needs to speak the same JSON.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
