//! Room Token Service Library
//!
//! Issues short-lived, room-scoped LiveKit access tokens so that browser
//! and mobile clients never hold the long-lived signing secret. Each issued
//! token binds one identity to one room with join, publish and subscribe
//! permissions.
//!
//! The endpoint does not authenticate its callers: any caller can request a
//! fully-privileged token for any room. Deploy it behind whatever upstream
//! authorization your application enforces.
//!
//! # Modules
//!
//! - `config` - Service configuration
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `models` - Request/response/grant data models
//! - `observability` - Metrics
//! - `routes` - Router construction
//! - `services` - Issuance logic and the token signer seam

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod routes;
pub mod services;
