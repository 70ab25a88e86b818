//! Shared types for the PeoplePulse workspace
//!
//! Common types used across the gateway client, the mock record backend,
//! and the application shell: data models, error types, and the unified
//! API response structure.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
