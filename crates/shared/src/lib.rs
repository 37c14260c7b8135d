//! Shared types, errors, and configuration for Gruppo.
//!
//! This crate provides common types used across all other crates:
//! - Money helpers with decimal precision and the group-wide tolerance
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::{AppError, AppResult};
