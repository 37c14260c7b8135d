//! Balance consolidation and result validation.
//!
//! This module aggregates per-entity account balances into group balances,
//! applying ownership weighting and intercompany eliminations, and provides
//! the validation pass that inspects the results:
//! - Domain types for account and consolidated balances
//! - Balance consolidator (sequential and parallel)
//! - Structural and materiality validation

pub mod service;
pub mod types;
pub mod validation;


pub use service::Consolidator;
pub use types::{AccountBalance, ConsolidatedBalance};
pub use validation::{ValidationError, ValidationReport, ValidationWarning, Validator};
