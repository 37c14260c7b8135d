//! Group structure and ownership.
//!
//! This module defines the entities that make up a consolidation group,
//! the ownership records linking parents to subsidiaries, and the
//! goodwill/NCI valuation rules applied at acquisition:
//! - Domain types for entities and ownership records
//! - Active-record selection over ownership validity windows
//! - Ownership & goodwill calculator (partial and full methods)
//! - Error types for ownership operations

pub mod error;
pub mod goodwill;
pub mod ownership;
pub mod types;

#[cfg(test)]
mod goodwill_props;

pub use error::OwnershipError;
pub use goodwill::{GoodwillValuation, OwnershipCalculator};
pub use ownership::ActiveOwnership;
pub use types::{Entity, EntityKind, GoodwillMethod, OwnershipRecord, OwnershipRelation};
