//! Journal generation from eliminations and adjustments.
//!
//! Turns the consolidation run's eliminations and caller-prepared
//! ownership/goodwill adjustments into balanced double-entry journals
//! ready for the caller to persist:
//! - Journal and entry domain types
//! - Journal generator with an in-run numbering sequence
//! - Error types for journal generation

pub mod generator;
pub mod types;

pub use generator::{JournalError, JournalGenerator, JournalNumberSequence};
pub use types::{AdjustmentEntry, AdjustmentInput, EntryType, Journal, JournalEntry, JournalType};
