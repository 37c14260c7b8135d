//! Intercompany transactions and elimination matching.
//!
//! Intercompany (IC) transactions record the same economic event on the
//! books of two related entities. This module pairs offsetting IC
//! transactions and produces the eliminations that remove them from
//! consolidated totals:
//! - Domain types for IC transactions and eliminations
//! - First-fit elimination matcher

pub mod matcher;
pub mod types;

#[cfg(test)]
mod matcher_props;

pub use matcher::{EliminationMatcher, MatchOutcome};
pub use types::{
    Elimination, EliminationOverride, IntercompanyTransaction, MatchStatus, TransactionCategory,
};
