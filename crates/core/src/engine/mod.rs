//! Pipeline orchestration for a full consolidation run.
//!
//! Wires the components together in dependency order: input screening,
//! intercompany matching, goodwill/NCI valuation, balance consolidation,
//! journal generation, and validation. The engine performs no I/O; all
//! collaborator calls happen before and after a run.

pub mod input;
pub mod pipeline;


pub use input::{ConsolidationInput, InputError};
pub use pipeline::{ConsolidationEngine, ConsolidationRun};
