//! Common types used across the engine.

pub mod id;
pub mod money;

pub use id::*;
pub use money::{approx_eq, approx_zero, round_reporting, Currency, REPORTING_DP, TOLERANCE};
