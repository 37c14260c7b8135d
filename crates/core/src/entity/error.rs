//! Ownership error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during ownership and goodwill calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OwnershipError {
    /// Ownership percentage outside the valid [0, 100] range.
    #[error("Ownership percentage must be between 0 and 100, got {pct}")]
    OwnershipOutOfRange {
        /// The offending percentage.
        pct: Decimal,
    },

    /// Zero ownership cannot be valued; there is no stake to account for.
    #[error("Ownership percentage must be positive for goodwill valuation")]
    ZeroOwnership,
}

impl OwnershipError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::OwnershipOutOfRange { .. } => "OWNERSHIP_OUT_OF_RANGE",
            Self::ZeroOwnership => "ZERO_OWNERSHIP",
        }
    }
}
