//! Money helpers with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All monetary amounts are `rust_decimal::Decimal`.
//!
//! The group-wide equality tolerance lives here so that matching, journal
//! balancing, and validation all compare against the same constant instead
//! of re-deriving it per call site.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Group-wide monetary equality tolerance: 0.01 currency units.
pub const TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Decimal places used at the external reporting boundary.
pub const REPORTING_DP: u32 = 2;

/// Returns true if two amounts are equal within [`TOLERANCE`].
#[must_use]
pub fn approx_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < TOLERANCE
}

/// Returns true if an amount is zero within [`TOLERANCE`].
#[must_use]
pub fn approx_zero(amount: Decimal) -> bool {
    amount.abs() < TOLERANCE
}

/// Rounds an amount for external reporting.
///
/// Uses banker's rounding (round half to even) to minimize cumulative errors.
/// Intermediate calculations keep full precision; only report-facing values
/// pass through here.
#[must_use]
pub fn round_reporting(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(REPORTING_DP, RoundingStrategy::MidpointNearestEven)
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Pound Sterling
    Gbp,
    /// Singapore Dollar
    Sgd,
    /// Japanese Yen
    Jpy,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Gbp => write!(f, "GBP"),
            Self::Sgd => write!(f, "SGD"),
            Self::Jpy => write!(f, "JPY"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "SGD" => Ok(Self::Sgd),
            "JPY" => Ok(Self::Jpy),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
