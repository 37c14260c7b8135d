//! Ownership & goodwill calculator.
//!
//! Implements acquisition accounting for ownership stakes:
//! - NCI percentage as the complement of ownership
//! - Goodwill under the partial and full methods
//! - NCI carrying value
//!
//! All intermediate arithmetic keeps full decimal precision; callers round
//! via [`GoodwillValuation::rounded`] at the external reporting boundary.

use gruppo_shared::types::{round_reporting, EntityId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::OwnershipError;
use super::types::{GoodwillMethod, OwnershipRecord};

/// Result of valuing an acquisition under a goodwill method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodwillValuation {
    /// The owning entity.
    pub parent: EntityId,
    /// The acquired entity.
    pub subsidiary: EntityId,
    /// Method used for the valuation.
    pub method: GoodwillMethod,
    /// Ownership percentage, 0-100.
    pub ownership_pct: Decimal,
    /// Non-controlling interest percentage (`100 - ownership`).
    pub nci_pct: Decimal,
    /// Total recognized goodwill. Negative goodwill is a bargain purchase,
    /// flagged by the validator rather than rejected here.
    pub goodwill: Decimal,
    /// Goodwill attributed to the parent.
    pub parent_goodwill: Decimal,
    /// Goodwill attributed to NCI (zero under the partial method).
    pub nci_goodwill: Decimal,
    /// NCI carrying value.
    pub nci_value: Decimal,
}

impl GoodwillValuation {
    /// Returns true if this acquisition produced negative goodwill.
    #[must_use]
    pub fn is_bargain_purchase(&self) -> bool {
        self.goodwill.is_sign_negative() && !self.goodwill.is_zero()
    }

    /// Returns a copy with monetary fields rounded for external reporting.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            goodwill: round_reporting(self.goodwill),
            parent_goodwill: round_reporting(self.parent_goodwill),
            nci_goodwill: round_reporting(self.nci_goodwill),
            nci_value: round_reporting(self.nci_value),
            ..self.clone()
        }
    }
}

/// Calculator for ownership percentages and goodwill valuations.
///
/// Stateless; all inputs are explicit parameters.
pub struct OwnershipCalculator;

impl OwnershipCalculator {
    /// Computes the NCI percentage as the complement of ownership.
    ///
    /// # Errors
    ///
    /// Returns `OwnershipOutOfRange` if the percentage is outside [0, 100].
    pub fn nci_percentage(ownership_pct: Decimal) -> Result<Decimal, OwnershipError> {
        Self::validate_pct(ownership_pct)?;
        Ok(Decimal::ONE_HUNDRED - ownership_pct)
    }

    /// Values an acquisition under the record's goodwill method.
    ///
    /// Both methods start from the excess of consideration over the parent's
    /// share of fair value. Under the full method that excess is split
    /// between parent and NCI in proportion to their percentages, and the
    /// NCI carrying value includes its goodwill share. A fair value of zero
    /// or below is a valid-if-unusual state (wind-down, bargain purchase)
    /// and flows through the same formulas.
    ///
    /// # Errors
    ///
    /// Returns `OwnershipOutOfRange` for percentages outside [0, 100] and
    /// `ZeroOwnership` for a zero stake.
    pub fn value_acquisition(record: &OwnershipRecord) -> Result<GoodwillValuation, OwnershipError> {
        Self::validate_pct(record.ownership_pct)?;
        if record.ownership_pct.is_zero() {
            return Err(OwnershipError::ZeroOwnership);
        }

        let ownership_fraction = record.ownership_fraction();
        let nci_fraction = record.nci_pct() / Decimal::ONE_HUNDRED;

        let excess =
            record.consideration - ownership_fraction * record.fair_value_net_assets;
        let nci_share_of_net_assets = nci_fraction * record.fair_value_net_assets;

        let (parent_goodwill, nci_goodwill, nci_value) = match record.method {
            GoodwillMethod::Partial => (excess, Decimal::ZERO, nci_share_of_net_assets),
            GoodwillMethod::Full => {
                let parent_goodwill = excess * ownership_fraction;
                let nci_goodwill = excess * nci_fraction;
                (
                    parent_goodwill,
                    nci_goodwill,
                    nci_share_of_net_assets + nci_goodwill,
                )
            }
        };

        Ok(GoodwillValuation {
            parent: record.parent,
            subsidiary: record.subsidiary,
            method: record.method,
            ownership_pct: record.ownership_pct,
            nci_pct: record.nci_pct(),
            goodwill: excess,
            parent_goodwill,
            nci_goodwill,
            nci_value,
        })
    }

    fn validate_pct(pct: Decimal) -> Result<(), OwnershipError> {
        if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
            return Err(OwnershipError::OwnershipOutOfRange { pct });
        }
        Ok(())
    }
}
