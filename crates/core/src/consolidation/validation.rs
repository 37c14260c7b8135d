//! Structural and materiality validation of consolidation results.

use std::collections::BTreeMap;

use gruppo_shared::config::MaterialityConfig;
use gruppo_shared::types::{EliminationId, EntityId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entity::GoodwillValuation;
use crate::intercompany::Elimination;

use super::types::ConsolidatedBalance;

/// Structural problems in a consolidation run.
///
/// Errors do not halt the pipeline; they are returned alongside the
/// computed figures, and it is the caller's responsibility to block
/// posting or export until the list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// An elimination that debits and credits the same account.
    #[error("Elimination {elimination} debits and credits the same account {account}")]
    SelfElimination {
        /// The offending elimination.
        elimination: EliminationId,
        /// The account on both sides.
        account: String,
    },
}

/// Advisory findings in a consolidation run. Warnings never block anything.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationWarning {
    /// An asset-class account (code prefix `1`) with a negative
    /// consolidated balance.
    #[error("Asset account {account} has negative consolidated balance {amount}")]
    NegativeAssetBalance {
        /// Account code.
        account: String,
        /// The negative consolidated amount.
        amount: Decimal,
    },

    /// Consolidated amount diverges materially from the simple sum of the
    /// raw entity amounts.
    #[error(
        "Account {account} consolidated amount {consolidated} diverges {variance_pct}% from raw sum {raw_sum}"
    )]
    MaterialVariance {
        /// Account code.
        account: String,
        /// Consolidated amount.
        consolidated: Decimal,
        /// Simple sum of parent and subsidiary raw amounts.
        raw_sum: Decimal,
        /// Computed divergence percentage.
        variance_pct: Decimal,
    },

    /// An acquisition valued at negative goodwill (bargain purchase).
    #[error("Bargain purchase on subsidiary {subsidiary}: goodwill {goodwill}")]
    BargainPurchase {
        /// The acquired entity.
        subsidiary: EntityId,
        /// The negative goodwill amount.
        goodwill: Decimal,
    },
}

impl ValidationError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::SelfElimination { .. } => "SELF_ELIMINATION",
        }
    }
}

/// Outcome of the validation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Structural errors; the caller should block posting until empty.
    pub errors: Vec<ValidationError>,
    /// Advisory warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Returns true if neither errors nor warnings were raised.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Returns true if any structural error was raised.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Account codes with this prefix are asset-class accounts.
const ASSET_PREFIX: char = '1';

/// Inspects consolidated balances, eliminations, and valuations for
/// structural and materiality problems. Runs after matching and
/// consolidation; never mutates its inputs.
pub struct Validator;

impl Validator {
    /// Runs the full validation pass.
    #[must_use]
    pub fn validate(
        balances: &BTreeMap<String, ConsolidatedBalance>,
        eliminations: &[Elimination],
        valuations: &[GoodwillValuation],
        materiality: &MaterialityConfig,
    ) -> ValidationReport {
        let mut report = ValidationReport::default();

        for elimination in eliminations {
            if elimination.is_self_elimination() {
                report.errors.push(ValidationError::SelfElimination {
                    elimination: elimination.id,
                    account: elimination.debit_account.clone(),
                });
            }
        }

        for (account, balance) in balances {
            if account.starts_with(ASSET_PREFIX)
                && balance.consolidated_amount.is_sign_negative()
                && !balance.consolidated_amount.is_zero()
            {
                report.warnings.push(ValidationWarning::NegativeAssetBalance {
                    account: account.clone(),
                    amount: balance.consolidated_amount,
                });
            }

            if let Some(warning) = Self::check_materiality(balance, materiality) {
                report.warnings.push(warning);
            }
        }

        for valuation in valuations {
            if valuation.is_bargain_purchase() {
                report.warnings.push(ValidationWarning::BargainPurchase {
                    subsidiary: valuation.subsidiary,
                    goodwill: valuation.goodwill,
                });
            }
        }

        report
    }

    /// Warns when the consolidated amount diverges from the raw sum by more
    /// than the threshold percentage, on accounts above the materiality
    /// floor. Below the floor no warning is raised regardless of
    /// percentage, to avoid noise on immaterial accounts.
    fn check_materiality(
        balance: &ConsolidatedBalance,
        materiality: &MaterialityConfig,
    ) -> Option<ValidationWarning> {
        let raw_sum = balance.raw_sum();
        let base = raw_sum.abs();
        if base <= materiality.floor {
            return None;
        }

        let divergence = (balance.consolidated_amount - raw_sum).abs();
        let threshold = base * materiality.threshold_pct / Decimal::ONE_HUNDRED;
        if divergence <= threshold {
            return None;
        }

        Some(ValidationWarning::MaterialVariance {
            account: balance.account_code.clone(),
            consolidated: balance.consolidated_amount,
            raw_sum,
            variance_pct: divergence / base * Decimal::ONE_HUNDRED,
        })
    }
}
