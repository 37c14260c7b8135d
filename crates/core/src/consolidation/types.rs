//! Consolidation domain types.

use std::collections::BTreeMap;

use gruppo_shared::types::{round_reporting, EliminationId, EntityId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fiscal::ReportingPeriod;

/// A single per-entity account balance, the atomic unit the consolidator
/// aggregates over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// The entity holding the balance.
    pub entity: EntityId,
    /// Account code in the group chart of accounts.
    pub account_code: String,
    /// Balance amount.
    pub amount: Decimal,
    /// Reporting period the balance belongs to.
    pub period: ReportingPeriod,
}

/// The consolidated position of one account across the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedBalance {
    /// Account code.
    pub account_code: String,
    /// Raw (unweighted) amount from parent and fully-included entities.
    pub parent_amount: Decimal,
    /// Raw (unweighted) amounts per subsidiary, for audit and drill-down.
    pub subsidiary_amounts: BTreeMap<EntityId, Decimal>,
    /// Final consolidated amount after ownership weighting and elimination
    /// adjustment.
    pub consolidated_amount: Decimal,
    /// Eliminations that touched this account.
    pub eliminations: Vec<EliminationId>,
}

impl ConsolidatedBalance {
    /// Simple sum of the raw parent and subsidiary amounts, before
    /// weighting and eliminations. Used by the materiality check.
    #[must_use]
    pub fn raw_sum(&self) -> Decimal {
        self.parent_amount + self.subsidiary_amounts.values().copied().sum::<Decimal>()
    }

    /// Returns a copy with monetary fields rounded for external reporting.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            account_code: self.account_code.clone(),
            parent_amount: round_reporting(self.parent_amount),
            subsidiary_amounts: self
                .subsidiary_amounts
                .iter()
                .map(|(entity, amount)| (*entity, round_reporting(*amount)))
                .collect(),
            consolidated_amount: round_reporting(self.consolidated_amount),
            eliminations: self.eliminations.clone(),
        }
    }
}
