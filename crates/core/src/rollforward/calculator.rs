//! Roll-forward calculation.

use std::collections::BTreeMap;

use gruppo_shared::types::EntityId;
use rust_decimal::Decimal;

use crate::consolidation::AccountBalance;

use super::types::{RollForwardEntry, RollForwardStatus};

/// Key of a roll-forward entry: the (entity, account) pair.
pub type RollForwardKey = (EntityId, String);

/// Computes period-over-period account movement from two balance snapshots.
pub struct RollForwardCalculator;

impl RollForwardCalculator {
    /// Produces one entry per (entity, account) present in either snapshot.
    ///
    /// Opening is the prior period total, closing the current period total,
    /// movement the difference. An account present in only one snapshot has
    /// a zero balance on the missing side; this is expected, not an error.
    /// Multiple rows for the same (entity, account) within a snapshot are
    /// summed.
    #[must_use]
    pub fn roll_forward(
        current: &[AccountBalance],
        prior: &[AccountBalance],
    ) -> BTreeMap<RollForwardKey, RollForwardEntry> {
        let current_totals = Self::totals(current);
        let prior_totals = Self::totals(prior);

        let mut keys: Vec<&RollForwardKey> = current_totals.keys().collect();
        keys.extend(prior_totals.keys());

        keys.into_iter()
            .map(|key| {
                let opening = prior_totals.get(key).copied().unwrap_or(Decimal::ZERO);
                let closing = current_totals.get(key).copied().unwrap_or(Decimal::ZERO);
                let entry = RollForwardEntry {
                    entity: key.0,
                    account_code: key.1.clone(),
                    opening,
                    movements: closing - opening,
                    adjustments: Decimal::ZERO,
                    eliminations: Decimal::ZERO,
                    closing,
                    status: RollForwardStatus::Pending,
                };
                (key.clone(), entry)
            })
            .collect()
    }

    fn totals(balances: &[AccountBalance]) -> BTreeMap<RollForwardKey, Decimal> {
        let mut totals: BTreeMap<RollForwardKey, Decimal> = BTreeMap::new();
        for balance in balances {
            *totals
                .entry((balance.entity, balance.account_code.clone()))
                .or_default() += balance.amount;
        }
        totals
    }
}
