//! Balance consolidation service.

use std::collections::BTreeMap;

use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::entity::ActiveOwnership;
use crate::intercompany::Elimination;

use super::types::{AccountBalance, ConsolidatedBalance};

/// Aggregates entity balances into group balances.
///
/// Stateless; eliminations must be fully computed before consolidation
/// begins. Given identical inputs in identical order the output map is
/// identical every run.
pub struct Consolidator;

impl Consolidator {
    /// Consolidates one period's balances into per-account group totals.
    ///
    /// Balances are grouped by account code. Each row is weighted by the
    /// entity's ownership percentage if the entity is a subsidiary under an
    /// active ownership record; parent entities and entities in no record
    /// are fully included. Eliminations are then applied per account: a
    /// matching debit account reduces the total, a matching credit account
    /// adds back, mirroring double-entry removal of the intercompany
    /// balance.
    #[must_use]
    pub fn consolidate(
        balances: &[AccountBalance],
        ownership: &ActiveOwnership<'_>,
        eliminations: &[Elimination],
    ) -> BTreeMap<String, ConsolidatedBalance> {
        Self::group_by_account(balances)
            .into_iter()
            .map(|(code, rows)| {
                let consolidated = Self::consolidate_account(&code, &rows, ownership, eliminations);
                (code, consolidated)
            })
            .collect()
    }

    /// Parallel variant of [`Consolidator::consolidate`].
    ///
    /// Per-account work is independent, so accounts are fanned out across
    /// the rayon pool. Output is identical to the sequential path.
    #[must_use]
    pub fn consolidate_par(
        balances: &[AccountBalance],
        ownership: &ActiveOwnership<'_>,
        eliminations: &[Elimination],
    ) -> BTreeMap<String, ConsolidatedBalance> {
        Self::group_by_account(balances)
            .into_par_iter()
            .map(|(code, rows)| {
                let consolidated = Self::consolidate_account(&code, &rows, ownership, eliminations);
                (code, consolidated)
            })
            .collect()
    }

    /// Groups balances by account code, preserving input order within each
    /// group. First-come ordering matters for reproducibility.
    fn group_by_account(balances: &[AccountBalance]) -> BTreeMap<String, Vec<&AccountBalance>> {
        let mut grouped: BTreeMap<String, Vec<&AccountBalance>> = BTreeMap::new();
        for balance in balances {
            grouped
                .entry(balance.account_code.clone())
                .or_default()
                .push(balance);
        }
        grouped
    }

    fn consolidate_account(
        code: &str,
        rows: &[&AccountBalance],
        ownership: &ActiveOwnership<'_>,
        eliminations: &[Elimination],
    ) -> ConsolidatedBalance {
        let mut parent_amount = Decimal::ZERO;
        let mut subsidiary_amounts: BTreeMap<_, Decimal> = BTreeMap::new();
        let mut consolidated_amount = Decimal::ZERO;

        for row in rows {
            match ownership.record_for(row.entity) {
                Some(record) => {
                    *subsidiary_amounts.entry(row.entity).or_default() += row.amount;
                    consolidated_amount += row.amount * record.ownership_fraction();
                }
                None => {
                    // Parent or unowned entity: fully included.
                    parent_amount += row.amount;
                    consolidated_amount += row.amount;
                }
            }
        }

        let mut touched = Vec::new();
        for elimination in eliminations {
            let debit_hit = elimination.debit_account == code;
            let credit_hit = elimination.credit_account == code;

            if debit_hit {
                consolidated_amount -= elimination.amount;
            }
            if credit_hit {
                consolidated_amount += elimination.amount;
            }
            if debit_hit || credit_hit {
                touched.push(elimination.id);
            }
        }

        ConsolidatedBalance {
            account_code: code.to_string(),
            parent_amount,
            subsidiary_amounts,
            consolidated_amount,
            eliminations: touched,
        }
    }
}
