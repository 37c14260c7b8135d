//! First-fit intercompany elimination matching.

use gruppo_shared::types::EliminationId;
use serde::{Deserialize, Serialize};

use super::types::{Elimination, IntercompanyTransaction, MatchStatus};

/// Result of a matching pass over one period's transactions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Eliminations produced from matched pairs.
    pub eliminations: Vec<Elimination>,
    /// Transactions consumed by a match, with status set to `matched`.
    pub matched: Vec<IntercompanyTransaction>,
    /// Candidate transactions for which no offsetting leg was found.
    pub unmatched: Vec<IntercompanyTransaction>,
    /// Transactions excluded from matching by user override, passed through
    /// untouched.
    pub excluded: Vec<IntercompanyTransaction>,
}

/// Pairs offsetting intercompany transactions and emits eliminations.
///
/// The scan is first-fit, not best-fit: each not-yet-matched transaction is
/// paired with the first later transaction satisfying the candidate-pair
/// predicate, so ties among multiple candidates are resolved by transaction
/// order. Input order must be preserved by callers to get reproducible
/// results for the same input set. O(n^2) in transaction count per period;
/// intercompany volume per period is expected to be small.
pub struct EliminationMatcher;

impl EliminationMatcher {
    /// Runs the matching scan over one (period, year)'s transactions.
    #[must_use]
    pub fn match_transactions(transactions: &[IntercompanyTransaction]) -> MatchOutcome {
        let mut outcome = MatchOutcome::default();
        let mut consumed = vec![false; transactions.len()];

        for (i, tx) in transactions.iter().enumerate() {
            if consumed[i] || !tx.eliminate.allows_matching() {
                continue;
            }

            let partner = transactions
                .iter()
                .enumerate()
                .skip(i + 1)
                .find(|(j, candidate)| {
                    !consumed[*j]
                        && candidate.eliminate.allows_matching()
                        && tx.is_candidate_pair(candidate)
                });

            if let Some((j, candidate)) = partner {
                consumed[i] = true;
                consumed[j] = true;

                outcome
                    .eliminations
                    .push(Self::eliminate_pair(tx, candidate));
                outcome.matched.push(Self::mark_matched(tx));
                outcome.matched.push(Self::mark_matched(candidate));
            }
        }

        for (i, tx) in transactions.iter().enumerate() {
            if consumed[i] {
                continue;
            }
            if tx.eliminate.allows_matching() {
                outcome.unmatched.push(tx.clone());
            } else {
                outcome.excluded.push(tx.clone());
            }
        }

        outcome
    }

    /// Builds the elimination for a matched pair.
    ///
    /// The amount is the minimum of the two entity-side amounts: taking the
    /// minimum rather than either raw amount prevents over-elimination when
    /// the two legs were entered with small recording differences.
    fn eliminate_pair(
        first: &IntercompanyTransaction,
        second: &IntercompanyTransaction,
    ) -> Elimination {
        Elimination {
            id: EliminationId::new(),
            category: first.category,
            debit_account: first.entity_account.clone(),
            credit_account: second.entity_account.clone(),
            amount: first.entity_amount.min(second.entity_amount),
            entity: first.entity,
            counterparty: first.counterparty,
            source_transactions: vec![first.id, second.id],
        }
    }

    fn mark_matched(tx: &IntercompanyTransaction) -> IntercompanyTransaction {
        IntercompanyTransaction {
            status: MatchStatus::Matched,
            ..tx.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fiscal::ReportingPeriod;
    use crate::intercompany::types::{EliminationOverride, TransactionCategory};
    use chrono::NaiveDate;
    use gruppo_shared::types::{Currency, EntityId, IntercompanyTransactionId};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn make_leg(
        entity: EntityId,
        counterparty: EntityId,
        category: TransactionCategory,
        amount: Decimal,
        account: &str,
    ) -> IntercompanyTransaction {
        IntercompanyTransaction {
            id: IntercompanyTransactionId::new(),
            entity,
            counterparty,
            entity_account: account.to_string(),
            counterparty_account: "2100".to_string(),
            category,
            entity_amount: amount,
            counterparty_amount: amount,
            currency: Currency::Usd,
            transaction_date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
            period: ReportingPeriod::new(2026, 3),
            eliminate: EliminationOverride::Yes,
            status: MatchStatus::Pending,
        }
    }

    #[test]
    fn test_single_pair_single_elimination() {
        let a = EntityId::new();
        let b = EntityId::new();
        let transactions = vec![
            make_leg(a, b, TransactionCategory::Loan, dec!(10000), "1200"),
            make_leg(b, a, TransactionCategory::Loan, dec!(10000), "2100"),
        ];

        let outcome = EliminationMatcher::match_transactions(&transactions);

        assert_eq!(outcome.eliminations.len(), 1);
        assert_eq!(outcome.eliminations[0].amount, dec!(10000));
        assert_eq!(outcome.eliminations[0].debit_account, "1200");
        assert_eq!(outcome.eliminations[0].credit_account, "2100");
        assert_eq!(outcome.eliminations[0].source_transactions.len(), 2);
        assert_eq!(outcome.matched.len(), 2);
        assert!(outcome.unmatched.is_empty());
        assert!(outcome.excluded.is_empty());
    }

    #[test]
    fn test_matched_status_updated() {
        let a = EntityId::new();
        let b = EntityId::new();
        let transactions = vec![
            make_leg(a, b, TransactionCategory::Loan, dec!(10000), "1200"),
            make_leg(b, a, TransactionCategory::Loan, dec!(10000), "2100"),
        ];

        let outcome = EliminationMatcher::match_transactions(&transactions);

        assert!(outcome
            .matched
            .iter()
            .all(|tx| tx.status == MatchStatus::Matched));
    }

    #[test]
    fn test_recording_difference_takes_minimum() {
        let a = EntityId::new();
        let b = EntityId::new();
        let transactions = vec![
            make_leg(a, b, TransactionCategory::Service, dec!(5000.004), "6100"),
            make_leg(b, a, TransactionCategory::Service, dec!(5000.00), "4200"),
        ];

        let outcome = EliminationMatcher::match_transactions(&transactions);

        assert_eq!(outcome.eliminations.len(), 1);
        assert_eq!(outcome.eliminations[0].amount, dec!(5000.00));
    }

    #[test]
    fn test_category_mismatch_leaves_unmatched() {
        let a = EntityId::new();
        let b = EntityId::new();
        let transactions = vec![
            make_leg(a, b, TransactionCategory::Payable, dec!(10000), "2100"),
            make_leg(b, a, TransactionCategory::Receivable, dec!(10000), "1200"),
        ];

        let outcome = EliminationMatcher::match_transactions(&transactions);

        assert!(outcome.eliminations.is_empty());
        assert_eq!(outcome.unmatched.len(), 2);
    }

    #[test]
    fn test_override_excluded_from_matching() {
        let a = EntityId::new();
        let b = EntityId::new();
        let mut flagged = make_leg(a, b, TransactionCategory::Loan, dec!(10000), "1200");
        flagged.eliminate = EliminationOverride::No;
        let transactions = vec![
            flagged,
            make_leg(b, a, TransactionCategory::Loan, dec!(10000), "2100"),
        ];

        let outcome = EliminationMatcher::match_transactions(&transactions);

        assert!(outcome.eliminations.is_empty());
        assert_eq!(outcome.excluded.len(), 1);
        assert_eq!(outcome.unmatched.len(), 1);
        // Pass-through legs keep their original status.
        assert_eq!(outcome.excluded[0].status, MatchStatus::Pending);
    }

    #[test]
    fn test_first_fit_resolves_ties_by_order() {
        let a = EntityId::new();
        let b = EntityId::new();
        let first_partner = make_leg(b, a, TransactionCategory::Loan, dec!(10000), "2100");
        let second_partner = make_leg(b, a, TransactionCategory::Loan, dec!(10000), "2200");
        let transactions = vec![
            make_leg(a, b, TransactionCategory::Loan, dec!(10000), "1200"),
            first_partner.clone(),
            second_partner.clone(),
        ];

        let outcome = EliminationMatcher::match_transactions(&transactions);

        assert_eq!(outcome.eliminations.len(), 1);
        assert_eq!(
            outcome.eliminations[0].source_transactions,
            vec![transactions[0].id, first_partner.id]
        );
        assert_eq!(outcome.unmatched.len(), 1);
        assert_eq!(outcome.unmatched[0].id, second_partner.id);
    }

    #[test]
    fn test_empty_input() {
        let outcome = EliminationMatcher::match_transactions(&[]);
        assert!(outcome.eliminations.is_empty());
        assert!(outcome.matched.is_empty());
        assert!(outcome.unmatched.is_empty());
        assert!(outcome.excluded.is_empty());
    }
}
