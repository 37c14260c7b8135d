//! Property-based tests for the elimination matcher.

use chrono::NaiveDate;
use gruppo_shared::types::{Currency, EntityId, IntercompanyTransactionId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::fiscal::ReportingPeriod;

use super::matcher::EliminationMatcher;
use super::types::{
    EliminationOverride, IntercompanyTransaction, MatchStatus, TransactionCategory,
};

fn category_strategy() -> impl Strategy<Value = TransactionCategory> {
    prop_oneof![
        Just(TransactionCategory::Receivable),
        Just(TransactionCategory::Payable),
        Just(TransactionCategory::Loan),
        Just(TransactionCategory::Dividend),
        Just(TransactionCategory::Service),
        Just(TransactionCategory::Other),
    ]
}

/// A pool of four entity ids so that generated transactions actually
/// produce matchable pairs.
fn entity_pool() -> [EntityId; 4] {
    [1u128, 2, 3, 4].map(|n| EntityId::from_uuid(Uuid::from_u128(n)))
}

fn transaction_strategy() -> impl Strategy<Value = IntercompanyTransaction> {
    (
        0usize..4,
        0usize..4,
        category_strategy(),
        1i64..10_000_000i64,
        prop::bool::weighted(0.9),
    )
        .prop_map(|(entity_ix, counterparty_ix, category, cents, allow)| {
            let pool = entity_pool();
            let counterparty_ix = if entity_ix == counterparty_ix {
                (counterparty_ix + 1) % 4
            } else {
                counterparty_ix
            };
            IntercompanyTransaction {
                id: IntercompanyTransactionId::new(),
                entity: pool[entity_ix],
                counterparty: pool[counterparty_ix],
                entity_account: format!("1{entity_ix}00"),
                counterparty_account: format!("2{counterparty_ix}00"),
                category,
                entity_amount: Decimal::new(cents, 2),
                counterparty_amount: Decimal::new(cents, 2),
                currency: Currency::Usd,
                transaction_date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
                period: ReportingPeriod::new(2026, 3),
                eliminate: if allow {
                    EliminationOverride::Yes
                } else {
                    EliminationOverride::No
                },
                status: MatchStatus::Pending,
            }
        })
}

fn transactions_strategy(max_len: usize) -> impl Strategy<Value = Vec<IntercompanyTransaction>> {
    prop::collection::vec(transaction_strategy(), 0..=max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Identical input collections (same order) produce identical output
    /// every run.
    #[test]
    fn prop_matching_is_deterministic(transactions in transactions_strategy(30)) {
        let first = EliminationMatcher::match_transactions(&transactions);
        let second = EliminationMatcher::match_transactions(&transactions);

        let pairs_first: Vec<_> = first
            .eliminations
            .iter()
            .map(|e| (e.source_transactions.clone(), e.amount))
            .collect();
        let pairs_second: Vec<_> = second
            .eliminations
            .iter()
            .map(|e| (e.source_transactions.clone(), e.amount))
            .collect();

        prop_assert_eq!(pairs_first, pairs_second);
        prop_assert_eq!(
            first.unmatched.iter().map(|t| t.id).collect::<Vec<_>>(),
            second.unmatched.iter().map(|t| t.id).collect::<Vec<_>>()
        );
    }

    /// Every elimination's amount is at most the minimum of its source
    /// transactions' entity-side amounts.
    #[test]
    fn prop_elimination_conservation(transactions in transactions_strategy(30)) {
        let outcome = EliminationMatcher::match_transactions(&transactions);

        for elimination in &outcome.eliminations {
            let source_amounts: Vec<Decimal> = transactions
                .iter()
                .filter(|tx| elimination.source_transactions.contains(&tx.id))
                .map(|tx| tx.entity_amount)
                .collect();
            prop_assert_eq!(source_amounts.len(), 2);

            let min = source_amounts.iter().copied().min().unwrap();
            prop_assert!(elimination.amount <= min);
        }
    }

    /// Every transaction lands in exactly one bucket, and overridden
    /// transactions never match.
    #[test]
    fn prop_buckets_partition_input(transactions in transactions_strategy(30)) {
        let outcome = EliminationMatcher::match_transactions(&transactions);

        prop_assert_eq!(
            outcome.matched.len() + outcome.unmatched.len() + outcome.excluded.len(),
            transactions.len()
        );
        prop_assert_eq!(outcome.matched.len(), outcome.eliminations.len() * 2);

        for tx in &outcome.excluded {
            prop_assert_eq!(tx.eliminate, EliminationOverride::No);
        }
        for tx in &outcome.matched {
            prop_assert_eq!(tx.eliminate, EliminationOverride::Yes);
        }
    }

    /// Matched pairs really are candidate pairs.
    #[test]
    fn prop_matched_pairs_satisfy_predicate(transactions in transactions_strategy(30)) {
        let outcome = EliminationMatcher::match_transactions(&transactions);

        for elimination in &outcome.eliminations {
            let sources: Vec<_> = transactions
                .iter()
                .filter(|tx| elimination.source_transactions.contains(&tx.id))
                .collect();
            prop_assert_eq!(sources.len(), 2);
            prop_assert!(sources[0].is_candidate_pair(sources[1]));
        }
    }
}
