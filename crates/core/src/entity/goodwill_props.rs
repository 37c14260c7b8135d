//! Property-based tests for the ownership & goodwill calculator.

use chrono::NaiveDate;
use gruppo_shared::types::{EntityId, OwnershipRecordId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::OwnershipError;
use super::goodwill::OwnershipCalculator;
use super::types::{GoodwillMethod, OwnershipRecord, OwnershipRelation};

/// Strategy for ownership percentages in [0, 100] with two decimals.
fn pct_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|basis_points| Decimal::new(basis_points, 2))
}

/// Strategy for positive monetary amounts up to 10,000,000.00.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn make_record(
    pct: Decimal,
    fair_value: Decimal,
    consideration: Decimal,
    method: GoodwillMethod,
) -> OwnershipRecord {
    OwnershipRecord {
        id: OwnershipRecordId::new(),
        parent: EntityId::new(),
        subsidiary: EntityId::new(),
        ownership_pct: pct,
        fair_value_net_assets: fair_value,
        consideration,
        method,
        relation: OwnershipRelation::Subsidiary,
        effective_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        valid_to: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For all ownership percentages p in [0, 100], NCI(p) + p == 100.
    #[test]
    fn prop_nci_complement(pct in pct_strategy()) {
        let nci = OwnershipCalculator::nci_percentage(pct).unwrap();
        prop_assert_eq!(nci + pct, Decimal::ONE_HUNDRED);
    }

    /// Percentages outside [0, 100] are always rejected.
    #[test]
    fn prop_out_of_range_rejected(excess in 1i64..1_000_000i64) {
        let above = Decimal::ONE_HUNDRED + Decimal::new(excess, 2);
        let below = -Decimal::new(excess, 2);

        let above_rejected = matches!(
            OwnershipCalculator::nci_percentage(above),
            Err(OwnershipError::OwnershipOutOfRange { .. })
        );
        prop_assert!(above_rejected);
        let below_rejected = matches!(
            OwnershipCalculator::nci_percentage(below),
            Err(OwnershipError::OwnershipOutOfRange { .. })
        );
        prop_assert!(below_rejected);
    }

    /// At 100% ownership the partial and full methods agree: there is no
    /// NCI left to differ over.
    #[test]
    fn prop_method_boundary_at_full_ownership(
        fair_value in amount_strategy(),
        consideration in amount_strategy(),
    ) {
        let partial = OwnershipCalculator::value_acquisition(&make_record(
            Decimal::ONE_HUNDRED,
            fair_value,
            consideration,
            GoodwillMethod::Partial,
        ))
        .unwrap();
        let full = OwnershipCalculator::value_acquisition(&make_record(
            Decimal::ONE_HUNDRED,
            fair_value,
            consideration,
            GoodwillMethod::Full,
        ))
        .unwrap();

        prop_assert_eq!(partial.goodwill, full.goodwill);
        prop_assert_eq!(partial.parent_goodwill, full.parent_goodwill);
        prop_assert_eq!(partial.nci_goodwill, Decimal::ZERO);
        prop_assert_eq!(full.nci_goodwill, Decimal::ZERO);
        prop_assert_eq!(full.nci_value, Decimal::ZERO);
    }

    /// Under the full method the parent and NCI splits always reconcile to
    /// the total goodwill.
    #[test]
    fn prop_full_method_split_reconciles(
        basis_points in 1i64..=10_000i64,
        fair_value in amount_strategy(),
        consideration in amount_strategy(),
    ) {
        let pct = Decimal::new(basis_points, 2);
        let valuation = OwnershipCalculator::value_acquisition(&make_record(
            pct,
            fair_value,
            consideration,
            GoodwillMethod::Full,
        ))
        .unwrap();

        prop_assert_eq!(
            valuation.parent_goodwill + valuation.nci_goodwill,
            valuation.goodwill
        );
    }

    /// The partial method never allocates goodwill to NCI.
    #[test]
    fn prop_partial_method_nci_goodwill_zero(
        basis_points in 1i64..=10_000i64,
        fair_value in amount_strategy(),
        consideration in amount_strategy(),
    ) {
        let pct = Decimal::new(basis_points, 2);
        let valuation = OwnershipCalculator::value_acquisition(&make_record(
            pct,
            fair_value,
            consideration,
            GoodwillMethod::Partial,
        ))
        .unwrap();

        prop_assert_eq!(valuation.nci_goodwill, Decimal::ZERO);
        prop_assert_eq!(valuation.parent_goodwill, valuation.goodwill);
    }
}
