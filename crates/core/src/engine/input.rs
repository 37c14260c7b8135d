//! Consolidation run input and per-record screening.

use chrono::NaiveDate;
use gruppo_shared::types::{
    approx_eq, IntercompanyTransactionId, OwnershipRecordId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consolidation::AccountBalance;
use crate::entity::OwnershipRecord;
use crate::fiscal::ReportingPeriod;
use crate::intercompany::IntercompanyTransaction;
use crate::journal::{AdjustmentInput, EntryType};

/// Everything the engine needs for one consolidation run, supplied wholly
/// up front by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidationInput {
    /// The reporting period being consolidated.
    pub period: ReportingPeriod,
    /// Date used for ownership active-record selection and journal dating.
    /// Passed explicitly so runs are reproducible.
    pub as_of: NaiveDate,
    /// Per-entity account balances for the period.
    pub balances: Vec<AccountBalance>,
    /// Ownership records for the group.
    pub ownership_records: Vec<OwnershipRecord>,
    /// Intercompany transactions for the period.
    pub transactions: Vec<IntercompanyTransaction>,
    /// Caller-prepared ownership/NCI adjustments.
    pub ownership_adjustments: Vec<AdjustmentInput>,
    /// Caller-prepared goodwill adjustments.
    pub goodwill_adjustments: Vec<AdjustmentInput>,
}

/// Why an input record was excluded from the run.
///
/// Screening fails fast per record: the offending record is skipped and
/// reported, and the remaining well-formed records are still processed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum InputError {
    /// Ownership percentage outside [0, 100].
    #[error("Ownership record {record}: percentage {pct} outside [0, 100]")]
    OwnershipOutOfRange {
        /// The offending record.
        record: OwnershipRecordId,
        /// The percentage supplied.
        pct: Decimal,
    },

    /// A transaction whose entity and counterparty are the same.
    #[error("Transaction {transaction}: entity and counterparty are the same")]
    SameEntityTransaction {
        /// The offending transaction.
        transaction: IntercompanyTransactionId,
    },

    /// A transaction with a nil entity or counterparty identifier.
    #[error("Transaction {transaction}: missing entity or counterparty identifier")]
    MissingParty {
        /// The offending transaction.
        transaction: IntercompanyTransactionId,
    },

    /// A transaction with a blank account code on either side.
    #[error("Transaction {transaction}: blank account code")]
    BlankAccountCode {
        /// The offending transaction.
        transaction: IntercompanyTransactionId,
    },

    /// An ownership record with a zero stake; it cannot be valued, though
    /// it still participates in balance weighting.
    #[error("Ownership record {record}: zero ownership cannot be valued")]
    ZeroOwnership {
        /// The offending record.
        record: OwnershipRecordId,
    },

    /// A caller-prepared adjustment with no entries.
    #[error("Adjustment '{description}' has no entries")]
    EmptyAdjustment {
        /// The adjustment's description.
        description: String,
    },

    /// A caller-prepared adjustment whose entries do not balance.
    #[error("Adjustment '{description}' is not balanced. Debit: {debit}, Credit: {credit}")]
    UnbalancedAdjustment {
        /// The adjustment's description.
        description: String,
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },
}

impl InputError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::OwnershipOutOfRange { .. } => "OWNERSHIP_OUT_OF_RANGE",
            Self::ZeroOwnership { .. } => "ZERO_OWNERSHIP",
            Self::SameEntityTransaction { .. } => "SAME_ENTITY_TRANSACTION",
            Self::MissingParty { .. } => "MISSING_PARTY",
            Self::BlankAccountCode { .. } => "BLANK_ACCOUNT_CODE",
            Self::EmptyAdjustment { .. } => "EMPTY_ADJUSTMENT",
            Self::UnbalancedAdjustment { .. } => "UNBALANCED_ADJUSTMENT",
        }
    }
}

/// Partitions ownership records into well-formed and skipped.
pub(crate) fn screen_ownership_records(
    records: Vec<OwnershipRecord>,
    skipped: &mut Vec<InputError>,
) -> Vec<OwnershipRecord> {
    records
        .into_iter()
        .filter(|record| {
            let in_range = record.ownership_pct >= Decimal::ZERO
                && record.ownership_pct <= Decimal::ONE_HUNDRED;
            if !in_range {
                skipped.push(InputError::OwnershipOutOfRange {
                    record: record.id,
                    pct: record.ownership_pct,
                });
            }
            in_range
        })
        .collect()
}

/// Partitions transactions into well-formed and skipped.
pub(crate) fn screen_transactions(
    transactions: Vec<IntercompanyTransaction>,
    skipped: &mut Vec<InputError>,
) -> Vec<IntercompanyTransaction> {
    transactions
        .into_iter()
        .filter(|tx| match screen_transaction(tx) {
            Some(error) => {
                skipped.push(error);
                false
            }
            None => true,
        })
        .collect()
}

fn screen_transaction(tx: &IntercompanyTransaction) -> Option<InputError> {
    if tx.entity.into_inner().is_nil() || tx.counterparty.into_inner().is_nil() {
        return Some(InputError::MissingParty { transaction: tx.id });
    }
    if tx.entity == tx.counterparty {
        return Some(InputError::SameEntityTransaction { transaction: tx.id });
    }
    if tx.entity_account.trim().is_empty() || tx.counterparty_account.trim().is_empty() {
        return Some(InputError::BlankAccountCode { transaction: tx.id });
    }
    None
}

/// Partitions adjustments into well-formed and skipped.
pub(crate) fn screen_adjustments(
    adjustments: Vec<AdjustmentInput>,
    skipped: &mut Vec<InputError>,
) -> Vec<AdjustmentInput> {
    adjustments
        .into_iter()
        .filter(|adjustment| match screen_adjustment(adjustment) {
            Some(error) => {
                skipped.push(error);
                false
            }
            None => true,
        })
        .collect()
}

fn screen_adjustment(adjustment: &AdjustmentInput) -> Option<InputError> {
    if adjustment.entries.is_empty() {
        return Some(InputError::EmptyAdjustment {
            description: adjustment.description.clone(),
        });
    }

    let mut debit = Decimal::ZERO;
    let mut credit = Decimal::ZERO;
    for entry in &adjustment.entries {
        match entry.entry_type {
            EntryType::Debit => debit += entry.amount,
            EntryType::Credit => credit += entry.amount,
        }
    }
    if !approx_eq(debit, credit) {
        return Some(InputError::UnbalancedAdjustment {
            description: adjustment.description.clone(),
            debit,
            credit,
        });
    }
    None
}
