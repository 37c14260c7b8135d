//! Journal generation service.

use chrono::NaiveDate;
use gruppo_shared::types::{approx_eq, JournalEntryId, JournalId};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::fiscal::ReportingPeriod;
use crate::intercompany::Elimination;

use super::types::{AdjustmentInput, EntryType, Journal, JournalEntry, JournalType};

/// Errors that can occur during journal generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalError {
    /// A caller-prepared adjustment whose entries do not balance.
    /// The engine never emits an unbalanced journal.
    #[error("Adjustment '{description}' is not balanced. Debit: {debit}, Credit: {credit}")]
    UnbalancedAdjustment {
        /// The adjustment's description.
        description: String,
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },

    /// A caller-prepared adjustment with no entries.
    #[error("Adjustment '{description}' has no entries")]
    EmptyAdjustment {
        /// The adjustment's description.
        description: String,
    },
}

impl JournalError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnbalancedAdjustment { .. } => "UNBALANCED_ADJUSTMENT",
            Self::EmptyAdjustment { .. } => "EMPTY_ADJUSTMENT",
        }
    }
}

/// Generates journal numbers unique within a run.
///
/// Numbers are deterministic (`JE-{year}{period:02}-{seq:04}`) so that two
/// runs over the same inputs emit identical journals; uniqueness is only
/// guaranteed within one sequence.
#[derive(Debug)]
pub struct JournalNumberSequence {
    prefix: String,
    next: u32,
}

impl JournalNumberSequence {
    /// Creates a sequence for the given reporting period.
    #[must_use]
    pub fn new(period: ReportingPeriod) -> Self {
        Self {
            prefix: format!("JE-{}{:02}", period.year, period.period),
            next: 1,
        }
    }

    /// Returns the next journal number.
    pub fn next_number(&mut self) -> String {
        let number = format!("{}-{:04}", self.prefix, self.next);
        self.next += 1;
        number
    }
}

/// Renders eliminations and caller-prepared adjustments into balanced
/// journals. Produces its output list and nothing else; persistence is the
/// caller's concern.
pub struct JournalGenerator;

impl JournalGenerator {
    /// Generates one journal per elimination and per adjustment.
    ///
    /// # Errors
    ///
    /// Returns `JournalError` if any caller-prepared adjustment is empty or
    /// does not balance within the group tolerance.
    pub fn generate(
        eliminations: &[Elimination],
        ownership_adjustments: &[AdjustmentInput],
        goodwill_adjustments: &[AdjustmentInput],
        run_date: NaiveDate,
        period: ReportingPeriod,
    ) -> Result<Vec<Journal>, JournalError> {
        let mut sequence = JournalNumberSequence::new(period);
        let mut journals =
            Vec::with_capacity(eliminations.len() + ownership_adjustments.len() + goodwill_adjustments.len());

        for elimination in eliminations {
            journals.push(Self::elimination_journal(elimination, run_date, &mut sequence));
        }
        for adjustment in ownership_adjustments {
            journals.push(Self::adjustment_journal(
                adjustment,
                JournalType::OwnershipAdjustment,
                run_date,
                &mut sequence,
            )?);
        }
        for adjustment in goodwill_adjustments {
            journals.push(Self::adjustment_journal(
                adjustment,
                JournalType::GoodwillAdjustment,
                run_date,
                &mut sequence,
            )?);
        }

        Ok(journals)
    }

    /// An elimination journal is balanced by construction: one debit and
    /// one credit for the same amount.
    fn elimination_journal(
        elimination: &Elimination,
        run_date: NaiveDate,
        sequence: &mut JournalNumberSequence,
    ) -> Journal {
        let entries = vec![
            JournalEntry {
                id: JournalEntryId::new(),
                account_code: elimination.debit_account.clone(),
                entity: elimination.entity,
                entry_type: EntryType::Debit,
                amount: elimination.amount,
                description: None,
            },
            JournalEntry {
                id: JournalEntryId::new(),
                account_code: elimination.credit_account.clone(),
                entity: elimination.counterparty,
                entry_type: EntryType::Credit,
                amount: elimination.amount,
                description: None,
            },
        ];

        Journal {
            id: JournalId::new(),
            number: sequence.next_number(),
            date: run_date,
            description: elimination.describe(),
            journal_type: JournalType::IcElimination,
            entries,
        }
    }

    fn adjustment_journal(
        adjustment: &AdjustmentInput,
        journal_type: JournalType,
        run_date: NaiveDate,
        sequence: &mut JournalNumberSequence,
    ) -> Result<Journal, JournalError> {
        if adjustment.entries.is_empty() {
            return Err(JournalError::EmptyAdjustment {
                description: adjustment.description.clone(),
            });
        }

        let mut debit = Decimal::ZERO;
        let mut credit = Decimal::ZERO;
        let entries: Vec<JournalEntry> = adjustment
            .entries
            .iter()
            .map(|entry| {
                match entry.entry_type {
                    EntryType::Debit => debit += entry.amount,
                    EntryType::Credit => credit += entry.amount,
                }
                JournalEntry {
                    id: JournalEntryId::new(),
                    account_code: entry.account_code.clone(),
                    entity: entry.entity,
                    entry_type: entry.entry_type,
                    amount: entry.amount,
                    description: entry.description.clone(),
                }
            })
            .collect();

        if !approx_eq(debit, credit) {
            return Err(JournalError::UnbalancedAdjustment {
                description: adjustment.description.clone(),
                debit,
                credit,
            });
        }

        Ok(Journal {
            id: JournalId::new(),
            number: sequence.next_number(),
            date: run_date,
            description: adjustment.description.clone(),
            journal_type,
            entries,
        })
    }
}
