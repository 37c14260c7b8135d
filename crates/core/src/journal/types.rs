//! Journal domain types.

use chrono::NaiveDate;
use gruppo_shared::types::{approx_eq, EntityId, JournalEntryId, JournalId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Entry type: either Debit or Credit.
///
/// In double-entry bookkeeping:
/// - Debits increase asset/expense accounts, decrease liability/equity/revenue accounts
/// - Credits decrease asset/expense accounts, increase liability/equity/revenue accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Debit entry.
    Debit,
    /// Credit entry.
    Credit,
}

/// Classification of a generated journal by its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JournalType {
    /// Generated from an intercompany elimination.
    IcElimination,
    /// Generated from a caller-prepared ownership/NCI adjustment.
    OwnershipAdjustment,
    /// Generated from a caller-prepared goodwill adjustment.
    GoodwillAdjustment,
}

/// A single line in a generated journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier for this line.
    pub id: JournalEntryId,
    /// The account posted to.
    pub account_code: String,
    /// The entity the posting belongs to.
    pub entity: EntityId,
    /// Whether this is a debit or credit.
    pub entry_type: EntryType,
    /// Posting amount (always positive; direction comes from `entry_type`).
    pub amount: Decimal,
    /// Optional description for this line item.
    pub description: Option<String>,
}

impl JournalEntry {
    /// Returns the signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.entry_type {
            EntryType::Debit => self.amount,
            EntryType::Credit => -self.amount,
        }
    }
}

/// A generated journal.
///
/// Every journal the engine emits balances within the group tolerance;
/// the generator refuses to produce one that does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    /// Unique identifier.
    pub id: JournalId,
    /// Journal number, unique within a run.
    pub number: String,
    /// Posting date.
    pub date: NaiveDate,
    /// Description summarizing the journal's source.
    pub description: String,
    /// Classification by source.
    pub journal_type: JournalType,
    /// The double-entry lines.
    pub entries: Vec<JournalEntry>,
}

impl Journal {
    /// Sums of the debit and credit sides.
    #[must_use]
    pub fn totals(&self) -> (Decimal, Decimal) {
        let mut debit = Decimal::ZERO;
        let mut credit = Decimal::ZERO;
        for entry in &self.entries {
            match entry.entry_type {
                EntryType::Debit => debit += entry.amount,
                EntryType::Credit => credit += entry.amount,
            }
        }
        (debit, credit)
    }

    /// Returns true if debits equal credits within the group tolerance.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        let (debit, credit) = self.totals();
        approx_eq(debit, credit)
    }
}

/// One line of a caller-prepared adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentEntry {
    /// The account posted to.
    pub account_code: String,
    /// The entity the posting belongs to.
    pub entity: EntityId,
    /// Whether this is a debit or credit.
    pub entry_type: EntryType,
    /// Posting amount.
    pub amount: Decimal,
    /// Optional description for this line item.
    pub description: Option<String>,
}

/// A caller-prepared adjustment, typically built from a goodwill valuation
/// (e.g., one debit to "Investment in subsidiary" and one credit to "NCI").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentInput {
    /// Description of the adjustment's source.
    pub description: String,
    /// The double-entry lines; must balance within the group tolerance.
    pub entries: Vec<AdjustmentEntry>,
}
