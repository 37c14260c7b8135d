//! Intercompany transaction domain types.

use chrono::NaiveDate;
use gruppo_shared::types::{
    approx_eq, Currency, EliminationId, EntityId, IntercompanyTransactionId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fiscal::ReportingPeriod;

/// Category of an intercompany transaction.
///
/// Matching requires an exact category match: a receivable is not treated
/// as the inverse of a payable. Offsetting legs of one economic event carry
/// the same category with entity and counterparty swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionCategory {
    /// Amount owed to the entity.
    Receivable,
    /// Amount owed by the entity.
    Payable,
    /// Intercompany loan.
    Loan,
    /// Intercompany dividend.
    Dividend,
    /// Intercompany service charge.
    Service,
    /// Anything else.
    Other,
}

impl std::fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Receivable => write!(f, "receivable"),
            Self::Payable => write!(f, "payable"),
            Self::Loan => write!(f, "loan"),
            Self::Dividend => write!(f, "dividend"),
            Self::Service => write!(f, "service"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Reconciliation status of an intercompany transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    /// Not yet matched.
    Pending,
    /// Matched against a counterparty leg by the engine.
    Matched,
    /// Reconciled by a user.
    Reconciled,
    /// Approved for posting.
    Approved,
}

/// User override controlling whether a transaction participates in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EliminationOverride {
    /// Eligible for elimination matching (default).
    Yes,
    /// Excluded from matching entirely; passes through untouched.
    No,
}

impl EliminationOverride {
    /// Returns true if the transaction may participate in matching.
    #[must_use]
    pub fn allows_matching(self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// A transaction recorded between two related entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntercompanyTransaction {
    /// Unique identifier.
    pub id: IntercompanyTransactionId,
    /// The entity on whose books this leg is recorded.
    pub entity: EntityId,
    /// The related entity on the other side.
    pub counterparty: EntityId,
    /// Account code on the entity's books.
    pub entity_account: String,
    /// Account code on the counterparty's books.
    pub counterparty_account: String,
    /// Transaction category.
    pub category: TransactionCategory,
    /// Amount as recorded by the entity.
    pub entity_amount: Decimal,
    /// Amount as recorded by the counterparty.
    pub counterparty_amount: Decimal,
    /// Transaction currency.
    pub currency: Currency,
    /// Date of the transaction.
    pub transaction_date: NaiveDate,
    /// Reporting period the transaction belongs to.
    pub period: ReportingPeriod,
    /// User override for elimination matching.
    pub eliminate: EliminationOverride,
    /// Reconciliation status.
    pub status: MatchStatus,
}

impl IntercompanyTransaction {
    /// Returns true if `other` is the offsetting leg of this transaction:
    /// entity and counterparty swapped, identical category, and entity-side
    /// amounts equal within the group tolerance.
    #[must_use]
    pub fn is_candidate_pair(&self, other: &Self) -> bool {
        self.entity == other.counterparty
            && self.counterparty == other.entity
            && self.category == other.category
            && approx_eq(self.entity_amount, other.entity_amount)
    }
}

/// An elimination produced from one or two matched intercompany legs.
///
/// Immutable once created within a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Elimination {
    /// Unique identifier.
    pub id: EliminationId,
    /// Category of the eliminated transaction.
    pub category: TransactionCategory,
    /// Account reduced by the elimination.
    pub debit_account: String,
    /// Account increased back by the elimination.
    pub credit_account: String,
    /// Eliminated amount.
    pub amount: Decimal,
    /// Entity side of the eliminated balance.
    pub entity: EntityId,
    /// Counterparty side of the eliminated balance.
    pub counterparty: EntityId,
    /// The one or two source transactions that generated this elimination.
    pub source_transactions: Vec<IntercompanyTransactionId>,
}

impl Elimination {
    /// Returns true if the elimination nets an account against itself,
    /// which is structurally meaningless and reported as a validation error.
    #[must_use]
    pub fn is_self_elimination(&self) -> bool {
        self.debit_account == self.credit_account
    }

    /// Human-readable summary used in generated journal descriptions.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "Intercompany {} elimination: {} / {} for {}",
            self.category, self.debit_account, self.credit_account, self.amount
        )
    }
}
