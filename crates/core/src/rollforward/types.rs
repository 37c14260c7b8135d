//! Roll-forward domain types.

use gruppo_shared::types::EntityId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Workflow status of a roll-forward entry.
///
/// Set by the caller, never computed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollForwardStatus {
    /// Freshly computed, awaiting review.
    Pending,
    /// Under review.
    Review,
    /// Signed off.
    Finalized,
}

/// Reconciliation of one (entity, account) balance from opening to closing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollForwardEntry {
    /// The entity holding the balance.
    pub entity: EntityId,
    /// Account code.
    pub account_code: String,
    /// Opening balance (prior period closing).
    pub opening: Decimal,
    /// Explained movements during the period.
    pub movements: Decimal,
    /// Manual adjustments.
    pub adjustments: Decimal,
    /// Elimination effects.
    pub eliminations: Decimal,
    /// Closing balance; always `opening + movements + adjustments + eliminations`.
    pub closing: Decimal,
    /// Workflow status.
    pub status: RollForwardStatus,
}

impl RollForwardEntry {
    /// Returns true if the closing balance reconciles exactly to the sum of
    /// its components.
    #[must_use]
    pub fn identity_holds(&self) -> bool {
        self.closing == self.opening + self.movements + self.adjustments + self.eliminations
    }
}
