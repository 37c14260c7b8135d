//! Group structure domain types.

use chrono::NaiveDate;
use gruppo_shared::types::{Currency, EntityId, OwnershipRecordId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of entity within the consolidation group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// The reporting parent of the group.
    Parent,
    /// A controlled subsidiary.
    Subsidiary,
    /// A jointly controlled entity.
    JointVenture,
    /// An entity over which the group has significant influence.
    Associate,
}

/// A legal entity within the consolidation group.
///
/// Entities are created and maintained by an external entity-management
/// collaborator; the engine only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Kind of entity.
    pub kind: EntityKind,
    /// Country of incorporation (ISO 3166 alpha-2).
    pub country: String,
    /// Functional currency.
    pub functional_currency: Currency,
}

/// Type of ownership relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipRelation {
    /// Parent controls the entity.
    Subsidiary,
    /// Joint control.
    JointVenture,
    /// Significant influence.
    Associate,
}

/// Goodwill measurement method at acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoodwillMethod {
    /// Goodwill attributed entirely to the parent; NCI carried at its
    /// proportionate share of net assets only.
    Partial,
    /// Goodwill split between parent and NCI in proportion to their
    /// percentages; NCI carrying value includes its goodwill share.
    Full,
}

/// An ownership stake of a parent entity in a subsidiary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnershipRecord {
    /// Unique identifier.
    pub id: OwnershipRecordId,
    /// The owning entity.
    pub parent: EntityId,
    /// The owned entity.
    pub subsidiary: EntityId,
    /// Ownership percentage, 0-100.
    pub ownership_pct: Decimal,
    /// Fair value of the subsidiary's identifiable net assets at acquisition.
    pub fair_value_net_assets: Decimal,
    /// Purchase consideration paid.
    pub consideration: Decimal,
    /// Goodwill measurement method.
    pub method: GoodwillMethod,
    /// Type of relationship.
    pub relation: OwnershipRelation,
    /// Date from which this record is effective.
    pub effective_from: NaiveDate,
    /// Date after which this record no longer applies, if any.
    pub valid_to: Option<NaiveDate>,
}

impl OwnershipRecord {
    /// Derived non-controlling interest percentage (`100 - ownership`).
    #[must_use]
    pub fn nci_pct(&self) -> Decimal {
        Decimal::ONE_HUNDRED - self.ownership_pct
    }

    /// Ownership expressed as a fraction of one.
    #[must_use]
    pub fn ownership_fraction(&self) -> Decimal {
        self.ownership_pct / Decimal::ONE_HUNDRED
    }

    /// Returns true if this record covers the given date.
    #[must_use]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        date >= self.effective_from && self.valid_to.is_none_or(|until| date <= until)
    }
}
