//! Active ownership record selection.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use gruppo_shared::types::EntityId;
use rust_decimal::Decimal;

use super::types::OwnershipRecord;

/// Index of the ownership records active on a given date, keyed by subsidiary.
///
/// At most one record per (parent, subsidiary) pair should be active at a
/// time; overlapping validity windows are a data-integrity violation the
/// engine tolerates by selecting the most recently effective record.
#[derive(Debug, Clone)]
pub struct ActiveOwnership<'a> {
    by_subsidiary: BTreeMap<EntityId, &'a OwnershipRecord>,
}

impl<'a> ActiveOwnership<'a> {
    /// Builds the index from an ownership record set and an as-of date.
    #[must_use]
    pub fn build(records: &'a [OwnershipRecord], as_of: NaiveDate) -> Self {
        let mut by_subsidiary: BTreeMap<EntityId, &'a OwnershipRecord> = BTreeMap::new();

        for record in records.iter().filter(|r| r.is_active_on(as_of)) {
            by_subsidiary
                .entry(record.subsidiary)
                .and_modify(|current| {
                    if record.effective_from > current.effective_from {
                        *current = record;
                    }
                })
                .or_insert(record);
        }

        Self { by_subsidiary }
    }

    /// Returns the active record in which the entity is the subsidiary, if any.
    #[must_use]
    pub fn record_for(&self, entity: EntityId) -> Option<&'a OwnershipRecord> {
        self.by_subsidiary.get(&entity).copied()
    }

    /// Consolidation weight for an entity's balances, as a fraction of one.
    ///
    /// Subsidiaries are weighted by their ownership percentage. Parents, and
    /// entities that appear in no ownership record, are fully included; the
    /// 100% default for unknown entities is a deliberate conservative choice.
    #[must_use]
    pub fn weight_for(&self, entity: EntityId) -> Decimal {
        self.record_for(entity)
            .map_or(Decimal::ONE, OwnershipRecord::ownership_fraction)
    }

    /// Iterates over the active records, ordered by subsidiary id.
    pub fn records(&self) -> impl Iterator<Item = &'a OwnershipRecord> + '_ {
        self.by_subsidiary.values().copied()
    }
}
