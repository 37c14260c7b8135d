//! The consolidation pipeline.

use std::collections::BTreeMap;

use gruppo_shared::config::MaterialityConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::consolidation::{ConsolidatedBalance, Consolidator, ValidationReport, Validator};
use crate::entity::{ActiveOwnership, GoodwillValuation, OwnershipCalculator};
use crate::intercompany::{Elimination, EliminationMatcher, IntercompanyTransaction};
use crate::journal::{Journal, JournalGenerator};

use super::input::{
    screen_adjustments, screen_ownership_records, screen_transactions, ConsolidationInput,
    InputError,
};

/// The complete output of one consolidation run.
///
/// Computed figures are always returned, even when validation errors were
/// raised; accepting or rejecting the run is the caller's decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidationRun {
    /// Eliminations produced by the matcher.
    pub eliminations: Vec<Elimination>,
    /// Transactions consumed by a match.
    pub matched: Vec<IntercompanyTransaction>,
    /// Candidate transactions with no offsetting leg.
    pub unmatched: Vec<IntercompanyTransaction>,
    /// Transactions excluded from matching by user override.
    pub excluded: Vec<IntercompanyTransaction>,
    /// Goodwill/NCI valuations, one per active ownership record.
    pub valuations: Vec<GoodwillValuation>,
    /// Consolidated balances keyed by account code.
    pub consolidated: BTreeMap<String, ConsolidatedBalance>,
    /// Generated journals.
    pub journals: Vec<Journal>,
    /// Validation findings.
    pub validation: ValidationReport,
    /// Input records excluded from the run, with reasons.
    pub skipped: Vec<InputError>,
}

/// Runs the full consolidation pipeline.
///
/// The engine is a synchronous, single-pass batch computation over
/// in-memory collections; given identical inputs it produces identical
/// results aside from generated identifiers.
pub struct ConsolidationEngine {
    materiality: MaterialityConfig,
}

impl ConsolidationEngine {
    /// Creates an engine with the given materiality settings.
    #[must_use]
    pub const fn new(materiality: MaterialityConfig) -> Self {
        Self { materiality }
    }

    /// Runs one consolidation: screening, matching, valuation,
    /// consolidation, journal generation, validation.
    #[must_use]
    pub fn run(&self, input: ConsolidationInput) -> ConsolidationRun {
        info!(
            period = %input.period,
            balances = input.balances.len(),
            transactions = input.transactions.len(),
            ownership_records = input.ownership_records.len(),
            "starting consolidation run"
        );

        let mut skipped = Vec::new();
        let ownership_records = screen_ownership_records(input.ownership_records, &mut skipped);
        let transactions = screen_transactions(input.transactions, &mut skipped);
        let ownership_adjustments = screen_adjustments(input.ownership_adjustments, &mut skipped);
        let goodwill_adjustments = screen_adjustments(input.goodwill_adjustments, &mut skipped);
        if !skipped.is_empty() {
            warn!(skipped = skipped.len(), "input records excluded from run");
        }

        let outcome = EliminationMatcher::match_transactions(&transactions);
        debug!(
            eliminations = outcome.eliminations.len(),
            unmatched = outcome.unmatched.len(),
            excluded = outcome.excluded.len(),
            "intercompany matching complete"
        );

        let ownership = ActiveOwnership::build(&ownership_records, input.as_of);

        let mut valuations = Vec::new();
        for record in ownership.records() {
            match OwnershipCalculator::value_acquisition(record) {
                Ok(valuation) => valuations.push(valuation),
                Err(error) => {
                    debug!(record = %record.id, error = %error, "skipping valuation");
                    skipped.push(InputError::ZeroOwnership { record: record.id });
                }
            }
        }

        let consolidated =
            Consolidator::consolidate(&input.balances, &ownership, &outcome.eliminations);

        // Screened adjustments are balanced and non-empty, so generation
        // cannot fail for them.
        let journals = JournalGenerator::generate(
            &outcome.eliminations,
            &ownership_adjustments,
            &goodwill_adjustments,
            input.as_of,
            input.period,
        )
        .unwrap_or_default();

        let validation = Validator::validate(
            &consolidated,
            &outcome.eliminations,
            &valuations,
            &self.materiality,
        );
        info!(
            accounts = consolidated.len(),
            journals = journals.len(),
            errors = validation.errors.len(),
            warnings = validation.warnings.len(),
            "consolidation run complete"
        );

        ConsolidationRun {
            eliminations: outcome.eliminations,
            matched: outcome.matched,
            unmatched: outcome.unmatched,
            excluded: outcome.excluded,
            valuations,
            consolidated,
            journals,
            validation,
            skipped,
        }
    }
}

impl Default for ConsolidationEngine {
    fn default() -> Self {
        Self::new(MaterialityConfig::default())
    }
}
