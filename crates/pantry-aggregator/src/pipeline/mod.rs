//! Generation pipeline.
//!
//! Phase 1: Collecting → Phase 2: Converting → Phase 3: Summing →
//! Phase 4: Rounding → Phase 5: Categorizing

pub mod phase1_collecting;
pub mod phase2_converting;
pub mod phase3_summing;
pub mod phase4_rounding;
pub mod phase5_categorizing;

use pantry_classifier::CategoryClassifier;
use pantry_core::config::DisplayUnitPolicy;
use pantry_core::{AggregatedEntry, ParsedRecipe};
use pantry_normalizer::Normalizer;
use pantry_units::UnitConverter;
use tracing::{debug, info};

use crate::shopping_list::{GenerationStats, ShoppingList};
use crate::state::Phase;
pub use phase4_rounding::RoundingPolicy;

/// Borrowed components for one run.
#[derive(Debug, Clone, Copy)]
pub struct PipelineContext<'a> {
    pub normalizer: &'a Normalizer,
    pub converter: &'a UnitConverter,
    pub classifier: &'a CategoryClassifier,
    pub rounding: &'a RoundingPolicy,
    pub display_unit: DisplayUnitPolicy,
}

/// Run all five phases over a recipe selection.
pub fn run_pipeline(recipes: &[ParsedRecipe], ctx: &PipelineContext<'_>) -> ShoppingList {
    let mut phase = Phase::Collecting;

    let collected =
        phase1_collecting::collect_groups(recipes, ctx.normalizer, ctx.converter.units());
    debug!(
        phase = %phase,
        recipes = recipes.len(),
        lines = collected.line_count,
        skipped = collected.skipped_lines,
        groups = collected.groups.len(),
        "Phase complete"
    );
    phase = phase.next();

    let converted: Vec<_> = collected
        .groups
        .into_iter()
        .map(|g| phase2_converting::convert_group(g, ctx.converter, ctx.display_unit))
        .collect();
    let split = converted.iter().filter(|g| g.buckets.len() > 1).count();
    debug!(phase = %phase, groups = converted.len(), unreconciled = split, "Phase complete");
    phase = phase.next();

    let summed: Vec<_> = converted.into_iter().map(phase3_summing::sum_group).collect();
    debug!(phase = %phase, groups = summed.len(), "Phase complete");
    phase = phase.next();

    let rounded: Vec<_> = summed
        .into_iter()
        .map(|g| phase4_rounding::round_group(g, ctx.rounding))
        .collect();
    debug!(phase = %phase, groups = rounded.len(), "Phase complete");
    phase = phase.next();

    let entries: Vec<AggregatedEntry> = rounded
        .into_iter()
        .map(|g| phase5_categorizing::categorize_group(g, ctx.classifier))
        .collect();
    debug!(phase = %phase, entries = entries.len(), "Phase complete");
    phase = phase.next();

    let stats = GenerationStats {
        recipe_count: recipes.len(),
        line_count: collected.line_count,
        skipped_lines: collected.skipped_lines,
        entry_count: entries.len(),
        review_count: entries.iter().filter(|e| e.needs_review()).count(),
        unreconciled_count: entries.iter().filter(|e| e.is_unreconciled()).count(),
        unquantified_count: entries.iter().map(|e| e.unquantified_count).sum(),
    };
    let list = ShoppingList::from_entries(entries, stats);

    info!(
        phase = %phase,
        recipes = list.stats.recipe_count,
        entries = list.stats.entry_count,
        review = list.stats.review_count,
        "Shopping list generated"
    );
    list
}
