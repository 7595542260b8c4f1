//! Phase 5: assign categories and build the final entries.

use std::collections::BTreeSet;

use pantry_classifier::CategoryClassifier;
use pantry_core::{AggregatedEntry, QuantityLine, RecipeId, ReviewIssue};

use super::phase1_collecting::Group;
use super::phase3_summing::{SummedGroup, Tally};

pub fn categorize_group(summed: SummedGroup, classifier: &CategoryClassifier) -> AggregatedEntry {
    let classification = classifier.lookup(&summed.group.key);

    let mut issues = Vec::new();
    let mut units: Vec<String> = Vec::new();
    for label in summed.tallies.iter().map(unit_label) {
        if !units.contains(&label) {
            units.push(label);
        }
    }
    if units.len() > 1 {
        issues.push(ReviewIssue::UnitIncompatible { units });
    }
    for &i in &summed.overflowed {
        issues.push(ReviewIssue::AmountOverflow {
            raw_text: summed.group.members[i].ingredient.raw_text.clone(),
        });
    }
    for &i in &summed.unquantified {
        issues.push(ReviewIssue::ParseAmbiguous {
            raw_text: summed.group.members[i].ingredient.raw_text.clone(),
        });
    }
    if !classification.known {
        issues.push(ReviewIssue::UnknownCategory);
    }

    let primary = summed.primary();
    let unmerged = summed
        .unmerged()
        .iter()
        .map(|t| quantity_line(&summed.group, t))
        .collect();

    let group = &summed.group;
    AggregatedEntry {
        display_name: group.key.display_name(),
        category: classification.category,
        total_quantity: primary.map(|t| t.rounded.clone()),
        display_unit: primary.and_then(|t| t.unit.clone()),
        display_kind: primary.map(|t| t.kind),
        unmerged,
        unquantified_count: summed.unquantified.len(),
        contributing_recipe_ids: group.members.iter().map(|m| m.recipe_id.clone()).collect(),
        source_lines_for_review: group.members.iter().map(|m| m.ingredient.clone()).collect(),
        issues,
        canonical_key: group.key.clone(),
    }
}

fn quantity_line(group: &Group, tally: &Tally) -> QuantityLine {
    let recipe_ids: BTreeSet<RecipeId> = tally
        .members
        .iter()
        .map(|&i| group.members[i].recipe_id.clone())
        .collect();
    QuantityLine {
        quantity: tally.rounded.clone(),
        unit: tally.unit.clone(),
        kind: tally.kind,
        line_count: tally.members.len(),
        recipe_ids,
    }
}

fn unit_label(tally: &Tally) -> String {
    tally.unit.clone().unwrap_or_else(|| "count".to_string())
}
