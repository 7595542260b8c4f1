//! Plain-text rendering of shopping lists and parsed lines.

use std::fmt::Write;

use pantry_aggregator::ShoppingList;
use pantry_core::{AggregatedEntry, CanonicalKey, Category, ParsedIngredient, Quantity, ReviewIssue};
use pantry_units::UnitTable;

/// `2 cups`, `1 can`, `3` for bare counts.
pub fn format_amount(quantity: &Quantity, unit: Option<&str>, units: &UnitTable) -> String {
    match unit {
        None => quantity.to_string(),
        Some(u) => {
            let shown = units.get(u).map_or(u, |def| def.display_for(quantity));
            format!("{quantity} {shown}")
        }
    }
}

pub fn format_entry(entry: &AggregatedEntry, units: &UnitTable) -> String {
    let mut amounts: Vec<String> = Vec::new();
    if let Some(total) = &entry.total_quantity {
        amounts.push(format_amount(total, entry.display_unit.as_deref(), units));
    }
    for line in &entry.unmerged {
        amounts.push(format_amount(&line.quantity, line.unit.as_deref(), units));
    }

    let mut out = if amounts.is_empty() {
        entry.display_name.clone()
    } else {
        format!("{} {}", amounts.join(" + "), entry.display_name)
    };
    if entry.total_quantity.is_some() && entry.unquantified_count > 0 {
        out.push_str(" (plus some to taste)");
    }
    let notes: Vec<&str> = entry
        .issues
        .iter()
        .filter(|i| i.needs_review())
        .map(issue_label)
        .collect();
    if !notes.is_empty() {
        let _ = write!(out, "  [review: {}]", dedup(notes).join(", "));
    }
    out
}

fn issue_label(issue: &ReviewIssue) -> &'static str {
    match issue {
        ReviewIssue::ParseAmbiguous { .. } => "no amount",
        ReviewIssue::UnitIncompatible { .. } => "mixed units",
        ReviewIssue::AmountOverflow { .. } => "amount too large",
        ReviewIssue::UnknownCategory => "uncategorized",
    }
}

fn dedup(mut labels: Vec<&str>) -> Vec<&str> {
    let mut seen = Vec::new();
    labels.retain(|l| {
        if seen.contains(l) {
            false
        } else {
            seen.push(*l);
            true
        }
    });
    labels
}

pub fn render_list(list: &ShoppingList, units: &UnitTable) -> String {
    let mut out = String::new();
    for section in &list.sections {
        let _ = writeln!(out, "{}", section.category.as_str().to_uppercase());
        for entry in &section.entries {
            let _ = writeln!(out, "  {}", format_entry(entry, units));
        }
        out.push('\n');
    }
    let stats = &list.stats;
    let _ = writeln!(
        out,
        "{} items from {} recipes ({} lines), {} need review",
        stats.entry_count, stats.recipe_count, stats.line_count, stats.review_count
    );
    out
}

pub fn render_parsed(
    parsed: &ParsedIngredient,
    key: &CanonicalKey,
    category: Category,
    units: &UnitTable,
) -> String {
    let mut out = String::new();
    let amount = match &parsed.quantity {
        Some(q) => format_amount(q, parsed.unit.as_deref(), units),
        None => "-".to_string(),
    };
    let _ = writeln!(out, "amount:    {amount}");
    let _ = writeln!(out, "name:      {}", parsed.name);
    if !parsed.modifiers.is_empty() {
        let _ = writeln!(out, "modifiers: {}", parsed.modifiers.join("; "));
    }
    let _ = writeln!(out, "key:       {key}");
    let _ = writeln!(out, "category:  {category}");
    out
}
