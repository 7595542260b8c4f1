use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{CanonicalKey, Category, ParsedIngredient, RecipeId, UnitKind};
use crate::quantity::Quantity;

/// Annotation explaining why an entry needs a human look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReviewIssue {
    /// A member line had no quantity or unit that could be extracted.
    ParseAmbiguous { raw_text: String },
    /// Member lines used units that could not be reconciled into one total.
    UnitIncompatible { units: Vec<String> },
    /// A member amount was too large to convert, sum or round exactly. It is
    /// kept as its own line.
    AmountOverflow { raw_text: String },
    /// The ingredient was not in the category table and landed in `Other`.
    UnknownCategory,
}

impl ReviewIssue {
    /// Whether this issue should put the entry in front of a reviewer.
    /// An unknown category alone does not: the entry is still complete.
    pub fn needs_review(&self) -> bool {
        !matches!(self, Self::UnknownCategory)
    }
}

/// One summed, rounded amount in a single unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityLine {
    pub quantity: Quantity,
    /// `None` for bare counts ("3 eggs").
    pub unit: Option<String>,
    pub kind: UnitKind,
    pub line_count: usize,
    pub recipe_ids: BTreeSet<RecipeId>,
}

/// One shopping-list entry per canonical key.
///
/// `total_quantity`/`display_unit` hold the primary reconciled total. Member
/// lines whose units could not be converted into the display unit are kept in
/// `unmerged`, each summed with its own compatible peers. Lines without any
/// quantity are counted in `unquantified_count`; nothing is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedEntry {
    pub canonical_key: CanonicalKey,
    pub display_name: String,
    pub category: Category,
    pub total_quantity: Option<Quantity>,
    pub display_unit: Option<String>,
    pub display_kind: Option<UnitKind>,
    pub unmerged: Vec<QuantityLine>,
    pub unquantified_count: usize,
    pub contributing_recipe_ids: BTreeSet<RecipeId>,
    pub source_lines_for_review: Vec<ParsedIngredient>,
    pub issues: Vec<ReviewIssue>,
}

impl AggregatedEntry {
    pub fn needs_review(&self) -> bool {
        self.issues.iter().any(ReviewIssue::needs_review)
    }

    /// Whether the group holds amounts in units that could not be summed.
    pub fn is_unreconciled(&self) -> bool {
        !self.unmerged.is_empty()
    }

    pub fn has_issue(&self, predicate: impl Fn(&ReviewIssue) -> bool) -> bool {
        self.issues.iter().any(predicate)
    }
}
