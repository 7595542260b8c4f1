use serde::{Deserialize, Serialize};

use crate::quantity::Quantity;

/// Structured form of one ingredient line.
///
/// `quantity` and `unit` are `None` when the line carries no amount
/// ("salt to taste"). That is an expected state, distinct from a zero quantity.
/// Produced by the local text parser or by any external parser backend; the
/// aggregator only depends on this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    pub quantity: Option<Quantity>,
    pub unit: Option<String>,
    pub name: String,
    #[serde(default)]
    pub modifiers: Vec<String>,
    pub raw_text: String,
}

impl ParsedIngredient {
    /// A record carrying only a name, used when nothing else could be extracted.
    pub fn unparsed(raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        Self {
            quantity: None,
            unit: None,
            name: raw_text.trim().to_lowercase(),
            modifiers: Vec::new(),
            raw_text,
        }
    }

    pub fn has_quantity(&self) -> bool {
        self.quantity.is_some()
    }

    /// Blank lines carry no ingredient at all.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.raw_text.trim().is_empty()
    }
}
