use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What a modifier means for purchasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Conveys no purchasing distinction ("sifted", "chopped").
    Discard,
    /// Changes what must be bought ("bread" flour, "brown" sugar).
    Preserve,
}

/// One row of the modifier policy table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierRule {
    pub base: String,
    pub modifier: String,
    pub verdict: Verdict,
}

/// User additions to the normalizer's built-in policy.
///
/// Rules listed here are consulted before the built-in table, so they can
/// override a built-in verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Start from the built-in policy tables. Default: true.
    pub use_builtin_policy: bool,
    /// Extra bases whose unknown modifiers are preserved.
    pub variant_sensitive: Vec<String>,
    /// Extra `{base, modifier, verdict}` rows.
    pub modifier_rules: Vec<ModifierRule>,
    /// Variant implied when a base is given without one, e.g. flour -> all-purpose.
    pub default_variants: BTreeMap<String, String>,
    /// Phrase rewrites applied to names before matching, e.g. "sea salt" -> "salt".
    pub aliases: BTreeMap<String, String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            use_builtin_policy: true,
            variant_sensitive: Vec::new(),
            modifier_rules: Vec::new(),
            default_variants: BTreeMap::new(),
            aliases: BTreeMap::new(),
        }
    }
}
