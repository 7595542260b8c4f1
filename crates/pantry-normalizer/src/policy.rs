//! Modifier policy: which modifiers change what must be bought.

use std::collections::{HashMap, HashSet};

use pantry_core::config::{ModifierRule, NormalizerConfig, Verdict};
use regex::Regex;
use tracing::warn;

use crate::vocabulary::{
    ALIASES, DEFAULT_VARIANTS, GLOBAL_DISCARD, KNOWN_BASES, MODIFIER_RULES, VARIANT_SENSITIVE,
};

/// Base wildcard accepted in rule rows.
pub const ANY_BASE: &str = "*";

/// A compiled whole-word phrase rewrite.
#[derive(Debug, Clone)]
struct Alias {
    pattern: Regex,
    replacement: String,
}

impl Alias {
    fn compile(from: &str, to: &str) -> Option<Self> {
        let from = from.trim().to_lowercase();
        if from.is_empty() {
            return None;
        }
        match Regex::new(&format!(r"\b{}\b", regex::escape(&from))) {
            Ok(pattern) => Some(Self {
                pattern,
                replacement: to.trim().to_lowercase(),
            }),
            Err(e) => {
                warn!(alias = %from, error = %e, "Skipping alias that does not compile");
                None
            }
        }
    }
}

/// Policy table consulted by the normalizer.
///
/// Rules are ordered and the first match wins; config rows are inserted ahead
/// of the built-in table.
#[derive(Debug, Clone, Default)]
pub struct ModifierPolicy {
    rules: Vec<ModifierRule>,
    variant_sensitive: HashSet<String>,
    default_variants: HashMap<String, String>,
    aliases: Vec<Alias>,
    known_bases: HashSet<String>,
    global_discard: HashSet<String>,
}

impl ModifierPolicy {
    /// A policy with no rules, aliases, or known bases.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in tables.
    pub fn builtin() -> Self {
        let mut policy = Self::empty();
        policy.extend_builtin();
        policy
    }

    /// Config rows first, then the built-in tables unless disabled.
    pub fn from_config(config: &NormalizerConfig) -> Self {
        let mut policy = Self::empty();
        for rule in &config.modifier_rules {
            policy.add_rule(&rule.base, &rule.modifier, rule.verdict);
        }
        for base in &config.variant_sensitive {
            policy.add_variant_sensitive(base);
        }
        for (base, variant) in &config.default_variants {
            policy.set_default_variant(base, variant);
        }
        for (from, to) in &config.aliases {
            policy.add_alias(from, to);
        }
        if config.use_builtin_policy {
            policy.extend_builtin();
        }
        policy
    }

    fn extend_builtin(&mut self) {
        for (base, modifier, verdict) in MODIFIER_RULES {
            self.add_rule(base, modifier, *verdict);
        }
        for base in VARIANT_SENSITIVE {
            self.add_variant_sensitive(base);
        }
        for (base, variant) in DEFAULT_VARIANTS {
            self.default_variants
                .entry((*base).to_string())
                .or_insert_with(|| (*variant).to_string());
        }
        let mut builtin_aliases: Vec<&(&str, &str)> = ALIASES.iter().collect();
        builtin_aliases.sort_by_key(|(from, _)| std::cmp::Reverse(from.len()));
        for (from, to) in builtin_aliases {
            self.add_alias(from, to);
        }
        for base in KNOWN_BASES {
            self.known_bases.insert((*base).to_string());
        }
        for word in GLOBAL_DISCARD {
            self.global_discard.insert((*word).to_string());
        }
    }

    pub fn add_rule(&mut self, base: &str, modifier: &str, verdict: Verdict) {
        let base = base.trim().to_lowercase();
        if base != ANY_BASE {
            self.known_bases.insert(base.clone());
        }
        self.rules.push(ModifierRule {
            base,
            modifier: modifier.trim().to_lowercase(),
            verdict,
        });
    }

    pub fn add_variant_sensitive(&mut self, base: &str) {
        let base = base.trim().to_lowercase();
        self.known_bases.insert(base.clone());
        self.variant_sensitive.insert(base);
    }

    /// Set the implied variant for a bare base. An earlier setting wins.
    pub fn set_default_variant(&mut self, base: &str, variant: &str) {
        let base = base.trim().to_lowercase();
        self.known_bases.insert(base.clone());
        self.default_variants
            .entry(base)
            .or_insert_with(|| variant.trim().to_lowercase());
    }

    pub fn add_alias(&mut self, from: &str, to: &str) {
        if let Some(alias) = Alias::compile(from, to) {
            self.aliases.push(alias);
        }
    }

    pub fn add_known_base(&mut self, base: &str) {
        self.known_bases.insert(base.trim().to_lowercase());
    }

    /// First matching rule for `(base, modifier)`.
    pub fn verdict(&self, base: &str, modifier: &str) -> Option<Verdict> {
        self.rules
            .iter()
            .find(|r| (r.base == base || r.base == ANY_BASE) && r.modifier == modifier)
            .map(|r| r.verdict)
    }

    pub fn is_variant_sensitive(&self, base: &str) -> bool {
        self.variant_sensitive.contains(base)
    }

    pub fn default_variant(&self, base: &str) -> Option<&str> {
        self.default_variants.get(base).map(String::as_str)
    }

    pub fn is_known_base(&self, phrase: &str) -> bool {
        self.known_bases.contains(phrase)
    }

    pub fn is_global_discard(&self, word: &str) -> bool {
        self.global_discard.contains(word)
    }

    /// Apply every alias in order.
    pub fn apply_aliases(&self, text: &str) -> String {
        let mut out = text.to_string();
        for alias in &self.aliases {
            if alias.pattern.is_match(&out) {
                out = alias
                    .pattern
                    .replace_all(&out, alias.replacement.as_str())
                    .into_owned();
            }
        }
        out
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}
