//! Name and modifier normalization into canonical keys.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use pantry_core::config::{NormalizerConfig, Verdict};
use pantry_core::{CanonicalKey, ParsedIngredient};
use regex::Regex;
use tracing::trace;

use crate::policy::ModifierPolicy;
use crate::singular::singularize_phrase;
use crate::vocabulary::{CONNECTORS, NOTE_PATTERNS};

static NOTES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    NOTE_PATTERNS
        .iter()
        .filter_map(|p| Regex::new(p).ok())
        .collect()
});

static PARENTHETICAL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\([^()]*\)").ok());

static MINUS_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^minus\s+[\d\s/.]+\s*[a-z]+\s+").ok());

/// Maps `(name, modifiers)` to a `CanonicalKey`.
///
/// Deterministic: the same name and the same set of modifiers always give the
/// same key, whatever order the modifiers arrive in.
#[derive(Debug, Clone)]
pub struct Normalizer {
    policy: ModifierPolicy,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Normalizer {
    pub fn new(policy: ModifierPolicy) -> Self {
        Self { policy }
    }

    pub fn builtin() -> Self {
        Self::new(ModifierPolicy::builtin())
    }

    pub fn from_config(config: &NormalizerConfig) -> Self {
        Self::new(ModifierPolicy::from_config(config))
    }

    pub fn policy(&self) -> &ModifierPolicy {
        &self.policy
    }

    pub fn normalize_parsed(&self, ingredient: &ParsedIngredient) -> CanonicalKey {
        self.normalize(&ingredient.name, &ingredient.modifiers)
    }

    pub fn normalize(&self, name: &str, modifiers: &[String]) -> CanonicalKey {
        let cleaned = self.clean_name(name);
        let (base, leading) = self.split_base(&cleaned);

        let mut preserved = BTreeSet::new();
        for word in &leading {
            self.judge_phrase(&base, word, &mut preserved);
        }
        for modifier in modifiers {
            let phrase = self.policy.apply_aliases(&clean_text(modifier));
            self.judge_phrase(&base, &phrase, &mut preserved);
        }

        if preserved.is_empty() {
            if let Some(variant) = self.policy.default_variant(&base) {
                preserved.insert(variant.to_string());
            }
        }

        let key = CanonicalKey::new(&base, &preserved);
        trace!(name, key = %key, "Normalized ingredient");
        key
    }

    /// Lowercase, drop parentheticals and notes, singularize, apply aliases.
    fn clean_name(&self, name: &str) -> String {
        let mut text = name.to_lowercase();
        if let Some(re) = PARENTHETICAL.as_ref() {
            text = re.replace_all(&text, " ").into_owned();
        }
        text = clean_text(&text);
        if let Some(re) = MINUS_PREFIX.as_ref() {
            text = re.replace(&text, "").into_owned();
        }
        let text = singularize_phrase(text.trim());
        let text = self.policy.apply_aliases(&text);
        collapse(&text)
    }

    /// Longest known suffix becomes the base; the words before it are
    /// modifier candidates. A name joining two things ("salt and pepper")
    /// is never split.
    fn split_base(&self, name: &str) -> (String, Vec<String>) {
        let words: Vec<&str> = name.split_whitespace().collect();
        for start in 0..words.len() {
            let candidate = words[start..].join(" ");
            if !self.policy.is_known_base(&candidate) {
                continue;
            }
            let leading = &words[..start];
            if leading.iter().any(|w| matches!(*w, "and" | "or" | "&" | "with")) {
                break;
            }
            let leading = leading
                .iter()
                .filter(|w| !CONNECTORS.contains(*w))
                .map(|w| (*w).to_string())
                .collect();
            return (candidate, leading);
        }

        let kept: Vec<&str> = words
            .iter()
            .copied()
            .filter(|w| !self.policy.is_global_discard(w) && !w.chars().any(|c| c.is_ascii_digit()))
            .collect();
        let kept = trim_connectors(&kept);
        let base = if kept.is_empty() {
            name.to_string()
        } else {
            kept.join(" ")
        };
        (base, Vec::new())
    }

    fn judge_phrase(&self, base: &str, phrase: &str, preserved: &mut BTreeSet<String>) {
        let phrase = phrase.trim();
        if phrase.is_empty() || phrase == base || is_note(phrase) {
            return;
        }
        if let Some(verdict) = self.policy.verdict(base, phrase) {
            if verdict == Verdict::Preserve {
                preserved.insert(phrase.replace(' ', "-"));
            }
            return;
        }
        for word in phrase.split_whitespace() {
            if CONNECTORS.contains(&word) || base.split_whitespace().any(|b| b == word) {
                continue;
            }
            if self.judge_word(base, word) == Verdict::Preserve {
                preserved.insert(word.to_string());
            }
        }
    }

    fn judge_word(&self, base: &str, word: &str) -> Verdict {
        if let Some(verdict) = self.policy.verdict(base, word) {
            return verdict;
        }
        if self.policy.is_global_discard(word) || word.chars().any(|c| c.is_ascii_digit()) {
            return Verdict::Discard;
        }
        if self.policy.is_variant_sensitive(base) {
            Verdict::Preserve
        } else {
            Verdict::Discard
        }
    }
}

fn is_note(phrase: &str) -> bool {
    NOTES.iter().any(|re| re.is_match(phrase))
}

/// Lowercase, drop apostrophes, turn other punctuation into spaces.
fn clean_text(text: &str) -> String {
    let mapped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(*c, '\'' | '\u{2019}'))
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '%' || c == '&' || c == '/' {
                c
            } else {
                ' '
            }
        })
        .collect();
    collapse(mapped.trim_matches('-'))
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn trim_connectors<'a>(words: &[&'a str]) -> Vec<&'a str> {
    let start = words.iter().position(|w| !CONNECTORS.contains(w));
    let end = words.iter().rposition(|w| !CONNECTORS.contains(w));
    match (start, end) {
        (Some(s), Some(e)) => words[s..=e].to_vec(),
        _ => Vec::new(),
    }
}
