use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{KEY_SEPARATOR, VARIANT_SEPARATOR};

/// Normalized identity of a purchasable ingredient.
///
/// Rendered as `base:variant-variant` with the preserved variants sorted.
/// When nothing was preserved the separator is dropped too: the key is
/// `tomato`, never `tomato:`. Two lines are only ever summed together when
/// their keys are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalKey {
    key: String,
    base: String,
    variants: Vec<String>,
}

impl CanonicalKey {
    /// Build a key. Variants are lowercased, de-duplicated, and sorted so the
    /// result does not depend on the order they were supplied in.
    pub fn new<I, S>(base: &str, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base = base.trim().to_lowercase();
        let mut variants: Vec<String> = variants
            .into_iter()
            .map(|v| v.as_ref().trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .collect();
        variants.sort();
        variants.dedup();

        let key = if variants.is_empty() {
            base.clone()
        } else {
            format!(
                "{base}{KEY_SEPARATOR}{}",
                variants.join(VARIANT_SEPARATOR)
            )
        };
        Self {
            key,
            base,
            variants,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Human-readable name: variants before the base, e.g. `all-purpose flour`.
    pub fn display_name(&self) -> String {
        if self.variants.is_empty() {
            self.base.clone()
        } else {
            format!("{} {}", self.variants.join(" "), self.base)
        }
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
