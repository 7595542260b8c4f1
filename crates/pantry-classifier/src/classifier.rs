use std::collections::BTreeMap;

use pantry_core::config::CategoryConfig;
use pantry_core::{CanonicalKey, Category};
use tracing::debug;

use crate::table;

/// Result of a lookup. `known` is false when nothing matched and the
/// category fell back to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub known: bool,
}

#[derive(Debug, Clone)]
struct Keyword {
    words: Vec<String>,
    category: Category,
}

/// Static keyword table plus per-base overrides.
///
/// Lookup order: override on the full key, override on the base, exact base
/// match, then the keyword with the most words that appears in the base as a
/// whole-word run. Ties go to the earlier category.
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    keywords: Vec<Keyword>,
    overrides: BTreeMap<String, Category>,
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CategoryClassifier {
    pub fn builtin() -> Self {
        let keywords = table::builtin()
            .into_iter()
            .flat_map(|(category, words)| {
                words.iter().map(move |w| Keyword {
                    words: w.split_whitespace().map(str::to_string).collect(),
                    category,
                })
            })
            .collect();
        Self {
            keywords,
            overrides: BTreeMap::new(),
        }
    }

    pub fn from_config(config: &CategoryConfig) -> Self {
        let mut classifier = Self::builtin();
        for (name, category) in &config.overrides {
            classifier.set_override(name, *category);
        }
        classifier
    }

    pub fn set_override(&mut self, name: &str, category: Category) {
        self.overrides.insert(name.trim().to_lowercase(), category);
    }

    pub fn classify(&self, key: &CanonicalKey) -> Category {
        self.lookup(key).category
    }

    pub fn lookup(&self, key: &CanonicalKey) -> Classification {
        if let Some(category) = self.overrides.get(key.as_str()) {
            return Classification {
                category: *category,
                known: true,
            };
        }
        let found = self.lookup_base(key.base());
        if !found.known {
            debug!(key = %key, "No category match, using other");
        }
        found
    }

    pub fn lookup_base(&self, base: &str) -> Classification {
        let base = base.trim().to_lowercase();
        if let Some(category) = self.overrides.get(&base) {
            return Classification {
                category: *category,
                known: true,
            };
        }

        let words: Vec<&str> = base.split_whitespace().collect();
        let mut best: Option<&Keyword> = None;
        for keyword in &self.keywords {
            let longer = best.map_or(true, |b| keyword.words.len() > b.words.len());
            if longer && contains_run(&words, &keyword.words) {
                best = Some(keyword);
            }
        }

        match best {
            Some(keyword) => Classification {
                category: keyword.category,
                known: true,
            },
            None => Classification {
                category: Category::Other,
                known: false,
            },
        }
    }
}

fn contains_run(haystack: &[&str], needle: &[String]) -> bool {
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    haystack
        .windows(needle.len())
        .any(|w| w.iter().zip(needle).all(|(a, b)| *a == b.as_str()))
}
