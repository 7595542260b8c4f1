use serde::{Deserialize, Serialize};

use pantry_core::{AggregatedEntry, Category};

/// Entries of one category, sorted by display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySection {
    pub category: Category,
    pub entries: Vec<AggregatedEntry>,
}

/// Counters for one generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub recipe_count: usize,
    pub line_count: usize,
    /// Blank lines, which carry no ingredient.
    pub skipped_lines: usize,
    pub entry_count: usize,
    pub review_count: usize,
    pub unreconciled_count: usize,
    pub unquantified_count: usize,
}

/// The result of one generation: sections in `Category` order, empty ones omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub sections: Vec<CategorySection>,
    pub stats: GenerationStats,
}

impl ShoppingList {
    pub fn from_entries(entries: Vec<AggregatedEntry>, stats: GenerationStats) -> Self {
        let mut sections: Vec<CategorySection> = Category::ALL
            .into_iter()
            .map(|category| CategorySection {
                category,
                entries: Vec::new(),
            })
            .collect();
        for entry in entries {
            if let Some(section) = sections.iter_mut().find(|s| s.category == entry.category) {
                section.entries.push(entry);
            }
        }
        sections.retain(|s| !s.entries.is_empty());
        for section in &mut sections {
            section.entries.sort_by(|a, b| {
                a.display_name
                    .cmp(&b.display_name)
                    .then_with(|| a.canonical_key.cmp(&b.canonical_key))
            });
        }
        Self { sections, stats }
    }

    pub fn entries(&self) -> impl Iterator<Item = &AggregatedEntry> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }

    /// Entry by canonical key string, e.g. `flour:all-purpose`.
    pub fn find(&self, key: &str) -> Option<&AggregatedEntry> {
        self.entries().find(|e| e.canonical_key.as_str() == key)
    }

    pub fn section(&self, category: Category) -> Option<&CategorySection> {
        self.sections.iter().find(|s| s.category == category)
    }

    pub fn needing_review(&self) -> impl Iterator<Item = &AggregatedEntry> {
        self.entries().filter(|e| e.needs_review())
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
