//! Ingredient density lookup for volume-to-weight conversion.
//!
//! Densities are stored as ounces (weight) per US cup and only exist for a
//! handful of baking staples. Anything not listed never crosses between
//! volume and weight.

use std::collections::HashMap;
use std::sync::LazyLock;

use pantry_core::Quantity;

/// Base ingredient -> ounces per cup, as `(numer, denom)`.
static BUILTIN_DENSITIES: &[(&str, (u64, u64))] = &[
    ("flour", (17, 4)),
    ("sugar", (7, 1)),
    ("butter", (8, 1)),
];

static STANDARD: LazyLock<DensityTable> = LazyLock::new(DensityTable::builtin);

/// Curated density table keyed by base ingredient name.
#[derive(Debug, Clone, Default)]
pub struct DensityTable {
    ounces_per_cup: HashMap<String, Quantity>,
}

impl DensityTable {
    pub fn standard() -> &'static DensityTable {
        &STANDARD
    }

    /// The curated staples: flour, sugar, butter.
    pub fn builtin() -> Self {
        let mut table = Self::default();
        for (base, (n, d)) in BUILTIN_DENSITIES {
            if let Some(q) = Quantity::new(*n, *d) {
                table.insert(base, q);
            }
        }
        table
    }

    pub fn insert(&mut self, base: &str, ounces_per_cup: Quantity) {
        self.ounces_per_cup
            .insert(base.trim().to_lowercase(), ounces_per_cup);
    }

    pub fn ounces_per_cup(&self, base: &str) -> Option<&Quantity> {
        self.ounces_per_cup.get(base)
    }

    /// Grams per milliliter for `base`, derived from ounces per cup.
    pub fn grams_per_ml(&self, base: &str) -> Option<Quantity> {
        let oz_per_cup = self.ounces_per_cup(base)?.clone();
        let grams_per_oz = Quantity::new(567, 20)?;
        let ml_per_cup = Quantity::whole(240);
        oz_per_cup.checked_mul(&grams_per_oz)?.checked_div(&ml_per_cup)
    }

    pub fn contains(&self, base: &str) -> bool {
        self.ounces_per_cup.contains_key(base)
    }
}
