//! Recognized units, their kinds, and their factors to the kind's base unit.

use std::collections::HashMap;
use std::sync::LazyLock;

use pantry_core::{Quantity, UnitKind};

/// One recognized unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitDef {
    /// Canonical singular name, as stored in `ParsedIngredient::unit`.
    pub name: &'static str,
    pub plural: &'static str,
    pub kind: UnitKind,
    /// Size in the kind's base unit (ml for volume, g for weight) as `(numer, denom)`.
    /// Count units use `(1, 1)` and never convert to another unit.
    pub to_base: (u64, u64),
    /// Abbreviations and spelling variants, matched case-insensitively.
    pub aliases: &'static [&'static str],
}

impl UnitDef {
    pub fn factor(&self) -> Quantity {
        Quantity::new(self.to_base.0, self.to_base.1).unwrap_or_else(|| Quantity::whole(1))
    }

    /// Name to show next to `quantity`: singular for amounts up to one.
    pub fn display_for(&self, quantity: &Quantity) -> &'static str {
        if *quantity > Quantity::whole(1) {
            self.plural
        } else {
            self.name
        }
    }
}

const fn unit(
    name: &'static str,
    plural: &'static str,
    kind: UnitKind,
    to_base: (u64, u64),
    aliases: &'static [&'static str],
) -> UnitDef {
    UnitDef {
        name,
        plural,
        kind,
        to_base,
        aliases,
    }
}

use UnitKind::{Count, Volume, Weight};

/// US customary volumes, with 1 cup = 240 ml and 1 fl oz = 30 ml so the
/// customary ladder stays exact.
static UNITS: &[UnitDef] = &[
    // Volume (base: milliliter)
    unit("teaspoon", "teaspoons", Volume, (5, 1), &["tsp", "tsps", "teasp"]),
    unit("tablespoon", "tablespoons", Volume, (15, 1), &["tbsp", "tbsps", "tbs", "tbl", "tbls", "tblsp"]),
    unit("fluid ounce", "fluid ounces", Volume, (30, 1), &["fl oz", "fl. oz", "fl ozs", "floz"]),
    unit("cup", "cups", Volume, (240, 1), &["c"]),
    unit("pint", "pints", Volume, (480, 1), &["pt", "pts"]),
    unit("quart", "quarts", Volume, (960, 1), &["qt", "qts"]),
    unit("gallon", "gallons", Volume, (3840, 1), &["gal", "gals"]),
    unit("milliliter", "milliliters", Volume, (1, 1), &["ml", "mls", "millilitre", "millilitres"]),
    unit("liter", "liters", Volume, (1000, 1), &["l", "litre", "litres", "ltr"]),
    // Weight (base: gram)
    unit("ounce", "ounces", Weight, (567, 20), &["oz", "ozs"]),
    unit("pound", "pounds", Weight, (2268, 5), &["lb", "lbs"]),
    unit("gram", "grams", Weight, (1, 1), &["g", "gr", "gm", "gms", "gramme", "grammes"]),
    unit("kilogram", "kilograms", Weight, (1000, 1), &["kg", "kgs", "kilo", "kilos"]),
    // Count
    unit("can", "cans", Count, (1, 1), &["tin", "tins"]),
    unit("clove", "cloves", Count, (1, 1), &[]),
    unit("piece", "pieces", Count, (1, 1), &["pc", "pcs"]),
    unit("stick", "sticks", Count, (1, 1), &[]),
    unit("slice", "slices", Count, (1, 1), &[]),
    unit("head", "heads", Count, (1, 1), &[]),
    unit("bunch", "bunches", Count, (1, 1), &[]),
    unit("package", "packages", Count, (1, 1), &["pkg", "pkgs", "packet", "packets", "pack", "packs"]),
    unit("jar", "jars", Count, (1, 1), &[]),
    unit("bottle", "bottles", Count, (1, 1), &[]),
    unit("sprig", "sprigs", Count, (1, 1), &[]),
    unit("stalk", "stalks", Count, (1, 1), &[]),
    unit("pinch", "pinches", Count, (1, 1), &[]),
    unit("dash", "dashes", Count, (1, 1), &[]),
];

/// Tokens whose meaning depends on case: `t` is a teaspoon, `T` a tablespoon.
static CASE_SENSITIVE: &[(&str, &str)] = &[("t", "teaspoon"), ("T", "tablespoon")];

static STANDARD: LazyLock<UnitTable> = LazyLock::new(UnitTable::build);

/// Registry of known units, looked up by name, plural, or abbreviation.
#[derive(Debug)]
pub struct UnitTable {
    by_token: HashMap<String, &'static UnitDef>,
    by_name: HashMap<&'static str, &'static UnitDef>,
    max_words: usize,
}

impl UnitTable {
    /// The shared standard table.
    pub fn standard() -> &'static UnitTable {
        &STANDARD
    }

    fn build() -> Self {
        let mut by_token = HashMap::new();
        let mut by_name = HashMap::new();
        for def in UNITS {
            by_name.insert(def.name, def);
            for token in [def.name, def.plural].iter().chain(def.aliases.iter()) {
                by_token.insert(token.to_lowercase(), def);
            }
        }
        let max_words = by_token
            .keys()
            .map(|k| k.split_whitespace().count())
            .max()
            .unwrap_or(1);
        Self {
            by_token,
            by_name,
            max_words,
        }
    }

    /// Resolve a unit token as written in a recipe ("Tbsp.", "cups", "T").
    pub fn lookup(&self, token: &str) -> Option<&'static UnitDef> {
        let token = token.trim();
        let token = token.strip_suffix('.').unwrap_or(token);
        if token.is_empty() {
            return None;
        }
        if let Some((_, name)) = CASE_SENSITIVE.iter().find(|(t, _)| *t == token) {
            return self.by_name.get(name).copied();
        }
        let lowered = token.to_lowercase();
        let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
        self.by_token.get(&collapsed).copied()
    }

    /// Look up by canonical name only.
    pub fn get(&self, name: &str) -> Option<&'static UnitDef> {
        self.by_name.get(name).copied()
    }

    /// Canonical name for a recipe token, if it is a unit.
    pub fn canonical_name(&self, token: &str) -> Option<&'static str> {
        self.lookup(token).map(|def| def.name)
    }

    pub fn is_unit(&self, token: &str) -> bool {
        self.lookup(token).is_some()
    }

    /// Kind of a stored unit. No unit means a bare count ("3 eggs");
    /// an unrecognized unit is `Unspecified`.
    pub fn kind_of(&self, unit: Option<&str>) -> UnitKind {
        match unit {
            None => UnitKind::Count,
            Some(u) => self
                .get(u)
                .or_else(|| self.lookup(u))
                .map_or(UnitKind::Unspecified, |def| def.kind),
        }
    }

    /// Longest multi-word unit token ("fluid ounces" is 2).
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static UnitDef> {
        UNITS.iter()
    }
}
