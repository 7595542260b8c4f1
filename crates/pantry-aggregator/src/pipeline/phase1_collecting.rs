//! Phase 1: group parsed lines by canonical key.

use std::collections::HashMap;

use pantry_core::{CanonicalKey, ParsedIngredient, ParsedRecipe, RecipeId};
use pantry_normalizer::Normalizer;
use pantry_units::UnitTable;

/// One parsed line inside a group.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub recipe_id: RecipeId,
    pub ingredient: ParsedIngredient,
    /// Canonical unit name, or the lowercased token when the unit is unknown.
    pub unit: Option<String>,
}

/// All lines sharing one canonical key, in selection order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub key: CanonicalKey,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, Default)]
pub struct Collected {
    pub groups: Vec<Group>,
    pub line_count: usize,
    pub skipped_lines: usize,
}

/// Group every non-blank line. Groups are ordered by first appearance.
pub fn collect_groups(
    recipes: &[ParsedRecipe],
    normalizer: &Normalizer,
    units: &UnitTable,
) -> Collected {
    let mut collected = Collected::default();
    let mut index: HashMap<CanonicalKey, usize> = HashMap::new();

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            collected.line_count += 1;
            if ingredient.is_blank() || ingredient.name.trim().is_empty() {
                collected.skipped_lines += 1;
                continue;
            }
            let key = normalizer.normalize_parsed(ingredient);
            let member = Member {
                recipe_id: recipe.recipe_id.clone(),
                unit: canonical_unit(units, ingredient.unit.as_deref()),
                ingredient: ingredient.clone(),
            };
            match index.get(&key) {
                Some(&i) => collected.groups[i].members.push(member),
                None => {
                    index.insert(key.clone(), collected.groups.len());
                    collected.groups.push(Group {
                        key,
                        members: vec![member],
                    });
                }
            }
        }
    }
    collected
}

fn canonical_unit(units: &UnitTable, unit: Option<&str>) -> Option<String> {
    let raw = unit?.trim();
    if raw.is_empty() {
        return None;
    }
    let name = units
        .get(raw)
        .or_else(|| units.lookup(raw))
        .map(|def| def.name.to_string())
        .unwrap_or_else(|| raw.to_lowercase());
    Some(name)
}
