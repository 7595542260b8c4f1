//! Property tests for shopping-list generation.

use pantry_aggregator::{Aggregator, ShoppingList};
use pantry_core::{PantryConfig, ParsedIngredient, ParsedRecipe, Quantity, ReviewIssue};
use proptest::prelude::*;

/// Each name draws its unit from a set mixing convertible, density-bridged,
/// and incompatible units, so groups regularly hold more than one unit.
const NAMES: &[(&str, &[Option<&str>])] = &[
    ("flour", &[Some("cup"), Some("tablespoon"), Some("ounce")]),
    ("tomatoes", &[Some("cup"), Some("tablespoon"), Some("can")]),
    ("rice", &[Some("cup"), Some("ounce")]),
    ("milk", &[Some("cup"), Some("milliliter"), Some("quart")]),
    ("butter", &[Some("tablespoon"), Some("stick"), Some("pound")]),
    ("eggs", &[None]),
    ("garlic", &[Some("clove"), Some("teaspoon")]),
];

fn amount() -> impl Strategy<Value = Quantity> {
    prop_oneof![
        8 => (1u64..40, 1u64..9).prop_map(|(n, d)| Quantity::new(n, d).unwrap()),
        1 => (u64::MAX / 4..=u64::MAX).prop_map(Quantity::whole),
    ]
}

fn ingredient() -> impl Strategy<Value = ParsedIngredient> {
    (0..NAMES.len(), any::<prop::sample::Index>(), amount()).prop_map(|(i, pick, quantity)| {
        let (name, units) = NAMES[i];
        let unit = units[pick.index(units.len())];
        ParsedIngredient {
            raw_text: format!("{quantity} {} {name}", unit.unwrap_or("")),
            quantity: Some(quantity),
            unit: unit.map(str::to_string),
            name: name.to_string(),
            modifiers: vec![],
        }
    })
}

fn recipe(id: usize) -> impl Strategy<Value = ParsedRecipe> {
    prop::collection::vec(ingredient(), 1..8)
        .prop_map(move |items| ParsedRecipe::new(format!("r{id}"), items))
}

fn selection() -> impl Strategy<Value = Vec<ParsedRecipe>> {
    (recipe(0), recipe(1), recipe(2)).prop_map(|(a, b, c)| vec![a, b, c])
}

fn generate(recipes: &[ParsedRecipe]) -> ShoppingList {
    Aggregator::new(&PantryConfig::default())
        .unwrap()
        .generate(recipes)
}

proptest! {
    #[test]
    fn generation_is_idempotent(recipes in selection()) {
        prop_assert_eq!(generate(&recipes), generate(&recipes));
    }

    #[test]
    fn adding_a_recipe_never_decreases_totals(recipes in selection(), extra in recipe(9)) {
        let before = generate(&recipes);
        let mut more = recipes.clone();
        more.push(extra);
        let after = generate(&more);
        for entry in before.entries() {
            let grown = after.find(entry.canonical_key.as_str()).unwrap();
            prop_assert_eq!(&grown.display_unit, &entry.display_unit);
            prop_assert!(grown.total_quantity >= entry.total_quantity);
        }
    }

    #[test]
    fn totals_never_fall_below_the_exact_sum(recipes in selection()) {
        let list = generate(&recipes);
        for entry in list.entries() {
            if entry.has_issue(|i| matches!(i, ReviewIssue::AmountOverflow { .. })) {
                continue;
            }
            let same_unit: Vec<Quantity> = entry
                .source_lines_for_review
                .iter()
                .filter(|i| i.unit == entry.display_unit)
                .filter_map(|i| i.quantity.clone())
                .collect();
            let (Some(exact), Some(total)) =
                (Quantity::checked_sum(&same_unit), &entry.total_quantity)
            else {
                continue;
            };
            prop_assert!(*total >= exact);
        }
    }

    #[test]
    fn mixed_units_are_never_summed_silently(recipes in selection()) {
        let list = generate(&recipes);
        for entry in list.entries() {
            if !entry.unmerged.is_empty() {
                prop_assert!(entry.needs_review());
            }
        }
    }

    #[test]
    fn no_line_is_dropped(recipes in selection()) {
        let list = generate(&recipes);
        let lines: usize = recipes.iter().map(|r| r.ingredients.len()).sum();
        let kept: usize = list.entries().map(|e| e.source_lines_for_review.len()).sum();
        prop_assert_eq!(kept, lines);
    }

    #[test]
    fn single_line_round_trips_in_its_own_unit(item in ingredient()) {
        let list = generate(&[ParsedRecipe::new("solo", vec![item.clone()])]);
        prop_assert_eq!(list.len(), 1);
        let entry = list.entries().next().unwrap();
        prop_assert_eq!(&entry.display_unit, &item.unit);
        let quantity = item.quantity.clone().unwrap();
        let total = entry.total_quantity.clone().unwrap();
        prop_assert!(total >= quantity);
    }
}
