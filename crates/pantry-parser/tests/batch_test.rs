//! Tests for parallel recipe parsing.

use pantry_core::errors::{PantryResult, ParserError};
use pantry_core::traits::IIngredientParser;
use pantry_core::{ParsedIngredient, RecipeId, RecipeLines};
use pantry_parser::{parse_recipes, TextParser};

struct Broken;

impl IIngredientParser for Broken {
    fn parse(&self, _line: &str) -> PantryResult<ParsedIngredient> {
        Err(ParserError::BackendUnavailable {
            backend: "broken".to_string(),
            reason: "connection refused".to_string(),
        }
        .into())
    }

    fn name(&self) -> &str {
        "broken"
    }
}

fn selection() -> Vec<RecipeLines> {
    (0..12)
        .map(|i| {
            RecipeLines::from_texts(
                format!("recipe-{i:02}"),
                (0..8).map(|j| format!("{} cups item{j}", j + 1)),
            )
        })
        .collect()
}

#[test]
fn preserves_recipe_and_line_order() {
    let recipes = selection();
    let parsed = parse_recipes(&TextParser::new(), &recipes);
    assert_eq!(parsed.len(), recipes.len());
    for (i, recipe) in parsed.iter().enumerate() {
        assert_eq!(recipe.recipe_id, RecipeId::new(format!("recipe-{i:02}")));
        let names: Vec<String> = recipe.ingredients.iter().map(|p| p.name.clone()).collect();
        let expected: Vec<String> = (0..8).map(|j| format!("item{j}")).collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn failing_backend_degrades_to_local_parser() {
    let recipes = vec![RecipeLines::from_texts("soup", ["2 carrots", "1 quart stock"])];
    let parsed = parse_recipes(&Broken, &recipes);
    assert_eq!(parsed[0].ingredients.len(), 2);
    assert_eq!(parsed[0].ingredients[1].unit.as_deref(), Some("quart"));
    assert_eq!(parsed[0].ingredients[1].raw_text, "1 quart stock");
}

#[test]
fn empty_selection() {
    assert!(parse_recipes(&TextParser::new(), &[]).is_empty());
}
