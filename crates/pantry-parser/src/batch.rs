//! Parallel parsing of a recipe selection.
//!
//! Lines are independent, so recipes fan out over rayon. Output order
//! matches input order, both across recipes and within each recipe.

use pantry_core::traits::IIngredientParser;
use pantry_core::{ParsedIngredient, ParsedRecipe, RecipeLines};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::text_parser::TextParser;

/// Pair backend output with input lines by position.
///
/// Missing items and items with an empty name are re-parsed by `fallback`;
/// `raw_text` is always the caller's line. Returns the completed list and
/// the number of lines that had to be filled in.
pub fn complete_batch(
    lines: &[String],
    parsed: Vec<ParsedIngredient>,
    fallback: &TextParser,
) -> (Vec<ParsedIngredient>, usize) {
    let mut filled = 0;
    let mut parsed = parsed.into_iter();
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        match parsed.next() {
            Some(mut item) if !item.name.trim().is_empty() => {
                item.raw_text = line.clone();
                out.push(item);
            }
            _ => {
                if !line.trim().is_empty() {
                    filled += 1;
                }
                out.push(fallback.parse_line(line));
            }
        }
    }
    (out, filled)
}

/// Parse one recipe's lines with `parser`, falling back to the local parser
/// for the whole recipe if the backend fails.
pub fn parse_recipe(parser: &dyn IIngredientParser, recipe: &RecipeLines) -> ParsedRecipe {
    let lines = recipe.texts();
    let fallback = TextParser::new();
    let ingredients = match parser.parse_batch(&lines) {
        Ok(items) => {
            let (items, filled) = complete_batch(&lines, items, &fallback);
            if filled > 0 {
                warn!(
                    recipe = %recipe.recipe_id,
                    parser = parser.name(),
                    filled,
                    "parser left lines unparsed, filled by the local parser"
                );
            }
            items
        }
        Err(e) => {
            warn!(
                recipe = %recipe.recipe_id,
                parser = parser.name(),
                error = %e,
                "batch parse failed, falling back to the local parser"
            );
            lines.iter().map(|l| fallback.parse_line(l)).collect()
        }
    };
    ParsedRecipe::new(recipe.recipe_id.clone(), ingredients)
}

/// Parse every selected recipe in parallel.
pub fn parse_recipes(parser: &dyn IIngredientParser, recipes: &[RecipeLines]) -> Vec<ParsedRecipe> {
    debug!(recipes = recipes.len(), parser = parser.name(), "parsing recipe selection");
    recipes
        .par_iter()
        .map(|recipe| parse_recipe(parser, recipe))
        .collect()
}
