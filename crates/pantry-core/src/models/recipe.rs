use std::fmt;

use serde::{Deserialize, Serialize};

use super::ParsedIngredient;

/// Identity of a recipe in the external recipe store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecipeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One free-text ingredient line as scraped from a recipe. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawIngredientLine {
    pub source_recipe_id: RecipeId,
    pub text: String,
}

impl RawIngredientLine {
    pub fn new(source_recipe_id: impl Into<RecipeId>, text: impl Into<String>) -> Self {
        Self {
            source_recipe_id: source_recipe_id.into(),
            text: text.into(),
        }
    }
}

/// A selected recipe and its raw ingredient lines, in recipe order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeLines {
    pub recipe_id: RecipeId,
    pub lines: Vec<RawIngredientLine>,
}

impl RecipeLines {
    /// Build from plain text lines, stamping each with the recipe id.
    pub fn from_texts<I, S>(recipe_id: impl Into<RecipeId>, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let recipe_id = recipe_id.into();
        let lines = texts
            .into_iter()
            .map(|t| RawIngredientLine::new(recipe_id.clone(), t))
            .collect();
        Self { recipe_id, lines }
    }

    pub fn texts(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.text.clone()).collect()
    }
}

/// A recipe whose lines have already been parsed, in recipe order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    pub recipe_id: RecipeId,
    pub ingredients: Vec<ParsedIngredient>,
}

impl ParsedRecipe {
    pub fn new(recipe_id: impl Into<RecipeId>, ingredients: Vec<ParsedIngredient>) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            ingredients,
        }
    }
}
