//! Recipe files: one ingredient per line, file stem as recipe id.

use std::path::Path;

use pantry_core::errors::PantryResult;
use pantry_core::RecipeLines;
use tracing::debug;

/// Lines starting with this are ignored.
const COMMENT_PREFIX: char = '#';

pub fn read_recipe_file(path: &Path) -> PantryResult<RecipeLines> {
    let content = std::fs::read_to_string(path)?;
    let recipe_id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(recipe_from_text(&recipe_id, &content))
}

pub fn recipe_from_text(recipe_id: &str, content: &str) -> RecipeLines {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.starts_with(COMMENT_PREFIX))
        .collect();
    debug!(recipe = recipe_id, lines = lines.len(), "Read recipe");
    RecipeLines::from_texts(recipe_id, lines)
}

pub fn read_recipe_files<P: AsRef<Path>>(paths: &[P]) -> PantryResult<Vec<RecipeLines>> {
    paths.iter().map(|p| read_recipe_file(p.as_ref())).collect()
}
