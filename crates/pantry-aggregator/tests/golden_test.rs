//! Golden aggregation scenarios from `test-fixtures/golden/aggregation`.

use pantry_aggregator::Aggregator;
use pantry_core::{Category, PantryConfig, RecipeLines};
use pantry_parser::TextParser;
use serde::Deserialize;
use test_fixtures::{list_fixtures, load_fixture, relative_to_root};

#[derive(Debug, Deserialize)]
struct GoldenRecipe {
    recipe_id: String,
    lines: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GoldenLine {
    quantity: String,
    unit: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoldenEntry {
    key: String,
    category: Category,
    total: Option<String>,
    unit: Option<String>,
    unmerged: Vec<GoldenLine>,
    needs_review: bool,
}

#[derive(Debug, Deserialize)]
struct GoldenCase {
    description: String,
    recipes: Vec<GoldenRecipe>,
    expected: Vec<GoldenEntry>,
}

fn run_case(path: &str) {
    let case: GoldenCase = load_fixture(path);
    let recipes: Vec<RecipeLines> = case
        .recipes
        .iter()
        .map(|r| RecipeLines::from_texts(r.recipe_id.as_str(), r.lines.iter().cloned()))
        .collect();
    let aggregator = Aggregator::new(&PantryConfig::default()).unwrap();
    let list = aggregator.generate_from_lines(&TextParser::new(), &recipes);

    assert_eq!(
        list.len(),
        case.expected.len(),
        "{}: {}",
        path,
        case.description
    );
    for expected in &case.expected {
        let entry = list
            .find(&expected.key)
            .unwrap_or_else(|| panic!("{path}: missing entry {}", expected.key));
        assert_eq!(entry.category, expected.category, "{path}: {}", expected.key);
        assert_eq!(
            entry.total_quantity.as_ref().map(|q| q.to_ratio_string()),
            expected.total,
            "{path}: {} total",
            expected.key
        );
        assert_eq!(entry.display_unit, expected.unit, "{path}: {} unit", expected.key);
        let unmerged: Vec<(String, Option<String>)> = entry
            .unmerged
            .iter()
            .map(|l| (l.quantity.to_ratio_string(), l.unit.clone()))
            .collect();
        let wanted: Vec<(String, Option<String>)> = expected
            .unmerged
            .iter()
            .map(|l| (l.quantity.clone(), l.unit.clone()))
            .collect();
        assert_eq!(unmerged, wanted, "{path}: {} unmerged", expected.key);
        assert_eq!(
            entry.needs_review(),
            expected.needs_review,
            "{path}: {} review flag",
            expected.key
        );
    }
}

#[test]
fn golden_aggregation_cases() {
    let files = list_fixtures("golden/aggregation");
    assert!(!files.is_empty(), "no golden aggregation fixtures found");
    for file in &files {
        run_case(&relative_to_root(file));
    }
}
