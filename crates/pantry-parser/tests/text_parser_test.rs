//! Integration tests for the local text parser.

use pantry_core::traits::IIngredientParser;
use pantry_core::Quantity;
use pantry_parser::{parse, TextParser};

#[test]
fn parser_is_swappable_behind_trait() {
    let parser: Box<dyn IIngredientParser> = Box::new(TextParser::new());
    let p = parser.parse("3/4 cup sugar").unwrap();
    assert_eq!(p.quantity, Quantity::new(3, 4));
    assert_eq!(parser.name(), "text");
    assert!(parser.is_available());
}

#[test]
fn default_batch_preserves_order() {
    let parser = TextParser::new();
    let lines: Vec<String> = ["1 onion", "2 carrots", "salt"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let out = parser.parse_batch(&lines).unwrap();
    let names: Vec<&str> = out.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["onion", "carrots", "salt"]);
}

#[test]
fn zero_and_absent_are_distinct() {
    assert_eq!(parse("0 cups sugar").quantity, Some(Quantity::zero()));
    assert_eq!(parse("sugar").quantity, None);
}

#[test]
fn unknown_unit_word_stays_in_name() {
    let p = parse("2 handfuls spinach");
    assert_eq!(p.quantity, Quantity::new(2, 1));
    assert_eq!(p.unit, None);
    assert_eq!(p.name, "handfuls spinach");
}

#[test]
fn two_word_unit() {
    let p = parse("4 fl oz cream");
    assert_eq!(p.unit.as_deref(), Some("fluid ounce"));
    assert_eq!(p.name, "cream");
}

#[test]
fn for_serving_clause() {
    let p = parse("fresh parsley, for garnish");
    assert_eq!(p.quantity, None);
    assert_eq!(p.name, "fresh parsley");
    assert_eq!(p.modifiers, vec!["for garnish"]);
}

#[test]
fn notes_inside_name() {
    let p = parse("2 tablespoons butter divided");
    assert_eq!(p.name, "butter");
    assert_eq!(p.modifiers, vec!["divided"]);
}

#[test]
fn malformed_lines_never_panic() {
    for line in [
        "",
        "(",
        ")",
        "1/0 cup flour",
        "---",
        "½",
        "2 to",
        "of",
        ",,,",
        "plus",
        "1 cup plus",
        "a",
        "99999999999999999999999 eggs",
    ] {
        let _ = parse(line);
    }
}
