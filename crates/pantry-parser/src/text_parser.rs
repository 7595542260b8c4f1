//! Deterministic, pattern-based ingredient line parser.
//!
//! Pipeline per line:
//! 1. Normalize unicode fractions and dashes
//! 2. Move parenthetical asides into modifiers
//! 3. Leading amount (mixed numbers, decimals, ranges take the upper bound)
//! 4. Package-size tokens ("14.5-ounce") into modifiers
//! 5. Unit token, resolved against the unit table
//! 6. "plus 2 tablespoons" style additions into modifiers
//! 7. Comma tail, trailing clauses, and usage notes into modifiers
//! 8. Preparation words out of the name

use pantry_core::errors::PantryResult;
use pantry_core::traits::IIngredientParser;
use pantry_core::{ParsedIngredient, Quantity};
use pantry_units::{UnitDef, UnitTable};

use crate::patterns::{clauses, prep, push_modifier, quantity};

/// Local parser. Never fails: anything it cannot classify ends up in the
/// name or the modifiers.
#[derive(Debug, Clone, Copy)]
pub struct TextParser {
    units: &'static UnitTable,
}

impl Default for TextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TextParser {
    pub fn new() -> Self {
        Self {
            units: UnitTable::standard(),
        }
    }

    pub fn parse_line(&self, raw: &str) -> ParsedIngredient {
        let text = quantity::normalize_text(raw);
        if text.is_empty() {
            return ParsedIngredient {
                quantity: None,
                unit: None,
                name: String::new(),
                modifiers: Vec::new(),
                raw_text: raw.to_string(),
            };
        }

        let mut modifiers = Vec::new();
        let text = clauses::take_parentheticals(&text, &mut modifiers);
        let mut rest: &str = quantity::strip_approximation(&text);
        let mut amount: Option<Quantity> = None;
        let mut unit: Option<String> = None;

        if let Some((value, len)) = quantity::leading_amount(rest) {
            amount = Some(value);
            rest = trim_joiners(&rest[len..]);
            while let Some((size, len)) = quantity::size_token(rest, self.units) {
                push_modifier(&mut modifiers, size);
                rest = trim_joiners(&rest[len..]);
            }
            if let Some((def, len)) = self.leading_unit(rest) {
                unit = Some(def.name.to_string());
                rest = rest[len..].trim_start();
            }
        } else if let Some(article) = quantity::leading_article(rest) {
            // "a pinch of salt"
            if let Some((def, len)) = self.leading_unit(&rest[article..]) {
                amount = Some(Quantity::whole(1));
                unit = Some(def.name.to_string());
                rest = rest[article + len..].trim_start();
            }
        }

        let lowered = rest.to_lowercase();
        let mut rest: &str = clauses::strip_of(&lowered);

        if unit.is_some() {
            while let Some(len) = clauses::plus_minus_prefix(rest) {
                let after = &rest[len..];
                let Some((_, unit_len)) = self.leading_unit(after) else {
                    break;
                };
                push_modifier(&mut modifiers, &rest[..len + unit_len]);
                rest = clauses::strip_of(after[unit_len..].trim_start());
            }
        }

        let (head, tail) = match rest.find([',', ';']) {
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (rest, ""),
        };
        for piece in tail.split([',', ';']) {
            push_modifier(&mut modifiers, piece);
        }

        let head = clauses::take_trailing_clause(head, &mut modifiers);
        let head = clauses::take_notes(head, &mut modifiers);
        let name = clean_name(&prep::take_prep_words(&head, &mut modifiers));
        let name = if name.is_empty() {
            clean_name(&text.to_lowercase())
        } else {
            name
        };

        ParsedIngredient {
            quantity: amount,
            unit,
            name,
            modifiers,
            raw_text: raw.to_string(),
        }
    }

    /// The longest unit token at the start of `text`, and the bytes it spans.
    fn leading_unit(&self, text: &str) -> Option<(&'static UnitDef, usize)> {
        let ends = token_ends(text, self.units.max_words());
        ends.iter().rev().find_map(|&end| {
            let candidate = text[..end].trim_end_matches([',', ';', ':']);
            self.units.lookup(candidate).map(|def| (def, end))
        })
    }
}

impl IIngredientParser for TextParser {
    fn parse(&self, line: &str) -> PantryResult<ParsedIngredient> {
        Ok(self.parse_line(line))
    }

    fn name(&self) -> &str {
        "text"
    }
}

/// Byte offsets where each of the first `max` whitespace-separated tokens ends.
fn token_ends(text: &str, max: usize) -> Vec<usize> {
    let mut ends = Vec::with_capacity(max);
    let mut in_token = false;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if in_token {
                ends.push(i);
                if ends.len() == max {
                    return ends;
                }
            }
            in_token = false;
        } else {
            in_token = true;
        }
    }
    if in_token && ends.len() < max {
        ends.push(text.len());
    }
    ends
}

fn trim_joiners(text: &str) -> &str {
    text.trim_start_matches(|c: char| c == '-' || c.is_whitespace())
}

fn clean_name(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| matches!(c, ',' | ';' | ':' | '.' | '-' | '*') || c.is_whitespace())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ParsedIngredient {
        TextParser::new().parse_line(line)
    }

    fn q(n: u64, d: u64) -> Option<Quantity> {
        Quantity::new(n, d)
    }

    #[test]
    fn token_ends_stops_at_max() {
        assert_eq!(token_ends("fl oz milk", 2), vec![2, 5]);
        assert_eq!(token_ends("cup", 2), vec![3]);
        assert!(token_ends("   ", 2).is_empty());
    }

    #[test]
    fn salt_to_taste() {
        let p = parse("salt to taste");
        assert_eq!(p.quantity, None);
        assert_eq!(p.unit, None);
        assert_eq!(p.name, "salt");
        assert_eq!(p.modifiers, vec!["to taste"]);
    }

    #[test]
    fn canned_tomatoes_with_aside() {
        let p = parse("2 (15 oz) cans diced tomatoes");
        assert_eq!(p.quantity, q(2, 1));
        assert_eq!(p.unit.as_deref(), Some("can"));
        assert_eq!(p.name, "tomatoes");
        assert!(p.modifiers.contains(&"15 oz".to_string()));
        assert!(p.modifiers.contains(&"diced".to_string()));
    }

    #[test]
    fn aside_never_overrides_primary_amount() {
        let p = parse("1 cup (2 sticks) butter, softened");
        assert_eq!(p.quantity, q(1, 1));
        assert_eq!(p.unit.as_deref(), Some("cup"));
        assert_eq!(p.name, "butter");
        assert_eq!(p.modifiers, vec!["2 sticks", "softened"]);
    }

    #[test]
    fn mixed_numbers_and_vulgar_fractions() {
        assert_eq!(parse("1 1/2 cups sugar").quantity, q(3, 2));
        assert_eq!(parse("1½ cups sugar").quantity, q(3, 2));
        let p = parse("½ cup milk");
        assert_eq!(p.quantity, q(1, 2));
        assert_eq!(p.unit.as_deref(), Some("cup"));
        assert_eq!(p.name, "milk");
    }

    #[test]
    fn range_takes_upper_bound() {
        let p = parse("2-3 cloves garlic, minced");
        assert_eq!(p.quantity, q(3, 1));
        assert_eq!(p.unit.as_deref(), Some("clove"));
        assert_eq!(p.name, "garlic");
        assert_eq!(p.modifiers, vec!["minced"]);
    }

    #[test]
    fn comma_tail_becomes_modifier() {
        let p = parse("2 cups flour, sifted");
        assert_eq!(p.quantity, q(2, 1));
        assert_eq!(p.unit.as_deref(), Some("cup"));
        assert_eq!(p.name, "flour");
        assert_eq!(p.modifiers, vec!["sifted"]);
    }

    #[test]
    fn plus_clause_is_not_added() {
        let p = parse("1 cup plus 2 tablespoons flour");
        assert_eq!(p.quantity, q(1, 1));
        assert_eq!(p.unit.as_deref(), Some("cup"));
        assert_eq!(p.name, "flour");
        assert_eq!(p.modifiers, vec!["plus 2 tablespoons"]);
    }

    #[test]
    fn fused_unit_and_decimal() {
        let p = parse("200g flour");
        assert_eq!(p.quantity, q(200, 1));
        assert_eq!(p.unit.as_deref(), Some("gram"));
        let p = parse("1.5 lbs ground beef");
        assert_eq!(p.quantity, q(3, 2));
        assert_eq!(p.unit.as_deref(), Some("pound"));
        assert_eq!(p.name, "ground beef");
    }

    #[test]
    fn package_size_token() {
        let p = parse("2 14.5-ounce cans diced tomatoes");
        assert_eq!(p.quantity, q(2, 1));
        assert_eq!(p.unit.as_deref(), Some("can"));
        assert_eq!(p.name, "tomatoes");
        assert_eq!(p.modifiers, vec!["14.5-ounce", "diced"]);
    }

    #[test]
    fn article_with_unit() {
        let p = parse("a pinch of salt");
        assert_eq!(p.quantity, q(1, 1));
        assert_eq!(p.unit.as_deref(), Some("pinch"));
        assert_eq!(p.name, "salt");
    }

    #[test]
    fn bare_count_has_no_unit() {
        let p = parse("3 large eggs");
        assert_eq!(p.quantity, q(3, 1));
        assert_eq!(p.unit, None);
        assert_eq!(p.name, "large eggs");
    }

    #[test]
    fn case_sensitive_t() {
        assert_eq!(parse("1 t vanilla").unit.as_deref(), Some("teaspoon"));
        assert_eq!(parse("1 T butter").unit.as_deref(), Some("tablespoon"));
    }

    #[test]
    fn or_clause_and_of() {
        let p = parse("2 tablespoons of butter or margarine");
        assert_eq!(p.unit.as_deref(), Some("tablespoon"));
        assert_eq!(p.name, "butter");
        assert_eq!(p.modifiers, vec!["or margarine"]);
    }

    #[test]
    fn adverb_with_prep_word() {
        let p = parse("1 medium onion, finely chopped");
        assert_eq!(p.name, "medium onion");
        assert_eq!(p.modifiers, vec!["finely chopped"]);
        let p = parse("1 cup packed brown sugar");
        assert_eq!(p.name, "brown sugar");
        assert_eq!(p.modifiers, vec!["packed"]);
    }

    #[test]
    fn approximation_prefix() {
        let p = parse("about 2 cups broth");
        assert_eq!(p.quantity, q(2, 1));
        assert_eq!(p.name, "broth");
    }

    #[test]
    fn blank_line() {
        let p = parse("   ");
        assert!(p.is_blank());
        assert_eq!(p.quantity, None);
    }

    #[test]
    fn nothing_but_prep_words_keeps_text_as_name() {
        let p = parse("chopped");
        assert_eq!(p.name, "chopped");
        assert_eq!(p.modifiers, vec!["chopped"]);
    }

    #[test]
    fn raw_text_is_preserved() {
        let raw = "  2 Cups Flour, sifted ";
        let p = parse(raw);
        assert_eq!(p.raw_text, raw);
        assert_eq!(p.name, "flour");
    }
}
