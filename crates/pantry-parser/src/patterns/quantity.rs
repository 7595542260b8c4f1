//! Leading amounts, ranges, and package-size tokens.

use pantry_core::Quantity;
use pantry_units::{UnitDef, UnitTable};

use super::{amount, parser_pattern};

parser_pattern!(
    RE_LEADING_AMOUNT,
    concat!(r"(?i)^(", amount!(), r")(?:\s*(?:-|\bto\b|\bor\b)\s*(", amount!(), r"))?")
);

// "14.5-ounce", "15 oz": a package size in front of the real unit.
parser_pattern!(RE_SIZE_TOKEN, r"^(\d+(?:\.\d+)?|\d+/\d+)(?:\s*-\s*|\s*)([A-Za-z][A-Za-z.]*)");

parser_pattern!(
    RE_APPROXIMATION,
    r"(?i)^(?:about|approximately|approx\.?|around|roughly|scant|heaping|generous)\s+"
);

parser_pattern!(RE_ARTICLE, r"(?i)^an?\s+");

static VULGAR_FRACTIONS: &[(char, &str)] = &[
    ('½', "1/2"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅕', "1/5"),
    ('⅖', "2/5"),
    ('⅗', "3/5"),
    ('⅘', "4/5"),
    ('⅙', "1/6"),
    ('⅚', "5/6"),
    ('⅐', "1/7"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
    ('⅑', "1/9"),
    ('⅒', "1/10"),
];

/// Expand vulgar fractions ("1½" -> "1 1/2"), unify dashes and the fraction
/// slash, and collapse whitespace.
pub fn normalize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        if let Some((_, expansion)) = VULGAR_FRACTIONS.iter().find(|(v, _)| *v == c) {
            out.push(' ');
            out.push_str(expansion);
            out.push(' ');
            continue;
        }
        match c {
            '\u{2044}' | '\u{2215}' => out.push('/'),
            '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2212}' => out.push('-'),
            '\u{00a0}' => out.push(' '),
            _ => out.push(c),
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse one amount as matched by `amount!()`.
pub fn parse_amount(text: &str) -> Option<Quantity> {
    text.parse().ok()
}

/// A leading amount or range. Ranges resolve to their upper bound.
/// Returns the amount and the number of bytes consumed.
pub fn leading_amount(text: &str) -> Option<(Quantity, usize)> {
    let re = RE_LEADING_AMOUNT.as_ref()?;
    let caps = re.captures(text)?;
    let whole = caps.get(0)?;
    let low = parse_amount(caps.get(1)?.as_str())?;
    let amount = match caps.get(2).and_then(|m| parse_amount(m.as_str())) {
        Some(high) => low.max(high),
        None => low,
    };
    // "1/2" must not be cut out of "1/2x"-style tokens.
    if text[whole.end()..].starts_with(|c: char| c.is_ascii_digit() || c == '/') {
        return None;
    }
    Some((amount, whole.end()))
}

/// Strip a leading "about"/"approximately" when an amount follows it.
pub fn strip_approximation(text: &str) -> &str {
    let Some(re) = RE_APPROXIMATION.as_ref() else {
        return text;
    };
    match re.find(text) {
        Some(m) if text[m.end()..].starts_with(|c: char| c.is_ascii_digit()) => &text[m.end()..],
        _ => text,
    }
}

/// Length of a leading "a "/"an " article.
pub fn leading_article(text: &str) -> Option<usize> {
    RE_ARTICLE.as_ref()?.find(text).map(|m| m.end())
}

/// A package-size token such as "14.5-ounce" directly after the count.
/// Returns the token text and bytes consumed.
pub fn size_token<'a>(text: &'a str, units: &UnitTable) -> Option<(&'a str, usize)> {
    let re = RE_SIZE_TOKEN.as_ref()?;
    let caps = re.captures(text)?;
    let whole = caps.get(0)?;
    let word = caps.get(2)?.as_str();
    let def: &UnitDef = units.lookup(word)?;
    // Only volume/weight sizes describe a package; "2 cans" is not a size.
    if def.kind == pantry_core::UnitKind::Count {
        return None;
    }
    Some((whole.as_str(), whole.end()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: u64, d: u64) -> Quantity {
        Quantity::new(n, d).unwrap()
    }

    #[test]
    fn expands_vulgar_fractions() {
        assert_eq!(normalize_text("1½ cups"), "1 1/2 cups");
        assert_eq!(normalize_text("¾ cup"), "3/4 cup");
        assert_eq!(normalize_text("2–3 cloves"), "2-3 cloves");
    }

    #[test]
    fn leading_amounts() {
        assert_eq!(leading_amount("1 1/2 cups").map(|r| r.0), Some(q(3, 2)));
        assert_eq!(leading_amount("3/4 cup").map(|r| r.0), Some(q(3, 4)));
        assert_eq!(leading_amount("1.5 lb").map(|r| r.0), Some(q(3, 2)));
        assert_eq!(leading_amount("200g flour"), Some((q(200, 1), 3)));
        assert!(leading_amount("salt").is_none());
    }

    #[test]
    fn ranges_take_upper_bound() {
        assert_eq!(leading_amount("2-3 cups").map(|r| r.0), Some(q(3, 1)));
        assert_eq!(leading_amount("2 - 3 cups").map(|r| r.0), Some(q(3, 1)));
        assert_eq!(leading_amount("2 to 3 cups").map(|r| r.0), Some(q(3, 1)));
        assert_eq!(leading_amount("1 or 2 eggs").map(|r| r.0), Some(q(2, 1)));
    }

    #[test]
    fn range_words_need_an_amount() {
        assert_eq!(leading_amount("2 tomatoes"), Some((q(2, 1), 1)));
        assert_eq!(leading_amount("1 orange"), Some((q(1, 1), 1)));
    }

    #[test]
    fn size_tokens() {
        let units = UnitTable::standard();
        assert_eq!(size_token("14.5-ounce cans", units), Some(("14.5-ounce", 10)));
        assert_eq!(size_token("15 oz can", units), Some(("15 oz", 5)));
        assert!(size_token("2 cans", units).is_none());
        assert!(size_token("cans", units).is_none());
    }

    #[test]
    fn approximation_only_before_amount() {
        assert_eq!(strip_approximation("about 2 cups"), "2 cups");
        assert_eq!(strip_approximation("roughly chopped"), "roughly chopped");
    }
}
