//! Asides and trailing clauses that carry no authoritative amount.
//!
//! Everything here runs on lowercased text.

use super::{amount, parser_pattern, push_modifier};

parser_pattern!(RE_PARENTHETICAL, r"\(([^()]*)\)|\[([^\[\]]*)\]");

parser_pattern!(RE_PLUS_MINUS, concat!(r"^(?:plus|minus)\s+", amount!(), r"\s*"));

parser_pattern!(RE_OF, r"^of\s+");

parser_pattern!(RE_CLAUSE_START, r"\s(?:plus|or|and/or|for)\s");

parser_pattern!(
    RE_NOTE,
    r"\b(?:to taste|as needed|if needed|if desired|if necessary|optional|divided|at room temperature|room temperature|more or less)\b"
);

/// Move `( ... )` and `[ ... ]` asides into `modifiers`, innermost first.
pub fn take_parentheticals(text: &str, modifiers: &mut Vec<String>) -> String {
    let Some(re) = RE_PARENTHETICAL.as_ref() else {
        return text.to_string();
    };
    let mut current = text.to_string();
    for _ in 0..4 {
        if !re.is_match(&current) {
            break;
        }
        for caps in re.captures_iter(&current) {
            if let Some(inner) = caps.get(1).or_else(|| caps.get(2)) {
                push_modifier(modifiers, inner.as_str());
            }
        }
        current = re.replace_all(&current, " ").into_owned();
    }
    current
        .replace(['(', ')', '[', ']'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Length of a leading `plus 2 ` / `minus 1 ` prefix, before its unit.
pub fn plus_minus_prefix(text: &str) -> Option<usize> {
    RE_PLUS_MINUS.as_ref()?.find(text).map(|m| m.end())
}

/// Drop a leading "of " ("2 cups of flour").
pub fn strip_of(text: &str) -> &str {
    match RE_OF.as_ref().and_then(|re| re.find(text)) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// Split off everything from the first "plus", "or", "and/or", or "for" clause.
pub fn take_trailing_clause<'a>(text: &'a str, modifiers: &mut Vec<String>) -> &'a str {
    let Some(re) = RE_CLAUSE_START.as_ref() else {
        return text;
    };
    match re.find(text) {
        Some(m) => {
            push_modifier(modifiers, &text[m.start()..]);
            &text[..m.start()]
        }
        None => text,
    }
}

/// Move usage notes ("to taste", "divided") out of the text.
pub fn take_notes(text: &str, modifiers: &mut Vec<String>) -> String {
    let Some(re) = RE_NOTE.as_ref() else {
        return text.to_string();
    };
    for m in re.find_iter(text) {
        push_modifier(modifiers, m.as_str());
    }
    re.replace_all(text, " ").into_owned()
}
