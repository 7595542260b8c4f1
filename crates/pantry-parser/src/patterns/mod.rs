//! Compiled patterns and word lists used by the text parser.

pub mod clauses;
pub mod prep;
pub mod quantity;

/// Declare a lazily compiled regex. Compilation failure yields `None` and the
/// step that uses it is skipped.
macro_rules! parser_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: std::sync::LazyLock<Option<regex::Regex>> =
            std::sync::LazyLock::new(|| regex::Regex::new($regex_str).ok());
    };
}

/// One amount: mixed number, simple fraction, decimal, or integer.
macro_rules! amount {
    () => {
        r"(?:\d+\s+\d+/\d+|\d+/\d+|\d*\.\d+|\d+)"
    };
}

pub(crate) use amount;
pub(crate) use parser_pattern;

/// Trim, lowercase, and push a modifier unless it is empty or already present.
pub fn push_modifier(modifiers: &mut Vec<String>, text: &str) {
    let cleaned = text
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '.' | '-'))
        .to_lowercase();
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if !cleaned.is_empty() && !modifiers.contains(&cleaned) {
        modifiers.push(cleaned);
    }
}
