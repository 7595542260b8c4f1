//! Singularization of the head noun.

const INVARIANT: &[&str] = &[
    "molasses", "asparagus", "hummus", "couscous", "swiss", "series", "species", "grits", "bass",
    "citrus", "octopus", "watercress", "schnapps",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("leaves", "leaf"),
    ("loaves", "loaf"),
    ("halves", "half"),
    ("knives", "knife"),
    ("cookies", "cookie"),
    ("pies", "pie"),
    ("geese", "goose"),
    ("teeth", "tooth"),
    ("feet", "foot"),
];

/// Singular form of one lowercase word. Unknown shapes are returned as-is.
pub fn singularize(word: &str) -> String {
    if word.len() < 3 || INVARIANT.contains(&word) {
        return word.to_string();
    }
    if let Some((_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
        return (*singular).to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("oes") {
        return format!("{stem}o");
    }
    for suffix in ["ches", "shes", "sses", "xes", "zes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}

/// Singularize the last word of a phrase.
pub fn singularize_phrase(phrase: &str) -> String {
    match phrase.rsplit_once(' ') {
        Some((head, last)) => format!("{head} {}", singularize(last)),
        None => singularize(phrase),
    }
}
