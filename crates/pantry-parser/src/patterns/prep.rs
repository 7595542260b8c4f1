//! Preparation vocabulary: words that describe what to do with an
//! ingredient, not what to buy.

use super::push_modifier;

pub const PREP_WORDS: &[&str] = &[
    "beaten", "blanched", "boiled", "chilled", "chopped", "cold", "cooked", "cored", "crumbled",
    "crushed", "cubed", "deveined", "diced", "drained", "grated", "halved", "hulled", "juiced",
    "julienned", "mashed", "melted", "minced", "packed", "peeled", "pitted", "pureed", "quartered",
    "rinsed", "scrubbed", "seeded", "separated", "shelled", "shredded", "sifted", "sliced",
    "slivered", "snipped", "softened", "stemmed", "thawed", "toasted", "torn", "trimmed", "warmed",
    "whisked", "zested",
];

pub const ADVERBS: &[&str] = &[
    "coarsely", "finely", "firmly", "freshly", "lightly", "loosely", "roughly", "thickly",
    "thinly", "very", "well",
];

const CONNECTORS: &[&str] = &["and", "&", "or"];

fn clean(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric() && c != '-')
        .to_lowercase()
}

pub fn is_prep_word(word: &str) -> bool {
    PREP_WORDS.contains(&word)
}

pub fn is_adverb(word: &str) -> bool {
    ADVERBS.contains(&word)
}

/// Remove preparation words (with a preceding adverb, "finely chopped") from
/// `text`, pushing each onto `modifiers`. Returns the remaining words.
pub fn take_prep_words(text: &str, modifiers: &mut Vec<String>) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let words: Vec<String> = tokens.iter().map(|t| clean(t)).collect();
    let mut keep = vec![true; tokens.len()];

    for i in 0..tokens.len() {
        if !is_prep_word(&words[i]) {
            continue;
        }
        keep[i] = false;
        if i > 0 && keep[i - 1] && is_adverb(&words[i - 1]) {
            keep[i - 1] = false;
            push_modifier(modifiers, &format!("{} {}", words[i - 1], words[i]));
        } else {
            push_modifier(modifiers, &words[i]);
        }
    }

    // "peeled and diced potatoes": the connector goes with the removed words.
    let kept_before = keep.clone();
    for i in 0..tokens.len() {
        if !CONNECTORS.contains(&words[i].as_str()) {
            continue;
        }
        let prev_removed = i > 0 && !kept_before[i - 1];
        let next_removed = i + 1 < tokens.len() && !kept_before[i + 1];
        if prev_removed || next_removed {
            keep[i] = false;
        }
    }

    tokens
        .iter()
        .zip(keep)
        .filter_map(|(t, k)| k.then_some(*t))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_prep_words() {
        let mut mods = Vec::new();
        assert_eq!(take_prep_words("diced tomatoes", &mut mods), "tomatoes");
        assert_eq!(mods, vec!["diced"]);
    }

    #[test]
    fn adverb_joins_prep_word() {
        let mut mods = Vec::new();
        assert_eq!(take_prep_words("finely chopped onion", &mut mods), "onion");
        assert_eq!(mods, vec!["finely chopped"]);
    }

    #[test]
    fn connectors_between_prep_words_go() {
        let mut mods = Vec::new();
        assert_eq!(
            take_prep_words("peeled and diced potatoes", &mut mods),
            "potatoes"
        );
        assert_eq!(mods, vec!["peeled", "diced"]);
    }

    #[test]
    fn connectors_between_names_stay() {
        let mut mods = Vec::new();
        assert_eq!(take_prep_words("salt and pepper", &mut mods), "salt and pepper");
        assert!(mods.is_empty());
    }

    #[test]
    fn lone_adverb_stays() {
        let mut mods = Vec::new();
        assert_eq!(
            take_prep_words("freshly ground black pepper", &mut mods),
            "freshly ground black pepper"
        );
    }
}
