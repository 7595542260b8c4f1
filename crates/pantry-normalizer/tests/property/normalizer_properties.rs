//! Property tests for normalization.

use pantry_normalizer::Normalizer;
use proptest::prelude::*;

fn modifier() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "sifted", "chopped", "divided", "to taste", "brown", "bread", "wild", "basmati", "red",
        "large", "finely diced", "for serving", "organic", "smoked",
    ])
    .prop_map(String::from)
}

fn name() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "flour", "sugar", "rice", "onion", "tomatoes", "olive oil", "chicken breast", "salt",
        "cheddar cheese", "eggs",
    ])
    .prop_map(String::from)
}

proptest! {
    #[test]
    fn normalize_is_deterministic(name in name(), mods in prop::collection::vec(modifier(), 0..5)) {
        let n = Normalizer::builtin();
        prop_assert_eq!(n.normalize(&name, &mods), n.normalize(&name, &mods));
    }

    #[test]
    fn modifier_order_is_irrelevant(name in name(), mods in prop::collection::vec(modifier(), 0..5)) {
        let n = Normalizer::builtin();
        let mut reversed = mods.clone();
        reversed.reverse();
        prop_assert_eq!(n.normalize(&name, &mods), n.normalize(&name, &reversed));
    }

    #[test]
    fn discard_only_modifiers_do_not_change_key(name in name()) {
        let n = Normalizer::builtin();
        let noise = vec!["chopped".to_string(), "to taste".to_string(), "divided".to_string()];
        prop_assert_eq!(n.normalize(&name, &[]), n.normalize(&name, &noise));
    }

    #[test]
    fn keys_are_never_empty(name in "[a-z]{1,8}( [a-z]{1,8}){0,2}") {
        let key = Normalizer::builtin().normalize(&name, &[]);
        prop_assert!(!key.base().is_empty());
    }
}
