use std::collections::BTreeMap;

use pantry_classifier::CategoryClassifier;
use pantry_core::config::CategoryConfig;
use pantry_core::{CanonicalKey, Category};
use pantry_normalizer::Normalizer;

fn classify(name: &str) -> Category {
    let key = Normalizer::builtin().normalize(name, &[]);
    CategoryClassifier::builtin().classify(&key)
}

#[test]
fn normalized_keys_classify_by_base() {
    assert_eq!(classify("all-purpose flour"), Category::Pantry);
    assert_eq!(classify("shredded cheddar cheese"), Category::Dairy);
    assert_eq!(classify("extra-virgin olive oil"), Category::Pantry);
    assert_eq!(classify("ground beef"), Category::Meat);
    assert_eq!(classify("scallions"), Category::Produce);
    assert_eq!(classify("large eggs"), Category::Dairy);
    assert_eq!(classify("bay leaves"), Category::Spices);
}

#[test]
fn overrides_beat_the_table() {
    let mut overrides = BTreeMap::new();
    overrides.insert("egg".to_string(), Category::Other);
    overrides.insert("oil:olive".to_string(), Category::Spices);
    let classifier = CategoryClassifier::from_config(&CategoryConfig { overrides });

    let egg = CanonicalKey::new("egg", Vec::<String>::new());
    assert_eq!(classifier.classify(&egg), Category::Other);
    assert!(classifier.lookup(&egg).known);

    let olive = CanonicalKey::new("oil", ["olive"]);
    assert_eq!(classifier.classify(&olive), Category::Spices);
    let vegetable = CanonicalKey::new("oil", ["vegetable"]);
    assert_eq!(classifier.classify(&vegetable), Category::Pantry);
}

#[test]
fn override_adds_unknown_base() {
    let mut classifier = CategoryClassifier::builtin();
    let key = CanonicalKey::new("gochujang", Vec::<String>::new());
    assert!(!classifier.lookup(&key).known);
    classifier.set_override("Gochujang", Category::Pantry);
    assert_eq!(classifier.lookup(&key).category, Category::Pantry);
}

#[test]
fn classification_is_deterministic() {
    let classifier = CategoryClassifier::builtin();
    let key = CanonicalKey::new("lemon juice", Vec::<String>::new());
    let first = classifier.lookup(&key);
    for _ in 0..10 {
        assert_eq!(classifier.lookup(&key), first);
    }
}
