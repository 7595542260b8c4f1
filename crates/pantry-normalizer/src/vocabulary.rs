//! Built-in word lists and phrase tables.

use pantry_core::config::Verdict;

/// Names recognized as the purchasable base of a longer name. The longest
/// matching suffix wins, so "sour cream" beats "cream".
pub const KNOWN_BASES: &[&str] = &[
    // Produce
    "onion", "green onion", "garlic", "tomato", "potato", "sweet potato", "carrot", "celery",
    "bell pepper", "pepper", "lettuce", "spinach", "kale", "broccoli", "cauliflower", "zucchini",
    "cucumber", "lemon", "lime", "apple", "banana", "avocado", "ginger", "cilantro", "parsley",
    "basil", "thyme", "rosemary", "mushroom", "lemon juice", "lime juice", "shallot", "leek",
    // Meat and seafood
    "chicken", "beef", "pork", "lamb", "turkey", "bacon", "sausage", "steak", "fish", "salmon",
    "tuna", "shrimp", "cod", "tilapia", "mussel", "clam", "crab",
    // Dairy
    "milk", "cream", "heavy cream", "sour cream", "butter", "cheese", "cream cheese", "yogurt",
    "egg", "cheddar", "mozzarella", "parmesan", "feta",
    // Pantry
    "flour", "sugar", "salt", "oil", "vinegar", "soy sauce", "rice", "pasta", "bean",
    "lentil", "stock", "broth", "tomato paste", "tomato sauce", "baking powder", "baking soda",
    "vanilla", "vanilla extract", "honey", "maple syrup", "peanut butter", "water", "oat",
    // Spices
    "cumin", "paprika", "chili powder", "cayenne", "cinnamon", "nutmeg", "oregano", "bay leaf",
    // Bakery
    "bread", "tortilla", "bun",
];

/// Bases whose unknown modifiers are preserved.
pub const VARIANT_SENSITIVE: &[&str] = &[
    "flour", "sugar", "rice", "vinegar", "cheese", "milk", "oil", "bean", "broth", "stock", "pasta",
    "pepper", "cream", "lentil",
];

/// Variant implied by a bare base.
pub const DEFAULT_VARIANTS: &[(&str, &str)] = &[("flour", "all-purpose"), ("sugar", "white")];

/// Ordered `(base, modifier, verdict)` rows. `*` matches any base.
pub const MODIFIER_RULES: &[(&str, &str, Verdict)] = &[
    ("flour", "all-purpose", Verdict::Preserve),
    ("flour", "bread", Verdict::Preserve),
    ("flour", "cake", Verdict::Preserve),
    ("flour", "pastry", Verdict::Preserve),
    ("flour", "whole-wheat", Verdict::Preserve),
    ("flour", "self-rising", Verdict::Preserve),
    ("flour", "almond", Verdict::Preserve),
    ("flour", "rice", Verdict::Preserve),
    ("flour", "sifted", Verdict::Discard),
    ("flour", "unbleached", Verdict::Discard),
    ("flour", "bleached", Verdict::Discard),
    ("flour", "plain", Verdict::Discard),
    ("sugar", "brown", Verdict::Preserve),
    ("sugar", "white", Verdict::Preserve),
    ("sugar", "powdered", Verdict::Preserve),
    ("sugar", "caster", Verdict::Preserve),
    ("sugar", "dark", Verdict::Preserve),
    ("sugar", "light", Verdict::Discard),
    ("sugar", "granulated", Verdict::Discard),
    ("onion", "red", Verdict::Preserve),
    ("onion", "yellow", Verdict::Preserve),
    ("onion", "white", Verdict::Preserve),
    ("onion", "sweet", Verdict::Preserve),
    ("beef", "ground", Verdict::Preserve),
    ("pork", "ground", Verdict::Preserve),
    ("turkey", "ground", Verdict::Preserve),
    ("chicken", "ground", Verdict::Preserve),
    ("tomato", "sun-dried", Verdict::Preserve),
    ("milk", "whole", Verdict::Preserve),
    ("broth", "low-sodium", Verdict::Discard),
    ("stock", "low-sodium", Verdict::Discard),
];

/// Phrase rewrites applied to names before matching.
pub const ALIASES: &[(&str, &str)] = &[
    ("sea salt", "salt"),
    ("table salt", "salt"),
    ("kosher salt", "salt"),
    ("granulated sugar", "white sugar"),
    ("confectioners sugar", "powdered sugar"),
    ("confectioner sugar", "powdered sugar"),
    ("icing sugar", "powdered sugar"),
    ("scallion", "green onion"),
    ("spring onion", "green onion"),
    ("garlic clove", "garlic"),
    ("plain flour", "all-purpose flour"),
    ("ap flour", "all-purpose flour"),
    ("heavy whipping cream", "heavy cream"),
    ("whipping cream", "heavy cream"),
    ("coriander leaf", "cilantro"),
    ("bicarbonate of soda", "baking soda"),
    ("cayenne pepper", "cayenne"),
    // Multi-word modifiers become one hyphenated word.
    ("all purpose", "all-purpose"),
    ("whole wheat", "whole-wheat"),
    ("extra virgin", "extra-virgin"),
    ("self rising", "self-rising"),
    ("self raising", "self-rising"),
    ("sun dried", "sun-dried"),
    ("low sodium", "low-sodium"),
    ("reduced sodium", "low-sodium"),
    ("extra large", "extra-large"),
];

/// Words that never distinguish what to buy, whatever the base.
pub const GLOBAL_DISCARD: &[&str] = &[
    // Size
    "large", "medium", "small", "jumbo", "extra-large", "big", "mini", "baby",
    // Freshness and state
    "fresh", "freshly", "dried", "frozen", "thawed", "ripe", "warm", "cold", "organic", "raw",
    "natural", "good-quality", "store-bought", "homemade", "boneless", "skinless",
    // Oils and fats
    "extra-virgin", "virgin", "unsalted", "salted",
    // Varieties that substitute freely
    "roma", "cherry", "grape", "beefsteak", "kosher", "coarse", "fine", "ground", "cracked",
    // Preparation
    "beaten", "blanched", "boiled", "chilled", "chopped", "cooked", "cored", "crumbled", "crushed",
    "cubed", "deveined", "diced", "drained", "grated", "halved", "hulled", "juiced", "julienned",
    "mashed", "melted", "minced", "packed", "peeled", "pitted", "pureed", "quartered", "rinsed",
    "scrubbed", "seeded", "separated", "shelled", "shredded", "sifted", "sliced", "slivered",
    "snipped", "softened", "stemmed", "toasted", "torn", "trimmed", "warmed", "whisked", "zested",
    // Adverbs
    "coarsely", "finely", "firmly", "lightly", "loosely", "roughly", "thickly", "thinly", "very",
    "well",
];

/// Filler words skipped when splitting modifiers into words.
pub const CONNECTORS: &[&str] = &["and", "or", "&", "of", "a", "an", "the", "into", "with", "in"];

/// Whole-phrase notes, discarded regardless of base.
pub const NOTE_PATTERNS: &[&str] = &[
    r"^(?:plus|minus|or|and/or|for|about|cut|such as)\b",
    r"\b(?:to taste|as needed|if needed|if desired|if necessary|optional|divided|at room temperature|room temperature|more or less|or more|or less|for serving|for garnish)\b",
    r"\d",
];
