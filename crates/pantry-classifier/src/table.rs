//! Built-in category keywords, matched against singular base names.

use pantry_core::Category;

pub const PRODUCE: &[&str] = &[
    "onion", "green onion", "garlic", "shallot", "leek", "tomato", "potato", "sweet potato",
    "carrot", "celery", "bell pepper", "jalapeno", "lettuce", "spinach", "kale", "broccoli",
    "cauliflower", "zucchini", "cucumber", "cabbage", "squash", "corn", "pea", "lemon", "lime",
    "orange", "apple", "banana", "avocado", "berry", "strawberry", "blueberry", "ginger",
    "cilantro", "parsley", "basil", "thyme", "rosemary", "mint", "dill", "mushroom",
];

pub const MEAT: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "turkey", "bacon", "sausage", "steak", "ham", "prosciutto",
];

pub const SEAFOOD: &[&str] = &[
    "fish", "salmon", "tuna", "shrimp", "cod", "tilapia", "mussel", "clam", "crab", "scallop",
    "anchovy",
];

pub const DAIRY: &[&str] = &[
    "milk", "buttermilk", "cream", "heavy cream", "sour cream", "butter", "cheese", "cream cheese",
    "yogurt", "cheddar", "mozzarella", "parmesan", "feta", "ricotta", "egg",
];

pub const BAKERY: &[&str] = &[
    "bread", "tortilla", "bun", "bagel", "roll", "pita", "baguette", "croissant",
];

pub const PANTRY: &[&str] = &[
    "flour", "sugar", "salt", "pepper", "oil", "vinegar", "soy sauce", "rice", "pasta", "noodle",
    "spaghetti", "quinoa", "oat", "bean", "chickpea", "lentil", "stock", "broth", "tomato paste",
    "tomato sauce", "baking powder", "baking soda", "yeast", "cornstarch", "vanilla",
    "vanilla extract", "honey", "maple syrup", "peanut butter", "bread crumb", "breadcrumb",
    "mustard", "ketchup", "mayonnaise", "water",
];

pub const SPICES: &[&str] = &[
    "cumin", "paprika", "chili powder", "cayenne", "cinnamon", "nutmeg", "oregano", "bay leaf",
    "turmeric", "coriander", "allspice", "garlic powder", "onion powder", "red pepper flake",
    "italian seasoning",
];

/// Every keyword group, in the order sections are listed.
pub fn builtin() -> [(Category, &'static [&'static str]); 7] {
    [
        (Category::Produce, PRODUCE),
        (Category::Meat, MEAT),
        (Category::Seafood, SEAFOOD),
        (Category::Dairy, DAIRY),
        (Category::Bakery, BAKERY),
        (Category::Pantry, PANTRY),
        (Category::Spices, SPICES),
    ]
}
