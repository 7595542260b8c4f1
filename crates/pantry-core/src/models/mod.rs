mod canonical_key;
mod category;
mod degradation_event;
mod entry;
mod ingredient;
mod recipe;
mod unit_kind;

pub use canonical_key::CanonicalKey;
pub use category::Category;
pub use degradation_event::DegradationEvent;
pub use entry::{AggregatedEntry, QuantityLine, ReviewIssue};
pub use ingredient::ParsedIngredient;
pub use recipe::{ParsedRecipe, RawIngredientLine, RecipeId, RecipeLines};
pub use unit_kind::UnitKind;
