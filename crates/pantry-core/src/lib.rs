//! # pantry-core
//!
//! Foundation crate for the Pantry shopping-list engine.
//! Defines the data model, the exact `Quantity` type, errors, config,
//! the parser capability trait, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod quantity;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PantryConfig;
pub use errors::{PantryError, PantryResult};
pub use models::{
    AggregatedEntry, CanonicalKey, Category, ParsedIngredient, ParsedRecipe, QuantityLine,
    RawIngredientLine, RecipeId, RecipeLines, ReviewIssue, UnitKind,
};
pub use quantity::Quantity;
