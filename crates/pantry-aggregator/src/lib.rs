//! # pantry-aggregator
//!
//! Turns parsed recipes into a categorized shopping list.
//!
//! Collecting → Converting → Summing → Rounding → Categorizing → Done.
//! Nothing in a generation is fatal: lines that cannot be summed or
//! categorized still produce entries, flagged for review.

pub mod engine;
pub mod pipeline;
pub mod shopping_list;
pub mod state;

pub use engine::Aggregator;
pub use pipeline::phase4_rounding::RoundingPolicy;
pub use shopping_list::{CategorySection, GenerationStats, ShoppingList};
pub use state::Phase;
