//! Capability traits shared across the workspace.

pub mod parser;

pub use parser::IIngredientParser;
