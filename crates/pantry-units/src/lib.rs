//! # pantry-units
//!
//! Static registry of measurement units and exact conversion between them.
//!
//! Volume units share a milliliter base, weight units a gram base. Count
//! units ("can", "clove") only ever convert to themselves. The only bridge
//! between volume and weight is a small density table keyed by base
//! ingredient.

pub mod converter;
pub mod density;
pub mod table;

pub use converter::UnitConverter;
pub use density::DensityTable;
pub use table::{UnitDef, UnitTable};
