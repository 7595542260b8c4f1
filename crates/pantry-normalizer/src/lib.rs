//! # pantry-normalizer
//!
//! Maps a parsed ingredient name and its modifiers to a `CanonicalKey`.
//! Modifiers that change what must be bought are preserved in the key;
//! everything else is discarded so equivalent lines combine.

pub mod engine;
pub mod policy;
pub mod singular;
pub mod vocabulary;

pub use engine::Normalizer;
pub use policy::ModifierPolicy;
pub use singular::singularize;
