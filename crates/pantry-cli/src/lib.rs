//! # pantry-cli
//!
//! Recipe file loading and text rendering for the `pantry` binary.

pub mod input;
pub mod render;
