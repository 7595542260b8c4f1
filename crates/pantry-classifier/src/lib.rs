//! # pantry-classifier
//!
//! Maps canonical ingredient keys to shopping categories. Pure lookup with
//! config overrides and an `Other` fallback.

pub mod classifier;
pub mod table;

pub use classifier::{CategoryClassifier, Classification};
