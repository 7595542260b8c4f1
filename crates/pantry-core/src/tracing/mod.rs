//! Observability for Pantry.
//! `tracing` crate with `EnvFilter`, per-crate log levels via `PANTRY_LOG`.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with_level};
