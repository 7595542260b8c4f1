//! # pantry-parser
//!
//! Turns free-text ingredient lines into `ParsedIngredient` records.
//!
//! - `TextParser`: local, deterministic, pattern-based; never fails.
//! - `SemanticParser`: optional language-model backend behind a transport.
//! - `ParserChain`: tries backends in order and falls back to `TextParser`.
//! - `parse_recipes`: parses a recipe selection in parallel.

pub mod batch;
pub mod chain;
pub mod patterns;
pub mod semantic;
pub mod text_parser;

use pantry_core::config::{ParserBackend, ParserConfig};
use pantry_core::errors::PantryResult;
use pantry_core::ParsedIngredient;
use tracing::info;

pub use batch::{complete_batch, parse_recipe, parse_recipes};
pub use chain::ParserChain;
pub use semantic::{CompletionTransport, SemanticParser};
pub use text_parser::TextParser;

/// Parse one line with the local parser.
pub fn parse(line: &str) -> ParsedIngredient {
    TextParser::new().parse_line(line)
}

/// Build the parser chain described by `config`.
pub fn build_parser(config: &ParserConfig) -> PantryResult<ParserChain> {
    let mut chain = ParserChain::new();
    match config.backend {
        ParserBackend::Local => {}
        ParserBackend::Ollama => add_ollama(&mut chain, config)?,
    }
    info!(
        backend = ?config.backend,
        providers = chain.provider_count(),
        "parser chain ready"
    );
    Ok(chain)
}

#[cfg(feature = "ollama")]
fn add_ollama(chain: &mut ParserChain, config: &ParserConfig) -> PantryResult<()> {
    let transport = semantic::OllamaTransport::new(config)?;
    chain.push(Box::new(SemanticParser::new(transport, config.batch)));
    Ok(())
}

#[cfg(not(feature = "ollama"))]
fn add_ollama(chain: &mut ParserChain, _config: &ParserConfig) -> PantryResult<()> {
    tracing::warn!("built without the `ollama` feature, using the local parser only");
    chain.record("ollama backend not compiled in".to_string(), "text");
    Ok(())
}
