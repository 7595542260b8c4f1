//! Fallback chain for ingredient parsing.
//!
//! Chain: configured backends in order, then the local `TextParser`, which
//! cannot fail. Every fallback is logged to the degradation log.

use std::sync::Mutex;

use chrono::Utc;
use pantry_core::constants::PARSER_COMPONENT;
use pantry_core::errors::PantryResult;
use pantry_core::models::DegradationEvent;
use pantry_core::traits::IIngredientParser;
use pantry_core::ParsedIngredient;
use tracing::warn;

use crate::batch::complete_batch;
use crate::text_parser::TextParser;

/// Tries parser backends in priority order and falls back to the local parser.
pub struct ParserChain {
    providers: Vec<Box<dyn IIngredientParser>>,
    fallback: TextParser,
    /// Degradation events; behind a lock so the chain can be shared across threads.
    events: Mutex<Vec<DegradationEvent>>,
}

impl Default for ParserChain {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserChain {
    /// A chain with only the local parser.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            fallback: TextParser::new(),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Add a backend ahead of the local parser, after any already added.
    pub fn push(&mut self, provider: Box<dyn IIngredientParser>) {
        self.providers.push(provider);
    }

    /// Number of backends, not counting the local parser.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Parse one line. Returns the record and the name of the parser that produced it.
    pub fn parse_with_source(&self, line: &str) -> (ParsedIngredient, String) {
        if line.trim().is_empty() {
            return (self.fallback.parse_line(line), self.fallback.name().to_string());
        }
        let mut last_failure: Option<String> = None;

        for provider in &self.providers {
            if !provider.is_available() {
                last_failure = Some(format!("{} unavailable", provider.name()));
                continue;
            }
            match provider.parse(line) {
                Ok(mut item) if !item.name.trim().is_empty() => {
                    if let Some(failure) = last_failure {
                        self.record(failure, provider.name());
                    }
                    item.raw_text = line.to_string();
                    return (item, provider.name().to_string());
                }
                Ok(_) => {
                    warn!(provider = provider.name(), "parser returned an empty name, trying next in chain");
                    last_failure = Some(format!("{} returned an empty name", provider.name()));
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "parser failed, trying next in chain"
                    );
                    last_failure = Some(format!("{}: {e}", provider.name()));
                }
            }
        }

        if let Some(failure) = last_failure {
            self.record(failure, self.fallback.name());
        }
        (self.fallback.parse_line(line), self.fallback.name().to_string())
    }

    /// Parse a recipe's lines as one batch. Short or partially empty batches
    /// are completed line by line by the local parser.
    pub fn parse_lines(&self, lines: &[String]) -> (Vec<ParsedIngredient>, String) {
        let mut last_failure: Option<String> = None;

        for provider in &self.providers {
            if !provider.is_available() {
                last_failure = Some(format!("{} unavailable", provider.name()));
                continue;
            }
            match provider.parse_batch(lines) {
                Ok(items) => {
                    if let Some(failure) = last_failure {
                        self.record(failure, provider.name());
                    }
                    let (items, filled) = complete_batch(lines, items, &self.fallback);
                    if filled > 0 {
                        warn!(
                            provider = provider.name(),
                            filled,
                            expected = lines.len(),
                            "batch came back incomplete, filling with the local parser"
                        );
                        self.record(
                            format!("{} left {filled} of {} lines unparsed", provider.name(), lines.len()),
                            self.fallback.name(),
                        );
                    }
                    return (items, provider.name().to_string());
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "batch parse failed, trying next in chain"
                    );
                    last_failure = Some(format!("{}: {e}", provider.name()));
                }
            }
        }

        if let Some(failure) = last_failure {
            self.record(failure, self.fallback.name());
        }
        let items = lines.iter().map(|l| self.fallback.parse_line(l)).collect();
        (items, self.fallback.name().to_string())
    }

    /// Take all degradation events recorded so far.
    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *events)
    }

    pub(crate) fn record(&self, failure: String, fallback_used: &str) {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        events.push(DegradationEvent {
            component: PARSER_COMPONENT.to_string(),
            failure,
            fallback_used: fallback_used.to_string(),
            timestamp: Utc::now(),
        });
    }
}

impl IIngredientParser for ParserChain {
    fn parse(&self, line: &str) -> PantryResult<ParsedIngredient> {
        Ok(self.parse_with_source(line).0)
    }

    fn parse_batch(&self, lines: &[String]) -> PantryResult<Vec<ParsedIngredient>> {
        Ok(self.parse_lines(lines).0)
    }

    fn name(&self) -> &str {
        "chain"
    }
}
