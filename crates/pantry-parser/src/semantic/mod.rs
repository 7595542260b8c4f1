//! Adapter for an external "semantic" parser: a language model that turns
//! ingredient lines into JSON records.
//!
//! The model is reached through a `CompletionTransport`, so the adapter can
//! be exercised without a network. Failures surface as `ParserError` and are
//! handled by the `ParserChain`, never retried here.

pub mod decode;
pub mod prompt;
pub mod transport;

use pantry_core::errors::PantryResult;
use pantry_core::traits::IIngredientParser;
use pantry_core::ParsedIngredient;
use tracing::debug;

pub use transport::CompletionTransport;
#[cfg(feature = "ollama")]
pub use transport::OllamaTransport;

/// Parser backed by a language model.
pub struct SemanticParser<T: CompletionTransport> {
    transport: T,
    /// One request per recipe instead of one per line.
    batch: bool,
}

impl<T: CompletionTransport> SemanticParser<T> {
    pub fn new(transport: T, batch: bool) -> Self {
        Self { transport, batch }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: CompletionTransport> IIngredientParser for SemanticParser<T> {
    fn parse(&self, line: &str) -> PantryResult<ParsedIngredient> {
        let response = self.transport.complete(&prompt::single_prompt(line), 1)?;
        Ok(decode::decode_single(&response, line)?)
    }

    fn parse_batch(&self, lines: &[String]) -> PantryResult<Vec<ParsedIngredient>> {
        if lines.is_empty() {
            return Ok(Vec::new());
        }
        if !self.batch {
            return lines.iter().map(|line| self.parse(line)).collect();
        }
        let response = self
            .transport
            .complete(&prompt::batch_prompt(lines), lines.len())?;
        let items = decode::decode_batch(&response, lines)?;
        debug!(
            backend = self.transport.name(),
            expected = lines.len(),
            received = items.len(),
            "semantic batch decoded"
        );
        Ok(items)
    }

    fn name(&self) -> &str {
        self.transport.name()
    }

    fn is_available(&self) -> bool {
        self.transport.is_available()
    }
}
