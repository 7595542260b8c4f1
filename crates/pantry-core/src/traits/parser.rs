use crate::errors::PantryResult;
use crate::models::ParsedIngredient;

/// Turns one free-text ingredient line into a structured `ParsedIngredient`.
///
/// Implementations must never fail on odd input: a line that cannot be
/// understood comes back with `quantity: None` and the raw text as name.
/// Errors are reserved for backend failures (unreachable service, timeout,
/// malformed response) so that a fallback chain can step in.
pub trait IIngredientParser: Send + Sync {
    /// Parse a single line.
    fn parse(&self, line: &str) -> PantryResult<ParsedIngredient>;

    /// Parse a batch of lines. The default calls `parse` per line.
    ///
    /// The result may be shorter than `lines` when a backend drops items;
    /// callers pair results with inputs by position.
    fn parse_batch(&self, lines: &[String]) -> PantryResult<Vec<ParsedIngredient>> {
        lines.iter().map(|line| self.parse(line)).collect()
    }

    /// Backend name, used in logs and degradation events.
    fn name(&self) -> &str;

    /// Whether the backend is reachable right now.
    fn is_available(&self) -> bool {
        true
    }
}
