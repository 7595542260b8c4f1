use serde::{Deserialize, Serialize};

use super::defaults;

/// Which parser sits in front of the local text parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserBackend {
    /// Local pattern-based parser only.
    #[default]
    Local,
    /// Ollama-hosted model, falling back to the local parser.
    Ollama,
}

/// Parser backend configuration. Retries and timeouts live here, never in the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub backend: ParserBackend,
    pub model: String,
    pub host: String,
    pub timeout_secs: u64,
    /// Send one request per recipe instead of one per line.
    pub batch: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            backend: ParserBackend::Local,
            model: defaults::DEFAULT_PARSER_MODEL.to_string(),
            host: defaults::DEFAULT_PARSER_HOST.to_string(),
            timeout_secs: defaults::DEFAULT_PARSER_TIMEOUT_SECS,
            batch: defaults::DEFAULT_PARSER_BATCH,
        }
    }
}
