//! Transports that carry a prompt to a language model and return its raw text.

use pantry_core::errors::ParserError;

/// Sends one prompt and returns the model's raw completion.
///
/// Timeouts and connection handling belong to the implementation; the
/// parser only sees the resulting `ParserError`.
pub trait CompletionTransport: Send + Sync {
    /// `expected_items` is the number of records the prompt asks for, used to
    /// size the completion budget.
    fn complete(&self, prompt: &str, expected_items: usize) -> Result<String, ParserError>;

    fn name(&self) -> &str;

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(feature = "ollama")]
pub use ollama::OllamaTransport;

#[cfg(feature = "ollama")]
mod ollama {
    use std::time::Duration;

    use pantry_core::config::ParserConfig;
    use pantry_core::errors::ParserError;
    use serde_json::json;
    use tracing::debug;

    use super::CompletionTransport;
    use crate::semantic::prompt::SYSTEM_MESSAGE;

    const BACKEND: &str = "ollama";

    /// Ollama `/api/generate` over blocking HTTP.
    pub struct OllamaTransport {
        client: reqwest::blocking::Client,
        host: String,
        model: String,
        timeout_secs: u64,
    }

    impl OllamaTransport {
        pub fn new(config: &ParserConfig) -> Result<Self, ParserError> {
            let client = reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .map_err(|e| ParserError::BackendUnavailable {
                    backend: BACKEND.to_string(),
                    reason: format!("failed to build HTTP client: {e}"),
                })?;
            Ok(Self {
                client,
                host: config.host.trim_end_matches('/').to_string(),
                model: config.model.clone(),
                timeout_secs: config.timeout_secs,
            })
        }

        fn endpoint(&self) -> String {
            format!("{}/api/generate", self.host)
        }
    }

    impl CompletionTransport for OllamaTransport {
        fn complete(&self, prompt: &str, expected_items: usize) -> Result<String, ParserError> {
            let body = json!({
                "model": self.model,
                "prompt": prompt,
                "system": SYSTEM_MESSAGE,
                "format": "json",
                "stream": false,
                "options": {
                    "temperature": 0,
                    "num_predict": 200 + expected_items * 50,
                    "top_k": 10,
                    "top_p": 0.5,
                },
            });
            debug!(endpoint = %self.endpoint(), model = %self.model, expected_items, "ollama request");

            let resp = self
                .client
                .post(self.endpoint())
                .json(&body)
                .send()
                .map_err(|e| {
                    if e.is_timeout() {
                        ParserError::Timeout {
                            backend: BACKEND.to_string(),
                            timeout_secs: self.timeout_secs,
                        }
                    } else {
                        ParserError::BackendUnavailable {
                            backend: BACKEND.to_string(),
                            reason: e.to_string(),
                        }
                    }
                })?;

            let status = resp.status();
            if !status.is_success() {
                return Err(ParserError::BackendUnavailable {
                    backend: BACKEND.to_string(),
                    reason: format!("HTTP {status}"),
                });
            }

            let value: serde_json::Value =
                resp.json().map_err(|e| ParserError::MalformedResponse {
                    reason: format!("response body is not JSON: {e}"),
                })?;
            value
                .get("response")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .ok_or_else(|| ParserError::MalformedResponse {
                    reason: "missing `response` field".to_string(),
                })
        }

        fn name(&self) -> &str {
            BACKEND
        }
    }
}
