//! The text generator seam and its configuration.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

/// Errors a [`NarrativeGenerator`] can report.
///
/// These never reach callers of the coordinator: they are logged and
/// replaced by a fixed fallback message.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The request to the generator failed.
    #[error("Advisor request failed: {message}")]
    Request {
        /// A description of the failure.
        message: String,
    },

    /// The generator did not answer within the configured timeout.
    #[error("Advisor request timed out after {millis}ms")]
    Timeout {
        /// The timeout that elapsed, in milliseconds.
        millis: u128,
    },
}

/// Something that turns a prompt into narrative text.
///
/// Implementations wrap a language-model client; tests use in-memory fakes.
pub trait NarrativeGenerator: Send + Sync {
    /// Generates text for the prompt. An empty string is a valid answer.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, AdvisorError>> + Send;
}

/// Settings for advisor requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Model identifier passed to the generator.
    pub model: String,
    /// How long to wait for the generator before falling back.
    pub timeout: Duration,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-flash-preview".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}
