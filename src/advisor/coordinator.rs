//! Revision-tagged advisor requests.
//!
//! Every request takes a fresh revision number. When a response arrives
//! after a newer request was issued (or after [`InsightCoordinator::cancel_pending`]),
//! it is reported as stale so the caller never shows an answer for inputs
//! that have since changed.

use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::models::PayrollResult;

use super::generator::{AdvisorConfig, AdvisorError, NarrativeGenerator};
use super::prompt::build_prompt;

/// Shown when the generator fails or times out.
pub const CONNECTION_ERROR_MESSAGE: &str = "Error al conectar con el asesor financiero AI.";

/// Shown when the generator answers with no text.
pub const EMPTY_RESPONSE_MESSAGE: &str = "No se pudo obtener el análisis.";

/// A narrative ready to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    /// The revision this narrative answers.
    pub revision: u64,
    /// The narrative, or a fallback message.
    pub text: String,
    /// True when `text` is a fallback message rather than generated text.
    pub is_fallback: bool,
}

/// The outcome of an advisor request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightOutcome {
    /// The response is current.
    Ready(Insight),
    /// A newer request superseded this one; the response was discarded.
    Stale {
        /// The revision of the discarded request.
        revision: u64,
    },
}

impl InsightOutcome {
    /// Returns the insight if the response is current.
    pub fn ready(self) -> Option<Insight> {
        match self {
            InsightOutcome::Ready(insight) => Some(insight),
            InsightOutcome::Stale { .. } => None,
        }
    }
}

/// Issues advisor requests and discards responses that arrive too late.
pub struct InsightCoordinator<G> {
    generator: G,
    config: AdvisorConfig,
    revision: AtomicU64,
}

impl<G: NarrativeGenerator> InsightCoordinator<G> {
    /// Creates a coordinator around a generator.
    pub fn new(generator: G, config: AdvisorConfig) -> Self {
        Self {
            generator,
            config,
            revision: AtomicU64::new(0),
        }
    }

    /// Returns the advisor settings.
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// The most recently issued revision.
    pub fn current_revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    /// Invalidates any request still in flight.
    pub fn cancel_pending(&self) {
        self.revision.fetch_add(1, Ordering::SeqCst);
    }

    /// Requests a narrative for a payroll result.
    pub async fn request(&self, result: &PayrollResult, annual_bonus_days: Decimal) -> InsightOutcome {
        let prompt = build_prompt(result, annual_bonus_days);
        self.request_prompt(&prompt).await
    }

    /// Requests a narrative for an already built prompt.
    pub async fn request_prompt(&self, prompt: &str) -> InsightOutcome {
        let revision = self.revision.fetch_add(1, Ordering::SeqCst) + 1;
        info!(revision, model = %self.config.model, "Requesting advisor insight");

        let response =
            match tokio::time::timeout(self.config.timeout, self.generator.generate(prompt)).await {
                Ok(response) => response,
                Err(_) => Err(AdvisorError::Timeout {
                    millis: self.config.timeout.as_millis(),
                }),
            };

        if self.current_revision() != revision {
            info!(revision, "Discarding stale advisor response");
            return InsightOutcome::Stale { revision };
        }

        let insight = match response {
            Ok(text) if !text.trim().is_empty() => Insight {
                revision,
                text,
                is_fallback: false,
            },
            Ok(_) => {
                warn!(revision, "Advisor returned an empty response");
                Insight {
                    revision,
                    text: EMPTY_RESPONSE_MESSAGE.to_string(),
                    is_fallback: true,
                }
            }
            Err(err) => {
                warn!(revision, error = %err, "Advisor request failed");
                Insight {
                    revision,
                    text: CONNECTION_ERROR_MESSAGE.to_string(),
                    is_fallback: true,
                }
            }
        };

        InsightOutcome::Ready(insight)
    }
}
