//! Financial advisor narratives.
//!
//! Builds the prompt that describes a payroll result and coordinates
//! requests to an external text generator. The generator itself is a trait;
//! no vendor client ships with the crate.
//!
//! Nothing in the HTTP API calls into this module. [`InsightCoordinator`] is
//! for downstream presentation code that plugs in its own
//! [`NarrativeGenerator`] and shows the resulting [`Insight`] next to the
//! figures.

mod coordinator;
mod generator;
mod prompt;

pub use coordinator::{
    CONNECTION_ERROR_MESSAGE, EMPTY_RESPONSE_MESSAGE, Insight, InsightCoordinator, InsightOutcome,
};
pub use generator::{AdvisorConfig, AdvisorError, NarrativeGenerator};
pub use prompt::build_prompt;
