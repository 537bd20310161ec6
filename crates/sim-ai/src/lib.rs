#![deny(warnings)]

//! Narrative step: turns a computed simulation into an evaluation and a
//! ranked list of recommendations.
//!
//! The model call itself is external. This crate builds the summary and
//! prompts, parses replies, and always has a deterministic fallback so the
//! numeric result stays displayable when the model fails.

pub mod parse;
pub mod prompt;
pub mod rules;
mod summary;

pub use rules::RuleBasedNarrator;
pub use summary::{SimulationSummary, DEFAULT_MARKET_CONDITION, STRONG_ROAS};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Qualitative read of a simulation, in Bahasa Indonesia.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    pub evaluation: String,
    pub key_considerations: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum NarrativeError {
    /// The model could not be reached or refused the request.
    #[error("narrative backend unavailable: {0}")]
    Unavailable(String),
    /// The reply could not be parsed.
    #[error("malformed narrative reply: {0}")]
    Malformed(String),
    /// The reply parsed but a required field was empty.
    #[error("narrative reply is missing {0}")]
    Incomplete(&'static str),
}

/// Anything that can phrase a narrative for a simulation summary.
pub trait Narrator {
    fn summarize(&self, summary: &SimulationSummary) -> Result<Narrative, NarrativeError>;
}

/// One prompt in, raw model text out.
pub trait CompletionBackend {
    fn complete(&self, prompt: &str) -> Result<String, NarrativeError>;
}

impl<F> CompletionBackend for F
where
    F: Fn(&str) -> Result<String, NarrativeError>,
{
    fn complete(&self, prompt: &str) -> Result<String, NarrativeError> {
        self(prompt)
    }
}

/// Narrator backed by a language model: market-entry evaluation first,
/// then the strategic recommendations, one request each.
pub struct PromptNarrator<B> {
    backend: B,
}

impl<B: CompletionBackend> PromptNarrator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }
}

impl<B: CompletionBackend> Narrator for PromptNarrator<B> {
    fn summarize(&self, summary: &SimulationSummary) -> Result<Narrative, NarrativeError> {
        let reply = self.backend.complete(&prompt::market_entry_prompt(summary))?;
        let verdict = parse::parse_evaluation(&reply)?;
        debug!(evaluation = %verdict.evaluation, "market entry evaluation parsed");

        let reply = self
            .backend
            .complete(&prompt::recommendations_prompt(summary))?;
        let recommendations = parse::parse_recommendations(&reply)?;
        debug!(count = recommendations.len(), "recommendations parsed");

        Ok(Narrative {
            evaluation: verdict.evaluation,
            key_considerations: verdict.key_considerations,
            recommendations,
        })
    }
}

/// Where a narrative came from.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum NarrativeSource {
    /// The requested narrator answered.
    Primary,
    /// The model failed; `reason` says why and the narrative is rule based.
    Fallback { reason: String },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NarrativeOutcome {
    pub narrative: Narrative,
    #[serde(flatten)]
    pub source: NarrativeSource,
}

impl NarrativeOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, NarrativeSource::Fallback { .. })
    }
}

/// Ask `narrator`, and fall back to [`RuleBasedNarrator`] on any error.
pub fn narrate_with_fallback(narrator: &dyn Narrator, summary: &SimulationSummary) -> NarrativeOutcome {
    match narrator.summarize(summary) {
        Ok(narrative) => NarrativeOutcome {
            narrative,
            source: NarrativeSource::Primary,
        },
        Err(e) => {
            warn!(error = %e, product = %summary.product_name, "narrative unavailable, using rule-based fallback");
            NarrativeOutcome {
                narrative: RuleBasedNarrator.narrate(summary),
                source: NarrativeSource::Fallback {
                    reason: e.to_string(),
                },
            }
        }
    }
}
