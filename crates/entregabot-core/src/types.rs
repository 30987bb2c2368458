//! Shared wire and data types.

use serde::{Deserialize, Serialize};

/// One knowledge-base entry. Loaded once from `kb.json`, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KbEntry {
    pub question: String,
    pub answer: String,
}

/// A knowledge-base entry annotated with its retrieval score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredEntry {
    pub question: String,
    pub answer: String,
    pub score: f32,
}

/// Inbound chat payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Outbound chat payload.
///
/// `source` is the matched KB question when retrieval happened;
/// `advisory` carries diagnostic context (detected intent, degraded
/// generation) without ever turning the request into an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    pub source: Option<String>,
    pub generated_by_model: bool,
    pub advisory: Option<String>,
}

impl ChatResponse {
    /// A response that did not involve any generation model.
    pub fn direct(
        answer: impl Into<String>,
        source: Option<String>,
        advisory: Option<String>,
    ) -> Self {
        Self {
            answer: answer.into(),
            source,
            generated_by_model: false,
            advisory,
        }
    }

    /// A response produced by a generation provider, grounded in `source`.
    pub fn generated(answer: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            source: Some(source.into()),
            generated_by_model: true,
            advisory: None,
        }
    }
}
