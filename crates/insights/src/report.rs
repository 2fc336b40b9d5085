use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Result of an insight run.
///
/// This is freeform text for the presentation layer, never a domain
/// record; persisting or displaying it is the caller's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    /// One-line summary.
    pub headline: String,

    /// Freeform body text.
    pub body: String,

    /// Free-form metadata (figures the text was derived from, etc).
    pub metadata: JsonValue,
}

impl InsightReport {
    pub fn new(headline: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            body: body.into(),
            metadata: JsonValue::Null,
        }
    }

    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = metadata;
        self
    }
}

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("invalid job input: {0}")]
    InvalidInput(String),

    #[error("insight generation failed: {0}")]
    GenerationFailed(String),
}
