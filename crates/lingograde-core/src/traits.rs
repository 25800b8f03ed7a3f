//! Core trait definitions for graders and score sinks.
//!
//! These async traits are implemented by the `lingograde-services` crate:
//! the grader against an LLM chat API, the sink against a spreadsheet
//! backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::{FinalScore, GradingResult};

/// The sentence every student translation is graded against.
pub const REFERENCE_TEXT: &str = "The cat sat on the mat.";

// ---------------------------------------------------------------------------
// Grader trait
// ---------------------------------------------------------------------------

/// Trait for backends that score a translation against a reference.
#[async_trait]
pub trait Grader: Send + Sync {
    /// Human-readable grader name (e.g. "openai").
    fn name(&self) -> &str;

    /// Score one translation attempt.
    async fn grade(&self, request: &GradeRequest) -> anyhow::Result<GradingResult>;
}

/// Request to score a translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRequest {
    /// The reference translation to compare against.
    pub reference: String,
    /// The student's translation attempt.
    pub translation: String,
}

impl GradeRequest {
    /// Request for a translation of the built-in reference sentence.
    pub fn for_reference(translation: &str) -> Self {
        Self {
            reference: REFERENCE_TEXT.to_string(),
            translation: translation.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Score sink trait
// ---------------------------------------------------------------------------

/// Trait for destinations that persist finalized score rows.
#[async_trait]
pub trait ScoreSink: Send + Sync {
    /// Append one finalized row. Rows are only ever appended, never updated.
    async fn append(&self, row: &FinalScore) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_reference_fills_in_the_reference_text() {
        let request = GradeRequest::for_reference("Le chat était assis sur le tapis.");
        assert_eq!(request.reference, REFERENCE_TEXT);
        assert_eq!(request.translation, "Le chat était assis sur le tapis.");
    }
}
