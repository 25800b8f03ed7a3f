//! Mock grader and sink for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use lingograde_core::model::{FinalScore, GradingResult};
use lingograde_core::parser::parse_grading_result;
use lingograde_core::traits::{GradeRequest, Grader, ScoreSink};

use crate::error::ServiceError;

/// A mock grader for testing session flows without real API calls.
///
/// Returns configurable raw outputs based on translation content matching;
/// outputs go through the real score parser.
pub struct MockGrader {
    /// Map of translation substring → raw grader output.
    responses: HashMap<String, String>,
    /// Default output if no translation matches.
    default_response: String,
    /// When set, every call fails as if the network were down.
    fail: bool,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Last request received.
    last_request: Mutex<Option<GradeRequest>>,
}

impl MockGrader {
    /// Create a new mock grader with the given translation→output mappings.
    pub fn new(responses: HashMap<String, String>) -> Self {
        Self {
            responses,
            default_response: "Score: 50\nFeedback: Placeholder feedback.".to_string(),
            fail: false,
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Create a mock that always returns the same raw output.
    pub fn with_fixed_response(response: &str) -> Self {
        Self {
            responses: HashMap::new(),
            default_response: response.to_string(),
            fail: false,
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Create a mock whose every call fails.
    pub fn failing() -> Self {
        Self {
            responses: HashMap::new(),
            default_response: String::new(),
            fail: true,
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Get the number of calls made to this grader.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last request made to this grader.
    pub fn last_request(&self) -> Option<GradeRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl Grader for MockGrader {
    fn name(&self) -> &str {
        "mock"
    }

    async fn grade(&self, request: &GradeRequest) -> anyhow::Result<GradingResult> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_request.lock().unwrap() = Some(request.clone());

        if self.fail {
            return Err(ServiceError::NetworkError("mock grader is offline".to_string()).into());
        }

        // Find a matching output based on translation content
        let content = self
            .responses
            .iter()
            .find(|(key, _)| request.translation.contains(key.as_str()))
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| self.default_response.clone());

        Ok(parse_grading_result(&content))
    }
}

/// A score sink that collects rows in memory.
pub struct MemorySink {
    rows: Mutex<Vec<FinalScore>>,
    fail: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Create a sink whose every append fails.
    pub fn failing() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Rows appended so far, in order.
    pub fn rows(&self) -> Vec<FinalScore> {
        self.rows.lock().unwrap().clone()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScoreSink for MemorySink {
    async fn append(&self, row: &FinalScore) -> anyhow::Result<()> {
        if self.fail {
            return Err(ServiceError::ApiError {
                status: 503,
                message: "mock sink unavailable".to_string(),
            }
            .into());
        }
        self.rows.lock().unwrap().push(row.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_response_goes_through_the_parser() {
        let grader = MockGrader::with_fixed_response("Score: 80\nFeedback: Good.");
        let result = grader
            .grade(&GradeRequest::for_reference("anything"))
            .await
            .unwrap();
        assert_eq!(result.score, 80);
        assert_eq!(grader.call_count(), 1);
    }

    #[tokio::test]
    async fn translation_matching() {
        let mut responses = HashMap::new();
        responses.insert(
            "chat".to_string(),
            "Score: 90\nFeedback: Bon travail.".to_string(),
        );
        responses.insert(
            "Katze".to_string(),
            "Score: 70\nFeedback: Gut gemacht.".to_string(),
        );

        let grader = MockGrader::new(responses);

        let result = grader
            .grade(&GradeRequest::for_reference("Le chat s'est assis."))
            .await
            .unwrap();
        assert_eq!(result.score, 90);

        let result = grader
            .grade(&GradeRequest::for_reference("Die Katze saß."))
            .await
            .unwrap();
        assert_eq!(result.score, 70);
        assert_eq!(grader.call_count(), 2);

        let last = grader.last_request().unwrap();
        assert_eq!(last.translation, "Die Katze saß.");
    }

    #[tokio::test]
    async fn failing_grader_errors() {
        let grader = MockGrader::failing();
        let err = grader
            .grade(&GradeRequest::for_reference("anything"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("offline"));
        assert_eq!(grader.call_count(), 1);
    }

    #[tokio::test]
    async fn memory_sink_collects_rows() {
        let sink = MemorySink::new();
        let row = FinalScore {
            name: "Ada".to_string(),
            student_number: "S1".to_string(),
            average: 81.5,
        };
        sink.append(&row).await.unwrap();
        assert_eq!(sink.rows(), vec![row]);
    }

    #[tokio::test]
    async fn failing_sink_errors_and_stores_nothing() {
        let sink = MemorySink::failing();
        let row = FinalScore {
            name: "Ada".to_string(),
            student_number: "S1".to_string(),
            average: 81.5,
        };
        assert!(sink.append(&row).await.is_err());
        assert!(sink.rows().is_empty());
    }
}
