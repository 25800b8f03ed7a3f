//! Core data model types for lingograde.
//!
//! These are the types that flow between the grader, the session store,
//! and the score sink.

use serde::{Deserialize, Serialize};

/// The outcome of scoring a single translation attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingResult {
    /// Numeric score in the range 0..=100.
    pub score: u8,
    /// The grader's raw feedback text, shown to the student verbatim.
    pub feedback: String,
}

/// A finalized row for one student: name, student number, and the
/// rounded average of every score submitted during the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalScore {
    /// Student name as entered.
    pub name: String,
    /// Student number the scores were recorded under.
    pub student_number: String,
    /// Mean of the submitted scores, rounded to one decimal place.
    pub average: f64,
}

impl FinalScore {
    /// Build a final row from a sequence of submitted scores.
    ///
    /// Returns `None` when the sequence is empty, so an average can never
    /// be computed from nothing.
    pub fn from_scores(name: &str, student_number: &str, scores: &[u8]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        let mean = scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64;
        Some(Self {
            name: name.to_string(),
            student_number: student_number.to_string(),
            average: (mean * 10.0).round() / 10.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_whole_scores() {
        let row = FinalScore::from_scores("Ada", "S1", &[80, 90, 100]).unwrap();
        assert_eq!(row.average, 90.0);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        let row = FinalScore::from_scores("Ada", "S1", &[81, 82]).unwrap();
        assert_eq!(row.average, 81.5);
    }

    #[test]
    fn average_rounds_repeating_fraction() {
        // (70 + 80 + 82) / 3 = 77.333...
        let row = FinalScore::from_scores("Ada", "S1", &[70, 80, 82]).unwrap();
        assert_eq!(row.average, 77.3);
    }

    #[test]
    fn single_score_is_its_own_average() {
        let row = FinalScore::from_scores("Ada", "S1", &[87]).unwrap();
        assert_eq!(row.average, 87.0);
        assert_eq!(row.name, "Ada");
        assert_eq!(row.student_number, "S1");
    }

    #[test]
    fn empty_scores_yield_no_row() {
        assert!(FinalScore::from_scores("Ada", "S1", &[]).is_none());
    }

    #[test]
    fn final_score_serializes_as_json() {
        let row = FinalScore::from_scores("Ada", "S1", &[81, 82]).unwrap();
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("81.5"));
        let back: FinalScore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
