//! In-memory session state for submitted scores.
//!
//! Scores accumulate per student number for the lifetime of the process.
//! Nothing here talks to external services; persistence is the score sink's
//! job and happens only when a session is finished.

use std::collections::HashMap;

/// Accumulates submitted scores keyed by student number.
#[derive(Debug, Default)]
pub struct SessionStore {
    scores: HashMap<String, Vec<u8>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted score under a student number, creating the
    /// sequence on first use.
    pub fn record(&mut self, student_number: &str, score: u8) {
        self.scores
            .entry(student_number.to_string())
            .or_default()
            .push(score);
    }

    /// Scores recorded for a student number, in submission order.
    /// `None` when the student number has never recorded a score.
    pub fn peek(&self, student_number: &str) -> Option<&[u8]> {
        self.scores.get(student_number).map(Vec::as_slice)
    }

    /// Empty the score sequence for a student number, keeping the entry.
    /// A student number with no entry is left untouched.
    pub fn clear(&mut self, student_number: &str) {
        if let Some(scores) = self.scores.get_mut(student_number) {
            scores.clear();
        }
    }
}
