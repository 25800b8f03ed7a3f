//! Interactive grading session state machine.
//!
//! Turns one line of student input into replies, keeping the entered name,
//! student number, and translation between commands. Submitted scores
//! accumulate in the session store; only `finish` hands them to the sink.

use std::sync::Arc;

use anyhow::Result;

use lingograde_core::model::{FinalScore, GradingResult};
use lingograde_core::session::SessionStore;
use lingograde_core::traits::{GradeRequest, Grader, ScoreSink};

const HELP_TEXT: &str = "\
Commands:
  name <text>     set the student name
  id <text>       set the student number
  text <text>     set the translation to grade
  try [text]      grade the translation without recording the score
  submit [text]   grade and record the score under the student number
  finish          save the average for the student number and clear it
  scores          show scores recorded for the current student number
  help            show this help
  quit            end the session";

/// One reply to the student. A command may produce several.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Neutral information, including try-only feedback.
    Info(String),
    /// A completed action, like a recorded submission.
    Success(String),
    /// Input problems and empty-session notices. Never fatal.
    Warning(String),
    /// Scores recorded so far for a student number.
    Scores {
        student_number: String,
        scores: Vec<u8>,
        average: f64,
    },
    /// The student asked to end the session.
    Quit,
}

/// Interactive grading session over a grader and a score sink.
pub struct GradingSession {
    grader: Arc<dyn Grader>,
    sink: Arc<dyn ScoreSink>,
    store: SessionStore,
    name: String,
    student_number: String,
    translation: String,
}

impl GradingSession {
    pub fn new(grader: Arc<dyn Grader>, sink: Arc<dyn ScoreSink>) -> Self {
        Self {
            grader,
            sink,
            store: SessionStore::new(),
            name: String::new(),
            student_number: String::new(),
            translation: String::new(),
        }
    }

    /// Handle one line of input.
    ///
    /// Returns `Err` only when a backend call fails; the session itself
    /// stays usable and the command can simply be retried.
    pub async fn handle(&mut self, line: &str) -> Result<Vec<Reply>> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(vec![]);
        }

        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };

        match command.to_ascii_lowercase().as_str() {
            "name" => {
                self.name = rest.to_string();
                Ok(vec![ack_set("Name", rest)])
            }
            "id" | "number" => {
                self.student_number = rest.to_string();
                Ok(vec![ack_set("Student number", rest)])
            }
            "text" | "translation" => {
                self.translation = rest.to_string();
                Ok(vec![ack_set("Translation", rest)])
            }
            "try" => self.try_translation(rest).await,
            "submit" => self.submit(rest).await,
            "finish" => self.finish().await,
            "scores" => Ok(self.scores_reply()),
            "help" => Ok(vec![Reply::Info(HELP_TEXT.to_string())]),
            "quit" | "exit" => Ok(vec![Reply::Quit]),
            other => Ok(vec![Reply::Warning(format!(
                "Unknown command '{other}'. Type 'help' for commands."
            ))]),
        }
    }

    /// Grade without recording anything.
    async fn try_translation(&mut self, inline: &str) -> Result<Vec<Reply>> {
        if !inline.is_empty() {
            self.translation = inline.to_string();
        }
        if self.translation.trim().is_empty() {
            return Ok(vec![Reply::Warning(
                "Please enter your translation first.".to_string(),
            )]);
        }

        let result = self.grade_current().await?;
        Ok(vec![Reply::Info(format!(
            "Feedback (try only):\n\n{}",
            result.feedback
        ))])
    }

    /// Grade and record the score under the current student number.
    async fn submit(&mut self, inline: &str) -> Result<Vec<Reply>> {
        if !inline.is_empty() {
            self.translation = inline.to_string();
        }
        if self.name.trim().is_empty()
            || self.student_number.trim().is_empty()
            || self.translation.trim().is_empty()
        {
            return Ok(vec![Reply::Warning(
                "Please fill in your name, student number, and translation.".to_string(),
            )]);
        }

        let result = self.grade_current().await?;
        self.store.record(&self.student_number, result.score);
        Ok(vec![Reply::Success(format!(
            "Feedback (submitted):\n\n{}",
            result.feedback
        ))])
    }

    /// Persist the average of the submitted scores and clear them.
    ///
    /// The store is cleared only after the sink accepted the row, so a
    /// failed append can be retried with the scores intact.
    async fn finish(&mut self) -> Result<Vec<Reply>> {
        let row = self
            .store
            .peek(&self.student_number)
            .and_then(|scores| FinalScore::from_scores(&self.name, &self.student_number, scores));

        match row {
            Some(row) => {
                self.sink.append(&row).await?;
                self.store.clear(&self.student_number);
                Ok(vec![Reply::Success(format!(
                    "Final average score {:.1} saved for {} ({}).",
                    row.average, row.name, row.student_number
                ))])
            }
            None => Ok(vec![Reply::Warning(
                "No submitted scores found for this session.".to_string(),
            )]),
        }
    }

    fn scores_reply(&self) -> Vec<Reply> {
        let scores = self.store.peek(&self.student_number).unwrap_or(&[]);
        match FinalScore::from_scores(&self.name, &self.student_number, scores) {
            Some(row) => vec![Reply::Scores {
                student_number: self.student_number.clone(),
                scores: scores.to_vec(),
                average: row.average,
            }],
            None => vec![Reply::Warning(format!(
                "No scores recorded for '{}' yet.",
                self.student_number
            ))],
        }
    }

    async fn grade_current(&self) -> Result<GradingResult> {
        self.grader
            .grade(&GradeRequest::for_reference(&self.translation))
            .await
    }
}

fn ack_set(label: &str, value: &str) -> Reply {
    if value.is_empty() {
        Reply::Info(format!("{label} cleared."))
    } else {
        Reply::Info(format!("{label} set to '{value}'."))
    }
}
