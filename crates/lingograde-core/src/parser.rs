//! Grader output parsing and prompt construction.
//!
//! Graders are asked to reply in a `Score: X` / `Feedback: ...` shape, but
//! model output is not trusted: parsing is lenient and falls back to a zero
//! score instead of failing the attempt.

use crate::model::GradingResult;

/// Build the grading prompt for one translation attempt.
pub fn build_grading_prompt(reference: &str, translation: &str) -> String {
    format!(
        "You are a grading assistant. Compare the student's translation to the reference translation.\n\
         Reference: {reference}\n\
         Student: {translation}\n\
         Give a score from 0 to 100, and explain briefly why.\n\
         Format: 'Score: X\nFeedback: ...'"
    )
}

/// Parse raw grader output into a [`GradingResult`].
///
/// The score is taken from the first line containing `Score:`, reading the
/// text after the line's first colon as an integer and clamping it to
/// 0..=100. If no such line exists or the number does not parse, the score
/// defaults to 0. The feedback is always the full raw output, so the student
/// sees whatever the grader said even when it ignored the format.
pub fn parse_grading_result(output: &str) -> GradingResult {
    let score = output
        .lines()
        .find(|line| line.contains("Score:"))
        .and_then(|line| line.split_once(':'))
        .and_then(|(_, rest)| rest.trim().parse::<i64>().ok())
        .map(|n| n.clamp(0, 100) as u8)
        .unwrap_or_else(|| {
            tracing::warn!("grader output had no parsable 'Score:' line, defaulting to 0");
            0
        });

    GradingResult {
        score,
        feedback: output.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_well_formed_output() {
        let output = "Score: 87\nFeedback: Close to the reference, minor word-order issue.";
        let result = parse_grading_result(output);
        assert_eq!(result.score, 87);
        assert_eq!(result.feedback, output);
    }

    #[test]
    fn parse_output_without_score_line_defaults_to_zero() {
        let output = "The translation is quite good overall.";
        let result = parse_grading_result(output);
        assert_eq!(result.score, 0);
        assert_eq!(result.feedback, output);
    }

    #[test]
    fn parse_score_on_later_line() {
        let output = "Nice attempt!\nScore: 72\nFeedback: A few articles are missing.";
        let result = parse_grading_result(output);
        assert_eq!(result.score, 72);
    }

    #[test]
    fn parse_prefixed_score_label() {
        let result = parse_grading_result("Total Score: 95\nFeedback: Excellent.");
        assert_eq!(result.score, 95);
    }

    #[test]
    fn parse_non_numeric_score_defaults_to_zero() {
        let result = parse_grading_result("Score: eighty\nFeedback: ...");
        assert_eq!(result.score, 0);
    }

    #[test]
    fn parse_empty_score_defaults_to_zero() {
        let result = parse_grading_result("Score:\nFeedback: ...");
        assert_eq!(result.score, 0);
    }

    #[test]
    fn parse_uses_first_colon_on_the_line() {
        // The first colon ends "Note", leaving unparsable text after it.
        let result = parse_grading_result("Note: the Score: 87 part is below");
        assert_eq!(result.score, 0);
    }

    #[test]
    fn parse_clamps_out_of_range_scores() {
        assert_eq!(parse_grading_result("Score: 150").score, 100);
        assert_eq!(parse_grading_result("Score: -5").score, 0);
    }

    #[test]
    fn parse_keeps_feedback_verbatim() {
        let output = "Score: 60\nFeedback: Several mistakes.\nTry again.";
        let result = parse_grading_result(output);
        assert_eq!(result.feedback, output);
    }

    #[test]
    fn prompt_contains_both_texts() {
        let prompt = build_grading_prompt("The cat sat on the mat.", "Le chat s'est assis");
        assert!(prompt.contains("Reference: The cat sat on the mat."));
        assert!(prompt.contains("Student: Le chat s'est assis"));
        assert!(prompt.contains("Score: X"));
    }
}
