//! The `lingograde run` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use lingograde_core::traits::{Grader, ScoreSink, REFERENCE_TEXT};
use lingograde_services::config::{create_grader, create_sink, load_config_from};

use crate::session::{GradingSession, Reply};

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let grader: Arc<dyn Grader> = Arc::new(create_grader(&config));
    let sink: Arc<dyn ScoreSink> = Arc::new(create_sink(&config)?);
    tracing::info!(grader = grader.name(), "starting grading session");

    let mut session = GradingSession::new(grader, sink);

    eprintln!("lingograde v0.1.0 — translation grading session");
    eprintln!("Translate this sentence: \"{REFERENCE_TEXT}\"");
    eprintln!("Type 'help' for commands.");
    eprintln!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    eprint!("> ");
    while let Some(line) = lines.next_line().await? {
        match session.handle(&line).await {
            Ok(replies) => {
                if render_replies(&replies) {
                    break;
                }
            }
            // Backend failures abort the command, not the session
            Err(e) => eprintln!("Error: {e:#}"),
        }
        eprint!("> ");
    }
    eprintln!("Session ended.");

    Ok(())
}

/// Print replies to stdout; returns true when the session should end.
fn render_replies(replies: &[Reply]) -> bool {
    for reply in replies {
        match reply {
            Reply::Info(msg) | Reply::Success(msg) => println!("{msg}"),
            Reply::Warning(msg) => println!("Warning: {msg}"),
            Reply::Scores {
                student_number,
                scores,
                average,
            } => print_scores(student_number, scores, *average),
            Reply::Quit => return true,
        }
    }
    false
}

fn print_scores(student_number: &str, scores: &[u8], average: f64) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Attempt", "Score"]);
    for (i, score) in scores.iter().enumerate() {
        table.add_row(vec![Cell::new(i + 1), Cell::new(score)]);
    }

    println!("Scores for {student_number}:\n{table}");
    println!("Running average: {average:.1}");
}
