//! The `lingograde try` command.

use std::path::PathBuf;

use anyhow::Result;

use lingograde_core::traits::{GradeRequest, Grader};
use lingograde_services::config::{create_grader, load_config_from};

pub async fn execute(translation: String, config_path: Option<PathBuf>) -> Result<()> {
    anyhow::ensure!(
        !translation.trim().is_empty(),
        "translation must not be empty"
    );

    let config = load_config_from(config_path.as_deref())?;
    let grader = create_grader(&config);

    let result = grader
        .grade(&GradeRequest::for_reference(&translation))
        .await?;

    println!("{}", result.feedback);
    println!();
    println!("Parsed score: {}/100", result.score);

    Ok(())
}
