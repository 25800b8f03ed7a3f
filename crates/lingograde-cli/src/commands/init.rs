//! The `lingograde init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create lingograde.toml
    if std::path::Path::new("lingograde.toml").exists() {
        println!("lingograde.toml already exists, skipping.");
    } else {
        std::fs::write("lingograde.toml", SAMPLE_CONFIG)?;
        println!("Created lingograde.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit lingograde.toml or set OPENAI_API_KEY");
    println!("  2. Save a Google service account key as service-account.json");
    println!("  3. Share the spreadsheet with the service account email");
    println!("  4. Run: lingograde run");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# lingograde configuration

[openai]
api_key = "${OPENAI_API_KEY}"
model = "gpt-4o-mini"

[sheets]
credentials_file = "service-account.json"
spreadsheet_id = "your-spreadsheet-id"
worksheet = "Sheet1"
"#;
