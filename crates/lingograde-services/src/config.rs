//! Application configuration and service factories.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::openai::{OpenAiGrader, DEFAULT_MODEL};
use crate::sheets::{ServiceAccountKey, SheetsClient};

/// Grader configuration.
///
/// Note: Custom Debug impl masks the API key to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// OpenAI API key. Supports `${VAR}` environment references.
    pub api_key: String,
    /// Override for the API base URL.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Model used for grading.
    #[serde(default = "default_model")]
    pub model: String,
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Score sink configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsConfig {
    /// Path to the service account JSON key file.
    pub credentials_file: PathBuf,
    /// Spreadsheet to append rows to.
    pub spreadsheet_id: String,
    /// Worksheet (tab) receiving the rows.
    #[serde(default = "default_worksheet")]
    pub worksheet: String,
    /// Override for the Sheets API base URL.
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_worksheet() -> String {
    "Sheet1".to_string()
}

/// Top-level lingograde configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Grader settings.
    pub openai: OpenAiConfig,
    /// Score sink settings.
    pub sheets: SheetsConfig,
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_optional(value: &Option<String>) -> Option<String> {
    value.as_ref().map(|v| resolve_env_vars(v))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `lingograde.toml` in the current directory
/// 2. `~/.config/lingograde/config.toml`
///
/// Environment variable override: `LINGOGRADE_OPENAI_KEY`.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<AppConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            p.to_path_buf()
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("lingograde.toml");
        let global = dirs_path().map(|d| d.join("config.toml"));
        if local.exists() {
            local
        } else if let Some(global) = global.filter(|g| g.exists()) {
            global
        } else {
            anyhow::bail!("no configuration found; run `lingograde init` to create lingograde.toml");
        }
    };

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config: {}", config_path.display()))?;
    let mut config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse config: {}", config_path.display()))?;

    // Apply env var override
    if let Ok(key) = std::env::var("LINGOGRADE_OPENAI_KEY") {
        config.openai.api_key = key;
    }

    // Resolve env var references
    config.openai.api_key = resolve_env_vars(&config.openai.api_key);
    config.openai.base_url = resolve_optional(&config.openai.base_url);
    config.sheets.spreadsheet_id = resolve_env_vars(&config.sheets.spreadsheet_id);
    config.sheets.base_url = resolve_optional(&config.sheets.base_url);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("lingograde"))
}

/// Create the grader from its configuration.
pub fn create_grader(config: &AppConfig) -> OpenAiGrader {
    OpenAiGrader::new(
        &config.openai.api_key,
        config.openai.base_url.clone(),
        &config.openai.model,
    )
}

/// Create the score sink from its configuration.
///
/// Reads the service account key file named by `sheets.credentials_file`.
pub fn create_sink(config: &AppConfig) -> Result<SheetsClient> {
    let key = ServiceAccountKey::from_file(&config.sheets.credentials_file)?;
    Ok(SheetsClient::new(
        key,
        &config.sheets.spreadsheet_id,
        &config.sheets.worksheet,
        config.sheets.base_url.clone(),
    ))
}
