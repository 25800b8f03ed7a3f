//! lingograde-services — External service integrations.
//!
//! Implements the `Grader` trait against the OpenAI chat completions API
//! and the `ScoreSink` trait against the Google Sheets append API, plus the
//! configuration that wires them together.

pub mod config;
pub mod error;
pub mod mock;
pub mod openai;
pub mod sheets;

pub use config::{create_grader, create_sink, load_config, load_config_from, AppConfig};
pub use error::ServiceError;
