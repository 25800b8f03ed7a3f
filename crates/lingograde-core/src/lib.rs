//! lingograde-core — Core grading model, score parsing, and session state.
//!
//! This crate defines the fundamental data model, traits, and scoring logic
//! that the entire lingograde system builds on.

pub mod model;
pub mod parser;
pub mod session;
pub mod traits;
