//! therapy-summary - turns therapy session notes into AI-generated summaries
//!
//! A single-endpoint HTTP service: callers post notes and formatting
//! preferences, the notes are optionally scrubbed of PII, and the prompt is
//! forwarded to a chat-completion API.

pub mod cli;
pub mod config;
pub mod llm;
pub mod privacy;
pub mod server;
pub mod summary;

use thiserror::Error;

/// Main error type for therapy-summary
#[derive(Error, Debug)]
pub enum SummaryError {
    /// Required configuration is missing; the process must not start.
    #[error("{0}")]
    StartupConfig(String),

    #[error("Invalid or missing API key")]
    Unauthorized,

    /// The request body could not be decoded into a summary request.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    /// The completion provider failed.
    #[error("OpenAI API error: {0}")]
    Upstream(String),
}

pub type Result<T> = std::result::Result<T, SummaryError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "therapy-summary";
