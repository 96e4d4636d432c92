//! Configuration module for therapy-summary
//!
//! Handles loading settings from a TOML file, `.env` and the environment.

mod settings;

pub use settings::{Settings, BACKEND_API_KEY_ENV, OPENAI_API_KEY_ENV};
