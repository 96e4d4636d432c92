//! Summary module for therapy-summary
//!
//! Request/response models and the pipeline that produces a summary.

mod models;
mod pipeline;

pub use models::{Preferences, SummaryRequest, SummaryResponse};
pub use pipeline::{SummaryPipeline, EMPTY_NOTES_MESSAGE};
