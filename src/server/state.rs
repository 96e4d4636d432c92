//! Shared, read-only state handed to every request

use std::sync::Arc;

use crate::config::Settings;
use crate::llm::CompletionProvider;
use crate::summary::SummaryPipeline;

/// State shared by all handlers. Nothing in it changes after startup.
pub struct AppState {
    pub settings: Arc<Settings>,
    pub pipeline: SummaryPipeline,
}

impl AppState {
    pub fn new(settings: Arc<Settings>, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            settings,
            pipeline: SummaryPipeline::new(provider),
        }
    }
}
