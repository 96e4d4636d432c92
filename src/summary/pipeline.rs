//! Summary generation pipeline
//!
//! Validates notes, masks them when asked, builds the prompt and asks the
//! completion provider for a summary. Knows nothing about HTTP.

use std::sync::Arc;

use crate::llm::{build_summary_messages, request_completion, CompletionProvider};
use crate::privacy::PiiMasker;
use crate::summary::{SummaryRequest, SummaryResponse};
use crate::{Result, SummaryError};

/// Message returned when notes are empty or whitespace-only.
pub const EMPTY_NOTES_MESSAGE: &str = "Session notes are required to generate a summary.";

/// Turns a validated request into a summary
#[derive(Clone)]
pub struct SummaryPipeline {
    provider: Arc<dyn CompletionProvider>,
    masker: &'static PiiMasker,
}

impl SummaryPipeline {
    /// Create a pipeline backed by `provider`
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            masker: PiiMasker::global(),
        }
    }

    /// Generate a summary for `request`
    pub async fn run(&self, request: &SummaryRequest) -> Result<SummaryResponse> {
        if request.notes.trim().is_empty() {
            return Err(SummaryError::BadRequest(EMPTY_NOTES_MESSAGE.to_string()));
        }

        let notes = if request.prefs.anonymize_data {
            let (masked, report) = self.masker.mask_with_report(&request.notes);
            tracing::debug!(
                emails = report.emails,
                phones = report.phones + report.indian_mobiles,
                aadhaar = report.aadhaar,
                "Masked PII in notes"
            );
            masked
        } else {
            request.notes.clone()
        };

        let messages = build_summary_messages(&request.prefs, &notes);
        let summary = request_completion(self.provider.as_ref(), &messages).await?;

        tracing::info!(summary_len = summary.len(), "Summary generated");

        Ok(SummaryResponse { summary })
    }
}
