//! Request and response payloads for summary generation

use serde::{Deserialize, Serialize};

/// Formatting preferences supplied with each request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Tone of the summary (e.g. "professional", "empathetic")
    pub tone: String,
    /// Whether the summary should list action items
    pub include_action_items: bool,
    /// Whether notes are masked before leaving the process
    pub anonymize_data: bool,
    /// Kind of session (e.g. "individual", "couples")
    pub session_type: String,
    /// Requested length (e.g. "short", "detailed")
    pub summary_length: String,
}

/// Body of `POST /api/generate-summary`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub notes: String,
    pub prefs: Preferences,
}

/// Successful response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}
