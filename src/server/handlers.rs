//! HTTP handlers

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use tracing::Instrument;
use uuid::Uuid;

use crate::server::auth::authorize_headers;
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::summary::{SummaryRequest, SummaryResponse};
use crate::SummaryError;

/// `POST /api/generate-summary`
///
/// Authorizes first, then decodes the body, so an unauthenticated caller
/// always gets 401 whatever it sent.
pub async fn generate_summary(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let span = tracing::info_span!("generate_summary", request_id = %Uuid::new_v4());

    async move {
        authorize_headers(&headers, &state.settings.auth.api_key)?;

        let Json(request) =
            payload.map_err(|rejection| SummaryError::Validation(rejection.body_text()))?;

        tracing::info!(
            notes_len = request.notes.len(),
            anonymize = request.prefs.anonymize_data,
            session_type = %request.prefs.session_type,
            "Generating summary"
        );

        let response = state.pipeline.run(&request).await?;
        Ok::<_, ApiError>(Json(response))
    }
    .instrument(span)
    .await
}
