//! Mapping of [`SummaryError`] onto HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::SummaryError;

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// HTTP-facing wrapper around [`SummaryError`].
#[derive(Debug)]
pub struct ApiError(pub SummaryError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            SummaryError::Unauthorized => StatusCode::UNAUTHORIZED,
            SummaryError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SummaryError::BadRequest(_) => StatusCode::BAD_REQUEST,
            SummaryError::Upstream(_) | SummaryError::StartupConfig(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<SummaryError> for ApiError {
    fn from(err: SummaryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, "{}", self.0);
        } else {
            tracing::debug!(%status, "{}", self.0);
        }

        let body = Json(ErrorBody {
            detail: self.0.to_string(),
        });

        (status, body).into_response()
    }
}
