use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::RelayError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match &self {
            RelayError::UnknownProvider(_) | RelayError::EmptyPrompt => StatusCode::BAD_REQUEST,
            RelayError::MissingCredential(_)
            | RelayError::Transport { .. }
            | RelayError::InvalidResponse { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        };

        ErrorResponse::new(self.to_string()).into_response_with(status)
    }
}
