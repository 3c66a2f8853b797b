use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::UpstreamTransport;
use crate::domain::RelayRequest;
use crate::presentation::state::AppState;

use super::error_response::ErrorResponse;

#[derive(Serialize)]
pub struct RelayResponse {
    pub response: String,
}

/// `POST /api/{provider}`: forwards the payload to the named provider.
#[tracing::instrument(skip(state, payload))]
pub async fn relay_handler<T>(
    State(state): State<AppState<T>>,
    Path(provider): Path<String>,
    payload: Result<Json<RelayRequest>, JsonRejection>,
) -> Response
where
    T: UpstreamTransport + 'static,
{
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Rejected relay payload");
            return ErrorResponse::new(rejection.body_text())
                .into_response_with(StatusCode::BAD_REQUEST);
        }
    };

    match state.relay_service.relay(&provider, &request).await {
        Ok(response) => {
            tracing::info!(response_chars = response.chars().count(), "Relay successful");
            (StatusCode::OK, Json(RelayResponse { response })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Relay failed");
            e.into_response()
        }
    }
}
