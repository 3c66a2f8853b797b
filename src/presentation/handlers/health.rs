use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::UpstreamTransport;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub providers: Vec<&'static str>,
}

pub async fn health_handler<T>(State(state): State<AppState<T>>) -> impl IntoResponse
where
    T: UpstreamTransport + 'static,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            providers: state.relay_service.providers(),
        }),
    )
}
