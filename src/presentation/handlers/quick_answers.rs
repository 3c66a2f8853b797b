use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::UpstreamTransport;
use crate::presentation::state::AppState;

use super::error_response::ErrorResponse;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAnswerView {
    pub question: String,
    pub answer_html: String,
}

/// `GET /api/quick-answers`: the FAQ feed with answers converted to HTML.
pub async fn quick_answers_handler<T>(State(state): State<AppState<T>>) -> Response
where
    T: UpstreamTransport + 'static,
{
    let Some(answers) = &state.quick_answers else {
        return ErrorResponse::new("Could not load quick answers.")
            .into_response_with(StatusCode::SERVICE_UNAVAILABLE);
    };

    let views: Vec<QuickAnswerView> = answers
        .iter()
        .map(|item| QuickAnswerView {
            question: item.question.clone(),
            answer_html: state.renderer.render_plain(&item.answer),
        })
        .collect();

    (StatusCode::OK, Json(views)).into_response()
}
