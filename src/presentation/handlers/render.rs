use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::UpstreamTransport;
use crate::domain::ChartSpec;
use crate::infrastructure::markdown::inner_html;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct RenderRequest {
    pub markdown: String,
}

#[derive(Serialize)]
pub struct RenderResponse {
    pub html: String,
    /// Indexed by the `data-chart-index` of each canvas in `html`.
    pub charts: Vec<&'static ChartSpec>,
}

/// `POST /api/render`: Markdown answer to styled HTML plus chart specs.
#[tracing::instrument(skip(state, request), fields(markdown_chars = request.markdown.len()))]
pub async fn render_handler<T>(
    State(state): State<AppState<T>>,
    Json(request): Json<RenderRequest>,
) -> impl IntoResponse
where
    T: UpstreamTransport + 'static,
{
    let content = state.renderer.render(&request.markdown);
    tracing::debug!(charts = content.charts.len(), "Answer rendered");

    (
        StatusCode::OK,
        Json(RenderResponse {
            html: inner_html(&content.root),
            charts: content.charts,
        }),
    )
}
