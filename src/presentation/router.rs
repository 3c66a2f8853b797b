use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::UpstreamTransport;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, quick_answers_handler, relay_handler, render_handler,
};
use crate::presentation::state::AppState;

/// Builds the relay router. When `static_dir` is set, unmatched paths are
/// served from it.
pub fn create_router<T>(state: AppState<T>, static_dir: Option<&str>) -> Router
where
    T: UpstreamTransport + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let mut router = Router::new()
        .route("/health", get(health_handler::<T>))
        .route("/api/quick-answers", get(quick_answers_handler::<T>))
        .route("/api/render", post(render_handler::<T>))
        .route("/api/{provider}", post(relay_handler::<T>));

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
