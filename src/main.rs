use std::sync::Arc;

use tokio::net::TcpListener;

use excelhub::application::ports::MarkdownConverter;
use excelhub::application::services::{AnswerRenderer, RelayService};
use excelhub::domain::QuickAnswer;
use excelhub::infrastructure::llm::{ProviderFactory, ReqwestTransport};
use excelhub::infrastructure::markdown::PulldownMarkdownConverter;
use excelhub::infrastructure::observability::{TracingConfig, init_tracing};
use excelhub::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        &TracingConfig::from_settings(environment, &settings.logging),
        settings.server.port,
    );

    let relay_service = Arc::new(RelayService::new(
        Arc::new(ReqwestTransport::new()),
        ProviderFactory::create_all(&settings.providers),
    ));

    let converter: Arc<dyn MarkdownConverter> = Arc::new(PulldownMarkdownConverter::new());
    let quick_answers = load_quick_answers(&settings.content.quick_answers_path).await;

    let state = AppState {
        relay_service,
        renderer: AnswerRenderer::new(converter),
        quick_answers,
    };

    let router = create_router(state, settings.content.static_dir.as_deref());

    let address = settings.server.address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Listening on {}", address);

    axum::serve(listener, router).await?;

    Ok(())
}

async fn load_quick_answers(path: &str) -> Option<Arc<Vec<QuickAnswer>>> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(path, error = %e, "Quick answers feed unavailable");
            return None;
        }
    };

    match QuickAnswer::parse_feed(&raw) {
        Ok(answers) => {
            tracing::info!(count = answers.len(), "Quick answers loaded");
            Some(Arc::new(answers))
        }
        Err(e) => {
            tracing::warn!(path, error = %e, "Quick answers feed is malformed");
            None
        }
    }
}
