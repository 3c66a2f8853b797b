use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use excelhub::application::ports::MarkdownConverter;
use excelhub::application::services::{
    AnswerRenderer, FileIngestor, SessionState, UiCommand, UiController, UiEffect,
};
use excelhub::domain::{DetailLevel, UploadedFile};
use excelhub::infrastructure::file_parsing::CompositeFileParser;
use excelhub::infrastructure::markdown::{PulldownMarkdownConverter, inner_html};
use excelhub::infrastructure::relay_client::HttpRelayClient;

/// Ask the ExcelHub relay a question, optionally about a local file.
#[derive(Parser, Debug)]
#[command(name = "excelhub-ask", version)]
struct Cli {
    /// The question to ask.
    question: String,

    /// Relay base URL.
    #[arg(long, default_value = "http://localhost:3000")]
    server: String,

    /// Provider to route the question to.
    #[arg(long, default_value = "gemini")]
    provider: String,

    /// Answer length: concise or detailed.
    #[arg(long, default_value = "detailed")]
    detail: DetailLevel,

    /// Image, CSV or workbook to attach.
    #[arg(long)]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let converter: Arc<dyn MarkdownConverter> = Arc::new(PulldownMarkdownConverter::new());
    let controller = UiController::new(
        Arc::new(HttpRelayClient::new(&cli.server)),
        Arc::new(FileIngestor::new(Arc::new(CompositeFileParser::with_defaults()))),
        AnswerRenderer::new(converter),
    );
    let mut session = SessionState::new();

    if let Some(path) = &cli.file {
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file = UploadedFile::new(name.clone(), guess_mime(&name), data);
        report(controller.dispatch(&mut session, UiCommand::SelectFile(file)).await);
    }

    let command = UiCommand::Generate {
        query: cli.question,
        provider: cli.provider,
        detail: cli.detail,
    };
    let failed = report(controller.dispatch(&mut session, command).await);

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

/// Writes effects out; returns whether any of them was an error.
fn report(effects: Vec<UiEffect>) -> bool {
    let mut failed = false;
    for effect in effects {
        match effect {
            UiEffect::Notification(text) => eprintln!("{text}"),
            UiEffect::Error(text) => {
                failed = true;
                eprintln!("{text}");
            }
            UiEffect::Preview(preview) => {
                eprintln!("{}", preview.headers.join(" | "));
                for row in &preview.rows {
                    eprintln!("{}", row.join(" | "));
                }
                eprintln!("({} rows total)", preview.total_rows);
            }
            UiEffect::Content(content) => {
                println!("{}", inner_html(&content.root));
                for (index, chart) in content.charts.iter().enumerate() {
                    eprintln!("chart {index}: {}", serde_json::to_string(chart).unwrap_or_default());
                }
            }
            UiEffect::FileSelected(_)
            | UiEffect::FileCleared
            | UiEffect::Loading(_) => {}
        }
    }
    failed
}

fn guess_mime(name: &str) -> &'static str {
    let extension = name.rsplit('.').next().unwrap_or_default().to_lowercase();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "csv" => "text/csv",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "xls" => "application/vnd.ms-excel",
        _ => "application/octet-stream",
    }
}
