use std::sync::Arc;

use crate::application::ports::{FileParser, FileParserError};
use crate::domain::{FileKind, IngestedFile, UploadedFile};

pub struct FileIngestor {
    parser: Arc<dyn FileParser>,
}

impl FileIngestor {
    pub fn new(parser: Arc<dyn FileParser>) -> Self {
        Self { parser }
    }

    #[tracing::instrument(skip(self, file), fields(name = %file.name, mime = %file.mime_type))]
    pub async fn ingest(&self, file: &UploadedFile) -> Result<IngestedFile, IngestionError> {
        let kind = file.kind();

        let content = match kind {
            FileKind::Opaque => None,
            _ => Some(self.parser.parse(file).await.map_err(|e| {
                tracing::warn!(kind = kind.as_str(), error = %e, "File ingestion failed");
                IngestionError { kind, source: e }
            })?),
        };

        tracing::debug!(kind = kind.as_str(), size_bytes = file.data.len(), "File ingested");

        Ok(IngestedFile {
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
            kind,
            content,
        })
    }
}

/// Notification shown once a file of this kind has been ingested.
pub fn loaded_message(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Image => "Image file loaded successfully!",
        FileKind::DelimitedText => "CSV file loaded successfully!",
        FileKind::Workbook => "Excel file loaded successfully!",
        FileKind::Opaque => "File uploaded successfully!",
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{}", user_message(.kind))]
pub struct IngestionError {
    pub kind: FileKind,
    #[source]
    pub source: FileParserError,
}

fn user_message(kind: &FileKind) -> &'static str {
    match kind {
        FileKind::Workbook => "Error reading Excel file. Please try again.",
        FileKind::DelimitedText => "Error reading CSV file. Please try again.",
        FileKind::Image | FileKind::Opaque => "Error reading file. Please try again.",
    }
}
