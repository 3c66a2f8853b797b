use async_trait::async_trait;

use crate::domain::{FileContent, UploadedFile};

#[async_trait]
pub trait FileParser: Send + Sync {
    async fn parse(&self, file: &UploadedFile) -> Result<FileContent, FileParserError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileParserError {
    #[error("unsupported file kind: {0}")]
    UnsupportedKind(String),
    #[error("malformed delimited text: {0}")]
    MalformedDelimitedText(String),
    #[error("malformed workbook: {0}")]
    MalformedWorkbook(String),
    #[error("workbook has no sheets")]
    EmptyWorkbook,
}
