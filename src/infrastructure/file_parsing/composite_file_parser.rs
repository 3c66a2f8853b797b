use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileParser, FileParserError};
use crate::domain::{FileContent, FileKind, UploadedFile};

use super::csv_parser::CsvParser;
use super::image_encoder::ImageEncoder;
use super::workbook_parser::WorkbookParser;

/// Routes each file to the parser registered for its [`FileKind`].
pub struct CompositeFileParser {
    parsers: HashMap<FileKind, Arc<dyn FileParser>>,
}

impl CompositeFileParser {
    pub fn new(parsers: Vec<(FileKind, Arc<dyn FileParser>)>) -> Self {
        Self {
            parsers: parsers.into_iter().collect(),
        }
    }

    /// Image, CSV and workbook parsers.
    pub fn with_defaults() -> Self {
        let image: Arc<dyn FileParser> = Arc::new(ImageEncoder);
        let csv: Arc<dyn FileParser> = Arc::new(CsvParser);
        let workbook: Arc<dyn FileParser> = Arc::new(WorkbookParser);

        Self::new(vec![
            (FileKind::Image, image),
            (FileKind::DelimitedText, csv),
            (FileKind::Workbook, workbook),
        ])
    }
}

#[async_trait]
impl FileParser for CompositeFileParser {
    async fn parse(&self, file: &UploadedFile) -> Result<FileContent, FileParserError> {
        let kind = file.kind();
        let parser = self
            .parsers
            .get(&kind)
            .ok_or_else(|| FileParserError::UnsupportedKind(kind.as_str().to_string()))?;

        parser.parse(file).await
    }
}
