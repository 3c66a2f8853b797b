use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::application::ports::{FileParser, FileParserError};
use crate::domain::{FileContent, UploadedFile};

/// Header row becomes the keys. The csv reader already skips blank lines.
/// Bytes that are not UTF-8 (cp1252 exports) decode to U+FFFD.
pub struct CsvParser;

#[async_trait]
impl FileParser for CsvParser {
    async fn parse(&self, file: &UploadedFile) -> Result<FileContent, FileParserError> {
        parse_records(&file.data).map(FileContent::Records)
    }
}

pub fn parse_records(data: &[u8]) -> Result<Vec<Map<String, Value>>, FileParserError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(|e| FileParserError::MalformedDelimitedText(e.to_string()))?
        .iter()
        .map(lossy)
        .collect();

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(|e| FileParserError::MalformedDelimitedText(e.to_string()))?;
        let row = headers
            .iter()
            .zip(record.iter())
            .map(|(key, value)| (key.clone(), Value::String(lossy(value))))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

fn lossy(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}
