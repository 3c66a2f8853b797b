use std::io::Cursor;

use async_trait::async_trait;
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use serde_json::{Number, Value};

use crate::application::ports::{FileParser, FileParserError};
use crate::domain::{FileContent, UploadedFile};

/// First sheet only, every row as a positional array. The header row is kept
/// as the first row.
pub struct WorkbookParser;

#[async_trait]
impl FileParser for WorkbookParser {
    async fn parse(&self, file: &UploadedFile) -> Result<FileContent, FileParserError> {
        let data = file.data.clone();
        let rows = tokio::task::spawn_blocking(move || parse_first_sheet(data))
            .await
            .map_err(|e| FileParserError::MalformedWorkbook(e.to_string()))??;

        Ok(FileContent::Grid(rows))
    }
}

pub fn parse_first_sheet(data: Vec<u8>) -> Result<Vec<Vec<Value>>, FileParserError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
        .map_err(|e| FileParserError::MalformedWorkbook(e.to_string()))?;

    let first_sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(FileParserError::EmptyWorkbook)?;

    let range = workbook
        .worksheet_range(&first_sheet)
        .map_err(|e| FileParserError::MalformedWorkbook(e.to_string()))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_value).collect())
        .collect())
}

pub fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(text) => Value::String(text.clone()),
        Data::Int(n) => Value::from(*n),
        Data::Float(f) => float_value(*f),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => Number::from_f64(dt.as_f64()).map_or(Value::Null, Value::Number),
        Data::DateTimeIso(text) | Data::DurationIso(text) => Value::String(text.clone()),
        Data::Error(e) => Value::String(e.to_string()),
    }
}

/// Whole numbers are written as integers, so `3` rather than `3.0`.
fn float_value(f: f64) -> Value {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Value::from(f as i64)
    } else {
        Number::from_f64(f).map_or(Value::Null, Value::Number)
    }
}
