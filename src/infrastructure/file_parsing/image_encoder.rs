use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};

use crate::application::ports::{FileParser, FileParserError};
use crate::domain::{FileContent, FileKind, UploadedFile};

/// Encodes image bytes as standard base64, the payload part of a data URL.
pub struct ImageEncoder;

#[async_trait]
impl FileParser for ImageEncoder {
    async fn parse(&self, file: &UploadedFile) -> Result<FileContent, FileParserError> {
        if file.kind() != FileKind::Image {
            return Err(FileParserError::UnsupportedKind(file.mime_type.clone()));
        }

        Ok(FileContent::Text(general_purpose::STANDARD.encode(&file.data)))
    }
}
