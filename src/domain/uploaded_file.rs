use super::relay_request::FileContent;

/// A file picked or dropped by the user, before any parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }

    pub fn kind(&self) -> FileKind {
        FileKind::classify(&self.mime_type, &self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Image,
    DelimitedText,
    Workbook,
    Opaque,
}

impl FileKind {
    /// Declared mime type wins for images; everything else goes by extension.
    pub fn classify(mime_type: &str, name: &str) -> Self {
        if mime_type.starts_with("image/") {
            return Self::Image;
        }

        let name = name.to_lowercase();
        if name.ends_with(".csv") {
            Self::DelimitedText
        } else if name.ends_with(".xlsx") || name.ends_with(".xls") {
            Self::Workbook
        } else {
            Self::Opaque
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::DelimitedText => "csv",
            Self::Workbook => "workbook",
            Self::Opaque => "opaque",
        }
    }
}

/// Result of ingesting an [`UploadedFile`].
#[derive(Debug, Clone, PartialEq)]
pub struct IngestedFile {
    pub name: String,
    pub mime_type: String,
    pub kind: FileKind,
    pub content: Option<FileContent>,
}
