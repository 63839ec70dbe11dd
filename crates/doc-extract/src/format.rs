//! Mapping from a claimed file extension to a reader

use std::fmt;
use std::path::Path;

/// Document encodings the extractor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Page-based (`.pdf`)
    Pdf,
    /// Paragraph-based (`.docx`)
    Docx,
    /// UTF-8 plain text (`.txt`)
    PlainText,
}

impl DocumentFormat {
    /// Every accepted extension, with the leading dot
    pub const SUPPORTED_EXTENSIONS: &'static [&'static str] = &[".pdf", ".docx", ".txt"];

    /// Resolve an extension such as ".PDF" or "docx" (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            "txt" => Some(DocumentFormat::PlainText),
            _ => None,
        }
    }

    /// Resolve the format from a file name's extension
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => ".pdf",
            DocumentFormat::Docx => ".docx",
            DocumentFormat::PlainText => ".txt",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
