//! Contract text extraction
//!
//! Turns an uploaded document into the single lowercased string every
//! downstream heuristic runs on.
//!
//! # Formats
//! - `.pdf`: text of the first [`DEFAULT_MAX_PAGES`] pages, concatenated in order
//! - `.docx`: body paragraphs joined by a single space
//! - `.txt`: UTF-8 decoded verbatim
//!
//! Any other extension yields an empty string.
//!
//! # Example
//! ```no_run
//! use doc_extract::{ExtractError, TextExtractor};
//!
//! fn read_contract(bytes: &[u8]) -> Result<(), ExtractError> {
//!     let text = TextExtractor::default().extract("lease.pdf", bytes)?;
//!     println!("Extracted {} characters", text.len());
//!     Ok(())
//! }
//! ```

pub mod docx;
pub mod error;
pub mod format;
pub mod pdf;
pub mod spool;

pub use docx::DocxExtractor;
pub use error::ExtractError;
pub use format::DocumentFormat;
pub use pdf::PdfExtractor;

use std::path::PathBuf;

use shared_types::ContractDocument;
use spool::SpooledFile;

/// Leading pages read from a PDF
pub const DEFAULT_MAX_PAGES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub max_pages: usize,
    /// Where PDF and DOCX uploads are spooled; the system temp dir if `None`
    pub spool_dir: Option<PathBuf>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            spool_dir: None,
        }
    }
}

/// Main extraction interface
#[derive(Debug, Clone, Default)]
pub struct TextExtractor {
    options: ExtractOptions,
}

impl TextExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extract lowercased text from `bytes`, choosing the reader by `file_name`'s extension
    ///
    /// PDF and DOCX bytes are spooled to a temp file for parsing; the file is
    /// removed before this returns, on every path.
    ///
    /// # Errors
    /// - `ExtractError::InvalidUtf8` - a `.txt` upload is not UTF-8
    /// - `ExtractError::InvalidPdf` - a `.pdf` upload cannot be parsed
    /// - `ExtractError::InvalidDocx` / `MissingPart` / `Xml` - a `.docx` upload cannot be parsed
    /// - `ExtractError::IoError` - the spool file could not be written or read
    pub fn extract(&self, file_name: &str, bytes: &[u8]) -> Result<String, ExtractError> {
        let Some(format) = DocumentFormat::from_file_name(file_name) else {
            tracing::warn!(file_name, "unsupported extension, treating document as empty");
            return Ok(String::new());
        };

        let raw = match format {
            DocumentFormat::PlainText => String::from_utf8(bytes.to_vec())?,
            DocumentFormat::Pdf => {
                let spooled = self.spool(bytes, format)?;
                PdfExtractor::new(self.options.max_pages).extract_path(spooled.path())?
            }
            DocumentFormat::Docx => {
                let spooled = self.spool(bytes, format)?;
                DocxExtractor::extract_path(spooled.path())?
            }
        };

        tracing::debug!(%format, chars = raw.len(), "extracted text");
        Ok(raw.to_lowercase())
    }

    fn spool(&self, bytes: &[u8], format: DocumentFormat) -> Result<SpooledFile, ExtractError> {
        SpooledFile::create(bytes, format.extension(), self.options.spool_dir.as_deref())
    }

    pub fn extract_document(&self, document: &ContractDocument) -> Result<String, ExtractError> {
        self.extract(&document.file_name, &document.bytes)
    }
}

/// Extract with default options
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    TextExtractor::default().extract(file_name, bytes)
}
