//! Page-based text extraction.
//!
//! Only the leading pages of a PDF are decoded; the page tree is walked in
//! page-number order and pages past the limit are never touched. A page whose
//! content stream cannot be decoded contributes nothing instead of failing the
//! whole document.

use std::path::Path;

use lopdf::Document;

use crate::error::ExtractError;

pub struct PdfExtractor {
    max_pages: usize,
}

impl PdfExtractor {
    pub fn new(max_pages: usize) -> Self {
        Self { max_pages }
    }

    /// Extract the concatenated text of the leading pages of the PDF at `path`
    ///
    /// # Errors
    /// - `ExtractError::InvalidPdf` - the file is not a parsable PDF
    pub fn extract_path(&self, path: &Path) -> Result<String, ExtractError> {
        let document =
            Document::load(path).map_err(|e| ExtractError::InvalidPdf(e.to_string()))?;
        Ok(self.extract_document(&document))
    }

    fn extract_document(&self, document: &Document) -> String {
        let pages = document.get_pages();
        tracing::debug!(
            page_count = pages.len(),
            max_pages = self.max_pages,
            "reading pdf pages"
        );

        pages
            .keys()
            .take(self.max_pages)
            .map(|&page_number| Self::page_text(document, page_number))
            .collect()
    }

    fn page_text(document: &Document, page_number: u32) -> String {
        match document.extract_text(&[page_number]) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(page = page_number, error = %e, "page has no extractable text");
                String::new()
            }
        }
    }
}
