//! Contract review pipeline
//!
//! Wires extraction, classification, risk detection and clause explanation
//! into one call per uploaded document:
//!
//! ```text
//! bytes + file name -> TextExtractor -> ReviewEngine -> ContractReview
//! ```
//!
//! Each call is independent; nothing is cached or shared between documents.

pub mod console;

use doc_extract::{ExtractError, TextExtractor};
use review_engine::ReviewEngine;
use shared_types::{ContractDocument, ContractReview};

/// Runs the full review for one document at a time
#[derive(Debug, Clone, Default)]
pub struct ContractReviewer {
    extractor: TextExtractor,
    engine: ReviewEngine,
}

impl ContractReviewer {
    pub fn new(extractor: TextExtractor, engine: ReviewEngine) -> Self {
        Self { extractor, engine }
    }

    /// Review `document`, treating unreadable content as an empty document
    pub fn review(&self, document: &ContractDocument) -> ContractReview {
        let text = match self.extractor.extract_document(document) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    file = %document.file_name,
                    error = %e,
                    "extraction failed, reviewing as empty document"
                );
                String::new()
            }
        };
        self.engine.review_text(&text, &document.file_name)
    }

    /// Review `document`, returning extraction errors to the caller
    pub fn review_strict(&self, document: &ContractDocument) -> Result<ContractReview, ExtractError> {
        let text = self.extractor.extract_document(document)?;
        Ok(self.engine.review_text(&text, &document.file_name))
    }
}

/// Review with default settings; extraction failures yield an empty review
pub fn review_document(file_name: &str, bytes: &[u8]) -> ContractReview {
    ContractReviewer::default().review(&ContractDocument::new(file_name, bytes.to_vec()))
}

/// Review with default settings; extraction failures are returned
pub fn review_document_strict(file_name: &str, bytes: &[u8]) -> Result<ContractReview, ExtractError> {
    ContractReviewer::default().review_strict(&ContractDocument::new(file_name, bytes.to_vec()))
}
