//! Clause segmentation
//!
//! Contract text is cut at numbered items ("\n 3." / "\n12)") and at
//! capitalized headings followed by a colon ("\nPayment Terms:"). The markers
//! themselves are dropped. The heading marker is case-sensitive, so it never
//! fires on text that has already been lowercased.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CLAUSE_BOUNDARY: Regex =
        Regex::new(r"\n\s*\d+[.)]|\n[A-Z][A-Za-z ]{3,}:").expect("valid clause boundary regex");
}

/// Fragments must be longer than this (in characters, after trimming)
pub const MIN_CLAUSE_CHARS: usize = 80;

/// Clauses kept per document
pub const MAX_CLAUSES: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmenterOptions {
    pub min_chars: usize,
    pub max_clauses: usize,
}

impl Default for SegmenterOptions {
    fn default() -> Self {
        Self {
            min_chars: MIN_CLAUSE_CHARS,
            max_clauses: MAX_CLAUSES,
        }
    }
}

/// Split `text` into clauses with the default limits
pub fn extract_clauses(text: &str) -> Vec<String> {
    extract_clauses_with(text, SegmenterOptions::default())
}

pub fn extract_clauses_with(text: &str, options: SegmenterOptions) -> Vec<String> {
    let clauses: Vec<String> = CLAUSE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() > options.min_chars)
        .take(options.max_clauses)
        .map(str::to_string)
        .collect();

    tracing::debug!(clauses = clauses.len(), "segmented clauses");
    clauses
}
