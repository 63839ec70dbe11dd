//! Legal summary export
//!
//! Turns an [`AnalysisResult`] into a short plain-text summary and renders
//! that summary to a PDF file. Every entry point returns either the path of a
//! file that was written or a [`ReportError`]; there is no partial success.

pub mod error;
pub mod render;
pub mod summary;

pub use error::ReportError;
pub use render::{generate_pdf, render_pdf_bytes};
pub use summary::{build_summary, build_summary_at};

use std::path::{Path, PathBuf};

use shared_types::AnalysisResult;

/// File name offered for the exported summary
pub const DEFAULT_REPORT_FILE_NAME: &str = "legal_summary.pdf";

/// Build the summary for `result` and write it as a PDF to `output_path`
pub fn export_summary(result: &AnalysisResult, output_path: &Path) -> Result<PathBuf, ReportError> {
    let summary = build_summary(result);
    generate_pdf(&summary, output_path)
}
