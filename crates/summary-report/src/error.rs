use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("PDF generation failed: {0}")]
    PdfError(String),

    #[error("Output path has no file name: {0}")]
    InvalidOutputPath(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<lopdf::Error> for ReportError {
    fn from(err: lopdf::Error) -> Self {
        ReportError::PdfError(err.to_string())
    }
}
