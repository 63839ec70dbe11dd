use thiserror::Error;

/// Errors that can occur while extracting contract text
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Text file is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    #[error("Invalid DOCX archive: {0}")]
    InvalidDocx(#[from] zip::result::ZipError),

    #[error("DOCX is missing part '{0}'")]
    MissingPart(String),

    #[error("Malformed DOCX XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
