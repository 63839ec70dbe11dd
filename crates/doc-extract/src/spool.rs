//! Scoped temporary storage for uploaded bytes.
//!
//! Parsers that want a filesystem path get one from [`SpooledFile`]. The file
//! lives exactly as long as the guard: it is removed on drop, whether parsing
//! succeeded or not.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ExtractError;

/// File name prefix of every spooled upload
pub const SPOOL_PREFIX: &str = "contract-";

pub struct SpooledFile {
    file: NamedTempFile,
}

impl SpooledFile {
    /// Write `bytes` to a fresh temp file whose name ends with `suffix`.
    ///
    /// The file is created in `dir`, or the system temp directory when `None`.
    pub fn create(bytes: &[u8], suffix: &str, dir: Option<&Path>) -> Result<Self, ExtractError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(SPOOL_PREFIX).suffix(suffix);
        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(bytes)?;
        file.flush()?;

        tracing::debug!(path = %file.path().display(), len = bytes.len(), "spooled upload");
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
