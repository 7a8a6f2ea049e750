use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use planforge_core::catalog::EVALUATION_RECORDS;

use crate::error::ExportError;

/// Writes the evaluation result blocks to disk as pretty-printed JSON.
///
/// This is the only filesystem touch in the app; the target path comes from
/// configuration so the binary decides where downloads land.
#[derive(Clone, Debug)]
pub struct ResultExporter {
    path: PathBuf,
}

impl ResultExporter {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize all result blocks and write them to the configured path.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Serialize` if encoding fails.
    /// Returns `ExportError::Io` if the file cannot be written.
    pub fn export(&self) -> Result<PathBuf, ExportError> {
        let json = serde_json::to_string_pretty(EVALUATION_RECORDS.as_slice())?;
        fs::write(&self.path, json)?;
        info!(path = %self.path.display(), "exported evaluation results");
        Ok(self.path.clone())
    }
}
