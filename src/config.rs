//! Run configuration for an index generation pass

use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_FORMAT, OUTPUT_FILENAME};
use crate::error::{Error, Result};
use crate::generator::OutputFormat;

/// Everything a generation pass needs, as supplied by the CLI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Vault root to scan; the index is written here too.
    pub base_dir: PathBuf,
    /// Output format name, checked by [`IndexConfig::validate`].
    pub format: String,
    /// Build the index without writing it.
    pub dry_run: bool,
}

impl IndexConfig {
    pub fn new<P: AsRef<Path>, S: Into<String>>(base_dir: P, format: S) -> Self {
        Self { base_dir: base_dir.as_ref().to_path_buf(), format: format.into(), dry_run: false }
    }

    /// Checks the configuration without touching the filesystem and returns
    /// the selected output format.
    pub fn validate(&self) -> Result<OutputFormat> {
        if self.base_dir.as_os_str().is_empty() {
            return Err(Error::ConfigValidation("base directory must not be empty".into()));
        }
        self.format.parse()
    }

    /// Where the index note is written.
    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(OUTPUT_FILENAME)
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new("", DEFAULT_FORMAT)
    }
}
