use std::path::Path;

use crate::error::{Error, Result};

/// Reads a whole note into memory.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let content = std::fs::read(path).map_err(|source| Error::ReadError {
        path: path.display().to_string(),
        source,
    })?;
    log::trace!("File read successfully: {} ({} bytes)", path.display(), content.len());
    Ok(content)
}

/// Writes `content` to `dest_path`, replacing any existing file.
///
/// The parent directory must already exist; the index is always written into
/// the vault root, which discovery has already proven readable.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::write(dest_path, content).map_err(|source| Error::WriteError {
        path: dest_path.display().to_string(),
        source,
    })?;
    log::trace!(
        "File written successfully: {} ({} bytes)",
        dest_path.display(),
        content.len()
    );
    Ok(())
}
