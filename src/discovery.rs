use std::path::{Path, PathBuf};

use log::{debug, info, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::constants::EXCLUDED_DIR_MARKERS;
use crate::error::{Error, Result};
use crate::ext::PathExt;

/// Whether `entry` is a directory below `base_dir` whose relative path mentions
/// a version-control or trash marker. The base directory itself is never
/// excluded, so a vault living under e.g. `~/.github-notes` still scans.
fn is_excluded_dir(base_dir: &Path, entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let relative = entry.path().strip_prefix(base_dir).unwrap_or(entry.path());
    let relative = relative.to_string_lossy().to_lowercase();
    let excluded = EXCLUDED_DIR_MARKERS.iter().any(|marker| relative.contains(marker));
    if excluded {
        trace!("Skipping directory {}: contains an excluded marker", entry.path().display());
    }
    excluded
}

/// Recursively collects the markdown notes under `base_dir`.
///
/// Subtrees under `.git`/`.trash` markers, files without a `.md` extension and
/// editor temporary files (`.#` prefix) are skipped silently. An entry that
/// cannot be accessed is logged and the walk carries on; only an inaccessible
/// `base_dir` fails the discovery.
///
/// The result follows traversal order (entries sorted by file name within each
/// directory). Callers that need a particular order must sort themselves.
pub fn discover<P: AsRef<Path>>(base_dir: P) -> Result<Vec<PathBuf>> {
    let base_dir = base_dir.as_ref();
    let metadata = std::fs::metadata(base_dir).map_err(|e| Error::BaseDirError {
        base_dir: base_dir.display().to_string(),
        e: e.to_string(),
    })?;
    if !metadata.is_dir() {
        return Err(Error::BaseDirError {
            base_dir: base_dir.display().to_string(),
            e: "not a directory".to_string(),
        });
    }

    let mut files = Vec::new();
    let mut skipped = 0usize;

    let walker = WalkDir::new(base_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(base_dir, entry));

    for dir_entry in walker {
        let entry = match dir_entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(Error::WalkError(e)),
            Err(e) => {
                let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                warn!("Error accessing path '{path}': {e}");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if !path.is_markdown_note() {
            trace!("Skipping non-markdown file: {}", path.display());
            skipped += 1;
        } else if path.is_temporary_note() {
            trace!("Skipping temporary file: {}", path.display());
            skipped += 1;
        } else {
            trace!("Including markdown file: {}", path.display());
            files.push(path.to_path_buf());
        }
    }

    debug!(
        "Finished searching for markdown files: {} found, {} skipped, {} total",
        files.len(),
        skipped,
        files.len() + skipped
    );
    info!("Found {} markdown files in {}", files.len(), base_dir.display());
    Ok(files)
}
