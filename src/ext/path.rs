use std::path::Path;

use crate::constants::{MARKDOWN_EXTENSION, TEMP_FILE_PREFIX};

/// Extension trait for Path with the naming rules of a vault note
pub trait PathExt {
    /// Returns the final path component as a string, lossily converted.
    fn file_name_lossy(&self) -> String;

    /// Whether the file name ends with `.md`, compared case-insensitively.
    ///
    /// # Examples
    /// ```
    /// use recipedex::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert!(Path::new("vault/Pancakes.MD").is_markdown_note());
    /// assert!(!Path::new("vault/pancakes.jpg").is_markdown_note());
    /// ```
    fn is_markdown_note(&self) -> bool;

    /// Whether the file name carries the editor lock-file prefix `.#`.
    fn is_temporary_note(&self) -> bool;

    /// The note title: the file name with the `.md` suffix removed.
    ///
    /// # Examples
    /// ```
    /// use recipedex::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert_eq!(Path::new("vault/desserts/Apple Pie.md").note_title(), "Apple Pie");
    /// ```
    fn note_title(&self) -> String;
}

impl PathExt for Path {
    fn file_name_lossy(&self) -> String {
        self.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
    }

    fn is_markdown_note(&self) -> bool {
        strip_markdown_extension(&self.file_name_lossy()).is_some()
    }

    fn is_temporary_note(&self) -> bool {
        self.file_name_lossy().starts_with(TEMP_FILE_PREFIX)
    }

    fn note_title(&self) -> String {
        let name = self.file_name_lossy();
        strip_markdown_extension(&name).map(str::to_string).unwrap_or(name)
    }
}

fn strip_markdown_extension(name: &str) -> Option<&str> {
    let split = name.len().checked_sub(MARKDOWN_EXTENSION.len())?;
    let (stem, extension) = (name.get(..split)?, name.get(split..)?);
    extension.eq_ignore_ascii_case(MARKDOWN_EXTENSION).then_some(stem)
}
