//! Constants used throughout recipedex

/// Name of the generated index note, written to the vault root
pub const OUTPUT_FILENAME: &str = "recipeindex.md";

/// Extension of the notes recipedex reads (compared case-insensitively)
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Prefix of editor lock/autosave files that must never be parsed
pub const TEMP_FILE_PREFIX: &str = ".#";

/// Directory markers whose whole subtree is skipped during discovery
pub const EXCLUDED_DIR_MARKERS: &[&str] = &[".git", ".trash"];

/// Default output format name
pub const DEFAULT_FORMAT: &str = "sections";

/// Frontmatter keys and values
pub mod frontmatter {
    pub const FILETYPE: &str = "filetype";
    pub const RECIPE_FILETYPE: &str = "recipe";
    pub const PIC: &str = "pic";
    pub const CREATOR: &str = "creator";
    pub const UUID: &str = "uuid";
    /// Opening and closing line of a frontmatter block.
    pub const FENCE: &str = "---";
    pub const BYTE_ORDER_MARK: char = '\u{feff}';
}

/// Fixed pieces of the generated index
pub mod index {
    /// Blank lines written ahead of the TOC heading
    pub const LEADING_BLANK_LINES: &str = "\n\n\n\n\n\n";
    pub const TOC_HEADING: &str = "# TOC\n";
    pub const BACK_TO_TOP: &str = "[[#TOC|Back to top]]";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
