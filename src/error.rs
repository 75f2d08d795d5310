use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to serialize the run summary. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to walk the vault. Original error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Cannot proceed: base directory '{base_dir}' is not accessible. Original error: {e}")]
    BaseDirError { base_dir: String, e: String },

    #[error("Failed to read '{path}'. Original error: {source}")]
    ReadError { path: String, source: std::io::Error },

    #[error("Failed to write '{path}'. Original error: {source}")]
    WriteError { path: String, source: std::io::Error },

    /// The markdown or frontmatter of a single note could not be processed.
    #[error("Failed to extract frontmatter: {0}.")]
    FrontmatterError(String),

    #[error("Invalid format specified: '{format}'. Expected one of: sections, table.")]
    InvalidFormat { format: String },

    /// Represents invalid values in the run configuration
    #[error("Configuration error: {0}.")]
    ConfigValidation(String),

    /// A generator was asked to render a recipe whose creator is missing from the lookup.
    #[error("Creator '{name}' was not resolved.")]
    CreatorNotFound { name: String },
}

/// Convenience type alias for Results with the crate error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
