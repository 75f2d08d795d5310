/// Handles argument parsing, logging setup and the `generate` command.
pub mod cli;

/// Run configuration and its validation.
pub mod config;

/// Constants used throughout the crate.
pub mod constants;

/// Creator note resolution and the per-run creator cache.
pub mod creator;

/// Finds the markdown notes of a vault.
pub mod discovery;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// Splits notes into frontmatter metadata and a rendered body.
pub mod frontmatter;

/// Section and table renderers for the index body.
pub mod generator;

/// Image embed formatting shared by the generators.
pub mod image;

/// Orchestrates a full index generation pass.
pub mod index;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Recipe records and the recipe note parser.
pub mod recipe;

pub use index::{run, IndexSummary};
