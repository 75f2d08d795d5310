//! Orchestration of one index generation pass.
//!
//! ```text
//! discover → parse recipes → resolve creators → assign anchors
//!          → generate body → prefix TOC → write recipeindex.md
//! ```
//!
//! Per-file problems (unreadable notes, notes that are not recipes, recipes
//! without a creator, creators that cannot be resolved) are logged and
//! counted as skips. Only an inaccessible vault, an invalid format or a failed
//! write abort the run.

use std::path::{Path, PathBuf};

use log::{debug, info, trace, warn};
use serde::Serialize;

use crate::config::IndexConfig;
use crate::constants::index::{LEADING_BLANK_LINES, TOC_HEADING};
use crate::creator::CreatorCache;
use crate::discovery::discover;
use crate::error::Result;
use crate::frontmatter::{FrontmatterExtractor, MarkdownFrontmatterExtractor};
use crate::generator::MarkdownGenerator;
use crate::ioutils::write_file;
use crate::recipe::{compare_titles, ensure_anchor, parse_recipe, RecipeRecord};

/// Outcome of a generation pass.
#[derive(Debug, Clone, Serialize)]
pub struct IndexSummary {
    pub total_files: usize,
    pub processed: usize,
    pub skipped: usize,
    pub recipes: usize,
    pub output_path: PathBuf,
    /// False on a dry run.
    pub written: bool,
    #[serde(skip)]
    pub content: String,
}

/// Runs a full pass over `base_dir` with the format named `format`.
///
/// An unknown format fails before the vault is touched.
pub fn run<P: AsRef<Path>>(base_dir: P, format: &str) -> Result<IndexSummary> {
    generate_index(&IndexConfig::new(base_dir, format))
}

/// Runs a full pass as described by `config`, writing the index unless
/// `config.dry_run` is set.
pub fn generate_index(config: &IndexConfig) -> Result<IndexSummary> {
    let format = config.validate()?;
    debug!("Starting markdown generation in {} ({format})", config.base_dir.display());

    let generator = format.generator();
    let extractor = MarkdownFrontmatterExtractor::new();
    let mut summary = build_index(&config.base_dir, &extractor, generator.as_ref())?;
    summary.output_path = config.output_path();

    if config.dry_run {
        info!("Dry run: not writing {}", summary.output_path.display());
    } else {
        write_file(&summary.content, &summary.output_path)?;
        summary.written = true;
        info!("Wrote recipe index to {}", summary.output_path.display());
    }
    Ok(summary)
}

/// Runs every step except the final write and returns the index text in
/// `IndexSummary::content`.
pub fn build_index<P: AsRef<Path>>(
    base_dir: P,
    extractor: &dyn FrontmatterExtractor,
    generator: &dyn MarkdownGenerator,
) -> Result<IndexSummary> {
    let base_dir = base_dir.as_ref();
    let files = discover(base_dir)?;

    let mut recipes: Vec<RecipeRecord> = Vec::new();
    let mut creators = CreatorCache::new();
    let mut processed = 0usize;
    let mut skipped = 0usize;

    for file in &files {
        debug!("Processing file: {}", file.display());

        let recipe = match parse_recipe(extractor, file) {
            Ok(Some(recipe)) => recipe,
            Ok(None) => {
                trace!("Skipping non-recipe file: {}", file.display());
                skipped += 1;
                continue;
            }
            Err(e) => {
                warn!("Failed to parse recipe file {}, skipping: {e}", file.display());
                skipped += 1;
                continue;
            }
        };

        debug!("Parsed recipe file: title={}, creator={}", recipe.title, recipe.creator_name);

        if recipe.creator_name.is_empty() {
            debug!("Skipping recipe with no creator: {}", file.display());
            skipped += 1;
            continue;
        }

        if let Err(e) = creators.resolve(extractor, base_dir, &recipe.creator_name) {
            warn!(
                "Failed to resolve creator '{}' for {}, skipping: {e}",
                recipe.creator_name,
                file.display()
            );
            skipped += 1;
            continue;
        }

        recipes.push(ensure_anchor(recipe));
        processed += 1;
    }

    info!(
        "Markdown generation summary: {} files, {} processed, {} skipped, {} recipes, {} creators",
        files.len(),
        processed,
        skipped,
        recipes.len(),
        creators.len()
    );

    let body = generator.generate(&recipes, creators.creators())?;
    let content = format!("{LEADING_BLANK_LINES}{TOC_HEADING}{}\n\n{body}", build_toc(&recipes));

    Ok(IndexSummary {
        total_files: files.len(),
        processed,
        skipped,
        recipes: recipes.len(),
        output_path: base_dir.join(crate::constants::OUTPUT_FILENAME),
        written: false,
        content,
    })
}

/// One `- [[#^anchor|title]]` line per recipe, sorted case-insensitively by
/// title, without a trailing newline.
///
/// Only the section format declares `^anchor` block ids. Table rows cannot
/// carry them, so in table mode these links have no target in the index and
/// serve as stable per-recipe markers only.
pub fn build_toc(recipes: &[RecipeRecord]) -> String {
    let mut entries: Vec<&RecipeRecord> = recipes.iter().collect();
    entries.sort_by(|a, b| compare_titles(a, b));
    entries
        .iter()
        .map(|recipe| format!("- [[#^{}|{}]]", recipe.anchor(), recipe.title))
        .collect::<Vec<_>>()
        .join("\n")
}
