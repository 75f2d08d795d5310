//! Markdown generators for the recipe index.
//!
//! Two interchangeable strategies render the resolved recipes:
//! - `section`: one heading block per recipe
//! - `table`: one shared table with a row per recipe

pub mod section;
pub mod table;

use std::fmt::Display;
use std::str::FromStr;

use log::warn;

use crate::creator::Creators;
use crate::error::{Error, Result};
use crate::recipe::{compare_titles, CreatorRecord, RecipeRecord};

pub use section::SectionMarkdownGenerator;
pub use table::TableMarkdownGenerator;

/// Trait for index body renderers.
pub trait MarkdownGenerator {
    /// Renders the recipes into markdown.
    ///
    /// # Arguments
    /// * `recipes` - Resolved recipes, in any order
    /// * `creators` - Creators by name
    ///
    /// # Returns
    /// * `Result<String>` - Markdown, recipes sorted case-insensitively by title
    fn generate(&self, recipes: &[RecipeRecord], creators: &Creators) -> Result<String>;
}

/// Output format of the index body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Sections,
    Table,
}

impl OutputFormat {
    pub fn generator(self) -> Box<dyn MarkdownGenerator> {
        match self {
            OutputFormat::Sections => Box::new(SectionMarkdownGenerator::new()),
            OutputFormat::Table => Box::new(TableMarkdownGenerator::new()),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sections" => Ok(OutputFormat::Sections),
            "table" => Ok(OutputFormat::Table),
            other => Err(Error::InvalidFormat { format: other.to_string() }),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutputFormat::Sections => "sections",
            OutputFormat::Table => "table",
        };
        write!(f, "{s}")
    }
}

/// Pairs each recipe with its creator, sorted by title. Recipes whose creator
/// is missing from `creators` are logged and left out.
fn sorted_with_creators<'a>(
    recipes: &'a [RecipeRecord],
    creators: &'a Creators,
) -> Vec<(&'a RecipeRecord, &'a CreatorRecord)> {
    let mut sorted: Vec<&RecipeRecord> = recipes.iter().collect();
    sorted.sort_by(|a, b| compare_titles(a, b));

    sorted
        .into_iter()
        .filter_map(|recipe| match creators.get(&recipe.creator_name) {
            Some(creator) => Some((recipe, creator)),
            None => {
                warn!("{}", Error::CreatorNotFound { name: recipe.creator_name.clone() });
                None
            }
        })
        .collect()
}
