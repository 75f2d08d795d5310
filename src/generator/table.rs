use crate::constants::index::BACK_TO_TOP;
use crate::creator::Creators;
use crate::error::Result;
use crate::image::format_image;
use crate::recipe::RecipeRecord;

use super::{sorted_with_creators, MarkdownGenerator};

const HEADER: &str = "| Recipe Image and Title | Creator's Image |";
const SEPARATOR: &str = "|------------------------|-----------------|";

/// Renders every recipe as a row of one shared table.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableMarkdownGenerator;

impl TableMarkdownGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl MarkdownGenerator for TableMarkdownGenerator {
    fn generate(&self, recipes: &[RecipeRecord], creators: &Creators) -> Result<String> {
        let mut lines = vec![HEADER.to_string(), SEPARATOR.to_string()];

        for (recipe, creator) in sorted_with_creators(recipes, creators) {
            let recipe_image =
                format_image(&recipe.title, &recipe.image_url, recipe.is_remote_image);
            let creator_image =
                format_image(&creator.name, &creator.image_url, creator.is_remote_image);
            lines.push(format!(
                "| {recipe_image} [[{}]] | {creator_image} [[{}]] |",
                recipe.title, creator.name
            ));
        }

        lines.push(String::new());
        lines.push(BACK_TO_TOP.to_string());
        lines.push(String::new());
        Ok(lines.join("\n"))
    }
}
