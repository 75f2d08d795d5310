use crate::constants::index::BACK_TO_TOP;
use crate::creator::Creators;
use crate::error::Result;
use crate::image::format_image;
use crate::recipe::RecipeRecord;

use super::{sorted_with_creators, MarkdownGenerator};

/// Renders one heading block per recipe.
///
/// The line under each heading links back to the TOC and carries the
/// recipe's block anchor, which is what the TOC entry points at.
#[derive(Debug, Default, Clone, Copy)]
pub struct SectionMarkdownGenerator;

impl SectionMarkdownGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl MarkdownGenerator for SectionMarkdownGenerator {
    fn generate(&self, recipes: &[RecipeRecord], creators: &Creators) -> Result<String> {
        let sections: Vec<String> = sorted_with_creators(recipes, creators)
            .into_iter()
            .map(|(recipe, creator)| {
                let recipe_image =
                    format_image(&recipe.title, &recipe.image_url, recipe.is_remote_image);
                let creator_image =
                    format_image(&creator.name, &creator.image_url, creator.is_remote_image);

                format!(
                    "## [[{title}]]\n\
                     {BACK_TO_TOP} ^{anchor}\n\
                     \n\
                     | Recipe | Creator |\n\
                     |-|-|\n\
                     | {recipe_image} [[{title}]] | {creator_image} [[{creator}]] |\n\
                     \n",
                    title = recipe.title,
                    anchor = recipe.anchor(),
                    creator = creator.name,
                )
            })
            .collect();

        Ok(sections.join("\n"))
    }
}
