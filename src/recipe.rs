use std::cmp::Ordering;
use std::path::Path;

use log::{debug, trace};

use crate::constants::frontmatter::{CREATOR, FILETYPE, PIC, RECIPE_FILETYPE, UUID};
use crate::error::Result;
use crate::ext::PathExt;
use crate::frontmatter::{get_link, get_string, FrontmatterExtractor};
use crate::ioutils::read_file;

/// A note tagged `filetype: recipe`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRecord {
    /// File name without `.md`; the display key of the recipe.
    pub title: String,
    pub image_url: String,
    /// Creator reference with wiki-link brackets stripped. Empty means no creator.
    pub creator_name: String,
    pub is_remote_image: bool,
    /// Anchor the TOC links to. Filled by [`ensure_anchor`] when the note did not carry one.
    pub anchor_id: Option<String>,
}

impl RecipeRecord {
    /// The anchor, or an empty string before [`ensure_anchor`] ran.
    pub fn anchor(&self) -> &str {
        self.anchor_id.as_deref().unwrap_or_default()
    }
}

/// Display metadata of a creator, read from `<name>.md` in the vault root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorRecord {
    pub name: String,
    pub image_url: String,
    pub is_remote_image: bool,
}

/// Whether `value` parses as an absolute `http`/`https` URL.
///
/// Vault paths, relative references, empty strings and other schemes are local.
pub fn is_remote_url(value: &str) -> bool {
    url::Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Strips any run of `[` / `]` from both ends, paired or not.
///
/// `[[Chef Ana]]`, `[[Chef Ana]` and `]Chef Ana[` all become `Chef Ana`.
pub fn strip_link_brackets(value: &str) -> &str {
    value.trim_matches(|c| c == '[' || c == ']')
}

/// Gives the record a freshly generated v4 UUID when it has no anchor yet.
/// An existing anchor is never replaced.
pub fn ensure_anchor(mut recipe: RecipeRecord) -> RecipeRecord {
    if recipe.anchor_id.as_deref().is_none_or(str::is_empty) {
        recipe.anchor_id = Some(uuid::Uuid::new_v4().to_string());
    }
    recipe
}

/// Case-insensitive ascending title order. Titles equal under case folding
/// fall back to the exact title, then the anchor, so sorting is total.
pub fn compare_titles(a: &RecipeRecord, b: &RecipeRecord) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.anchor().cmp(b.anchor()))
}

/// Reads `path` and classifies it.
///
/// # Returns
/// * `Ok(Some(recipe))` - the note has `filetype: recipe`
/// * `Ok(None)` - the note is not a recipe
/// * `Err(_)` - the note could not be read or its frontmatter extracted
pub fn parse_recipe<P: AsRef<Path>>(
    extractor: &dyn FrontmatterExtractor,
    path: P,
) -> Result<Option<RecipeRecord>> {
    let path = path.as_ref();
    let content = read_file(path)?;
    let note = extractor.extract(&content)?;
    let metadata = note.metadata;

    let filetype = get_string(&metadata, FILETYPE);
    if filetype != Some(RECIPE_FILETYPE) {
        trace!("File is not a recipe: {} (filetype: {:?})", path.display(), filetype);
        return Ok(None);
    }

    let pic = get_string(&metadata, PIC).unwrap_or_default();
    if pic.is_empty() {
        debug!("Recipe file has no 'pic' field: {}", path.display());
    }

    let creator = get_link(&metadata, CREATOR).map(strip_link_brackets).unwrap_or_default();
    if creator.is_empty() {
        debug!("Recipe file has no 'creator' field: {}", path.display());
    }

    let anchor_id =
        get_string(&metadata, UUID).filter(|id| !id.trim().is_empty()).map(str::to_string);

    Ok(Some(RecipeRecord {
        title: path.note_title(),
        image_url: pic.to_string(),
        creator_name: creator.to_string(),
        is_remote_image: is_remote_url(pic),
        anchor_id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::MarkdownFrontmatterExtractor;
    use std::fs;

    fn recipe(title: &str, anchor: Option<&str>) -> RecipeRecord {
        RecipeRecord {
            title: title.to_string(),
            image_url: String::new(),
            creator_name: "Chef".to_string(),
            is_remote_image: false,
            anchor_id: anchor.map(str::to_string),
        }
    }

    fn parse(content: &str) -> Option<RecipeRecord> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Pancakes.md");
        fs::write(&path, content).unwrap();
        parse_recipe(&MarkdownFrontmatterExtractor::new(), &path).unwrap()
    }

    #[test]
    fn remote_urls_need_an_http_scheme() {
        assert!(is_remote_url("https://example.com/ana.jpg"));
        assert!(is_remote_url("http://example.com/ana.jpg"));
        assert!(is_remote_url("HTTPS://example.com/ana.jpg"));
        assert!(!is_remote_url("ftp://example.com/ana.jpg"));
        assert!(!is_remote_url("file:///tmp/ana.jpg"));
        assert!(!is_remote_url("pancakes.jpg"));
        assert!(!is_remote_url("attachments/pancakes.jpg"));
        assert!(!is_remote_url(""));
    }

    #[test]
    fn brackets_are_stripped_regardless_of_pairing() {
        assert_eq!(strip_link_brackets("[[Chef Ana]]"), "Chef Ana");
        assert_eq!(strip_link_brackets("[[Chef Ana]"), "Chef Ana");
        assert_eq!(strip_link_brackets("]]Chef Ana[["), "Chef Ana");
        assert_eq!(strip_link_brackets("Chef [Ana]"), "Chef [Ana");
        assert_eq!(strip_link_brackets("[[]]"), "");
    }

    #[test]
    fn ensure_anchor_assigns_once() {
        let assigned = ensure_anchor(recipe("Pancakes", None));
        let anchor = assigned.anchor_id.clone().unwrap();
        assert_eq!(anchor.len(), 36);
        assert_eq!(ensure_anchor(assigned).anchor_id.unwrap(), anchor);
    }

    #[test]
    fn ensure_anchor_keeps_supplied_anchor_and_fills_empty_one() {
        let kept = ensure_anchor(recipe("Pancakes", Some("fixed-id")));
        assert_eq!(kept.anchor(), "fixed-id");

        let filled = ensure_anchor(recipe("Pancakes", Some("")));
        assert!(!filled.anchor().is_empty());
    }

    #[test]
    fn ensure_anchor_generates_distinct_ids() {
        let a = ensure_anchor(recipe("A", None));
        let b = ensure_anchor(recipe("B", None));
        assert_ne!(a.anchor_id, b.anchor_id);
    }

    #[test]
    fn titles_compare_case_insensitively() {
        let mut recipes =
            vec![recipe("waffles", None), recipe("Pancakes", None), recipe("apple pie", None)];
        recipes.sort_by(compare_titles);
        let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["apple pie", "Pancakes", "waffles"]);
    }

    #[test]
    fn parses_a_recipe_note() {
        let recipe = parse(
            "---\nfiletype: recipe\npic: pancakes.jpg\ncreator: \"[[Chef Ana]]\"\n---\n# Pancakes\n",
        )
        .unwrap();
        assert_eq!(recipe.title, "Pancakes");
        assert_eq!(recipe.image_url, "pancakes.jpg");
        assert_eq!(recipe.creator_name, "Chef Ana");
        assert!(!recipe.is_remote_image);
        assert_eq!(recipe.anchor_id, None);
    }

    #[test]
    fn unquoted_wikilink_creator_is_understood() {
        let recipe = parse("---\nfiletype: recipe\ncreator: [[Chef Ana]]\n---\n").unwrap();
        assert_eq!(recipe.creator_name, "Chef Ana");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let recipe = parse("---\nfiletype: recipe\n---\n").unwrap();
        assert_eq!(recipe.image_url, "");
        assert_eq!(recipe.creator_name, "");
        assert!(!recipe.is_remote_image);
    }

    #[test]
    fn remote_pic_is_flagged() {
        let recipe = parse("---\nfiletype: recipe\npic: https://example.com/p.jpg\n---\n").unwrap();
        assert!(recipe.is_remote_image);
    }

    #[test]
    fn persisted_uuid_becomes_the_anchor() {
        let recipe = parse("---\nfiletype: recipe\nuuid: 1234-abcd\n---\n").unwrap();
        assert_eq!(recipe.anchor(), "1234-abcd");
    }

    #[test]
    fn non_recipe_notes_are_not_applicable() {
        assert_eq!(parse("---\nfiletype: creator\n---\n"), None);
        assert_eq!(parse("---\nfiletype: Recipe\n---\n"), None);
        assert_eq!(parse("# Just a note\n"), None);
        assert_eq!(parse("---\nfiletype: [recipe]\n---\n"), None);
    }

    #[test]
    fn unreadable_recipe_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = parse_recipe(&MarkdownFrontmatterExtractor::new(), dir.path().join("x.md"));
        assert!(result.is_err());
    }
}
