use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::{debug, trace};

use crate::constants::frontmatter::PIC;
use crate::constants::MARKDOWN_EXTENSION;
use crate::error::{Error, Result};
use crate::frontmatter::{get_string, FrontmatterExtractor};
use crate::ioutils::read_file;
use crate::recipe::{is_remote_url, CreatorRecord};

/// Lookup of resolved creators by name.
pub type Creators = HashMap<String, CreatorRecord>;

/// Per-run cache of creator notes.
///
/// Each distinct creator name is read at most once per run. Successful
/// resolutions are stored as records; failed names are remembered apart so
/// the record map never holds a placeholder.
#[derive(Debug, Default)]
pub struct CreatorCache {
    creators: Creators,
    unresolved: HashSet<String>,
}

impl CreatorCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&CreatorRecord> {
        self.creators.get(name)
    }

    pub fn len(&self) -> usize {
        self.creators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }

    /// Read-only view handed to the generators.
    pub fn creators(&self) -> &Creators {
        &self.creators
    }

    /// Returns the creator called `name`, reading `<base_dir>/<name>.md` on a miss.
    ///
    /// # Arguments
    /// * `extractor` - Frontmatter parser for the creator note
    /// * `base_dir` - Vault root the creator note lives in
    /// * `name` - Creator name as referenced by a recipe
    ///
    /// # Returns
    /// * `Result<&CreatorRecord>` - The cached or freshly parsed creator. A
    ///   name that already failed once fails again with
    ///   [`Error::CreatorNotFound`] without another read.
    pub fn resolve<P: AsRef<Path>>(
        &mut self,
        extractor: &dyn FrontmatterExtractor,
        base_dir: P,
        name: &str,
    ) -> Result<&CreatorRecord> {
        if self.unresolved.contains(name) {
            return Err(Error::CreatorNotFound { name: name.to_string() });
        }
        if !self.creators.contains_key(name) {
            match parse_creator(extractor, base_dir.as_ref(), name) {
                Ok(creator) => {
                    self.creators.insert(name.to_string(), creator);
                }
                Err(e) => {
                    self.unresolved.insert(name.to_string());
                    return Err(e);
                }
            }
        } else {
            trace!("Creator cache hit: {name}");
        }
        Ok(&self.creators[name])
    }
}

fn parse_creator(
    extractor: &dyn FrontmatterExtractor,
    base_dir: &Path,
    name: &str,
) -> Result<CreatorRecord> {
    let path = base_dir.join(format!("{name}{MARKDOWN_EXTENSION}"));
    let content = read_file(&path)?;
    let note = extractor.extract(&content)?;
    trace!("Parsed creator frontmatter {}: {:?}", path.display(), note.metadata);

    let pic = get_string(&note.metadata, PIC).unwrap_or_default();
    debug!("Parsed creator file: {name}");

    Ok(CreatorRecord {
        name: name.to_string(),
        image_url: pic.to_string(),
        is_remote_image: is_remote_url(pic),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::MarkdownFrontmatterExtractor;
    use std::fs;

    #[test]
    fn resolves_creator_from_vault_root() {
        let vault = tempfile::tempdir().unwrap();
        fs::write(vault.path().join("Chef Ana.md"), "---\npic: https://example.com/ana.jpg\n---\n")
            .unwrap();

        let mut cache = CreatorCache::new();
        let creator =
            cache.resolve(&MarkdownFrontmatterExtractor::new(), vault.path(), "Chef Ana").unwrap();
        assert_eq!(creator.name, "Chef Ana");
        assert_eq!(creator.image_url, "https://example.com/ana.jpg");
        assert!(creator.is_remote_image);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn creator_without_frontmatter_has_no_image() {
        let vault = tempfile::tempdir().unwrap();
        fs::write(vault.path().join("Bo.md"), "# Bo\n").unwrap();

        let mut cache = CreatorCache::new();
        let creator =
            cache.resolve(&MarkdownFrontmatterExtractor::new(), vault.path(), "Bo").unwrap();
        assert_eq!(creator.image_url, "");
        assert!(!creator.is_remote_image);
    }

    #[test]
    fn cache_hit_does_not_touch_the_filesystem() {
        let vault = tempfile::tempdir().unwrap();
        let note = vault.path().join("Chef Ana.md");
        fs::write(&note, "---\npic: ana.jpg\n---\n").unwrap();

        let extractor = MarkdownFrontmatterExtractor::new();
        let mut cache = CreatorCache::new();
        cache.resolve(&extractor, vault.path(), "Chef Ana").unwrap();

        fs::remove_file(&note).unwrap();
        let creator = cache.resolve(&extractor, vault.path(), "Chef Ana").unwrap();
        assert_eq!(creator.image_url, "ana.jpg");
    }

    #[test]
    fn missing_creator_is_an_error_and_not_cached() {
        let vault = tempfile::tempdir().unwrap();
        let extractor = MarkdownFrontmatterExtractor::new();
        let mut cache = CreatorCache::new();

        let result = cache.resolve(&extractor, vault.path(), "Ghost");
        assert!(matches!(result, Err(Error::ReadError { .. })));
        assert!(cache.is_empty());
        assert!(cache.get("Ghost").is_none());
    }

    #[test]
    fn failed_creator_is_not_read_twice() {
        let vault = tempfile::tempdir().unwrap();
        let extractor = MarkdownFrontmatterExtractor::new();
        let mut cache = CreatorCache::new();
        assert!(cache.resolve(&extractor, vault.path(), "Ghost").is_err());

        fs::write(vault.path().join("Ghost.md"), "---\npic: boo.png\n---\n").unwrap();
        let result = cache.resolve(&extractor, vault.path(), "Ghost");
        assert!(matches!(result, Err(Error::CreatorNotFound { .. })));
        assert!(cache.is_empty());
    }
}
