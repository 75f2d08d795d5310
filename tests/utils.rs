#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates an empty vault.
pub fn vault() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Writes `content` to `relative` inside the vault, creating parent directories.
pub fn write_note(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Frontmatter of a recipe note. `creator` is written verbatim, so pass
/// `"\"[[Chef Ana]]\""` for the quoted form or `"[[Chef Ana]]"` for the bare one.
pub fn recipe_note(pic: &str, creator: &str, uuid: Option<&str>) -> String {
    let mut note = format!("---\nfiletype: recipe\npic: {pic}\ncreator: {creator}\n");
    if let Some(uuid) = uuid {
        note.push_str(&format!("uuid: {uuid}\n"));
    }
    note.push_str("---\n# Ingredients\n\n- flour\n");
    note
}

/// Frontmatter of a creator note.
pub fn creator_note(pic: &str) -> String {
    format!("---\npic: {pic}\n---\n# About\n")
}

/// The Pancakes / Chef Ana vault used by several scenarios.
pub fn pancakes_vault(uuid: Option<&str>) -> TempDir {
    let vault = vault();
    write_note(vault.path(), "Pancakes.md", &recipe_note("pancakes.jpg", "[[Chef Ana]]", uuid));
    write_note(vault.path(), "Chef Ana.md", &creator_note("https://example.com/ana.jpg"));
    vault
}

/// Reads the generated index of a vault.
pub fn read_index(root: &Path) -> String {
    fs::read_to_string(root.join("recipeindex.md")).unwrap()
}

/// Titles in the order the TOC lists them.
pub fn toc_titles(index: &str) -> Vec<String> {
    index
        .lines()
        .filter_map(|line| line.strip_prefix("- [[#^"))
        .filter_map(|rest| rest.split_once('|'))
        .map(|(_, title)| title.trim_end_matches("]]").to_string())
        .collect()
}
