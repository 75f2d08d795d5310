//! Frontmatter extraction for vault notes.
//!
//! Frontmatter is a `---` fenced YAML block that opens on the first line of
//! the note, after an optional byte order mark. A `---` block anywhere else
//! is ordinary markdown. The block is decoded into a [`Metadata`] map and the
//! rest of the note is rendered to HTML with `pulldown-cmark`.

use indexmap::IndexMap;
use log::{trace, warn};
use pulldown_cmark::{html, Parser};
use serde_yaml::Value;

use crate::constants::frontmatter::{BYTE_ORDER_MARK, FENCE};
use crate::error::{Error, Result};

/// Untyped frontmatter of a note, in document order.
pub type Metadata = IndexMap<String, Value>;

/// What a note yields once its frontmatter is split from the body.
#[derive(Debug, Default)]
pub struct ExtractedNote {
    /// Always present; empty when the note has no frontmatter block.
    pub metadata: Metadata,
    pub rendered_body: String,
}

/// Trait for frontmatter-aware markdown parsers.
pub trait FrontmatterExtractor {
    /// Splits raw note bytes into frontmatter metadata and a rendered body.
    ///
    /// # Arguments
    /// * `content` - Raw bytes of the note
    ///
    /// # Returns
    /// * `Result<ExtractedNote>` - Metadata map and rendered body
    fn extract(&self, content: &[u8]) -> Result<ExtractedNote>;
}

/// `pulldown-cmark` based extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFrontmatterExtractor;

impl MarkdownFrontmatterExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FrontmatterExtractor for MarkdownFrontmatterExtractor {
    fn extract(&self, content: &[u8]) -> Result<ExtractedNote> {
        let text = std::str::from_utf8(content)
            .map_err(|e| Error::FrontmatterError(format!("note is not valid UTF-8: {e}")))?;
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

        let (yaml, body) = split_frontmatter(text).unwrap_or(("", text));

        let mut rendered_body = String::new();
        html::push_html(&mut rendered_body, Parser::new(body));

        Ok(ExtractedNote { metadata: parse_metadata(yaml), rendered_body })
    }
}

/// Splits a leading fenced block off `text`, returning `(yaml, body)`.
///
/// The first line must be the fence itself. Without a closing fence the note
/// has no frontmatter.
fn split_frontmatter(text: &str) -> Option<(&str, &str)> {
    let mut lines = text.split_inclusive('\n');
    let opening = lines.next()?;
    if !is_fence(opening) {
        return None;
    }

    let yaml_start = opening.len();
    let mut offset = yaml_start;
    for line in lines {
        if is_fence(line) {
            return Some((&text[yaml_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }
    trace!("Unclosed frontmatter fence, reading note as plain markdown");
    None
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == FENCE
}

/// Decodes a metadata block. Invalid YAML, or YAML that is not a mapping with
/// string keys, is treated as no metadata at all.
fn parse_metadata(yaml: &str) -> Metadata {
    if yaml.trim().is_empty() {
        return Metadata::new();
    }
    match serde_yaml::from_str::<Metadata>(yaml) {
        Ok(metadata) => {
            trace!("Parsed frontmatter: {metadata:?}");
            metadata
        }
        Err(e) => {
            warn!("Ignoring unreadable frontmatter: {e}");
            Metadata::new()
        }
    }
}

/// Returns the value under `key` when it is a YAML string.
///
/// Absent keys and values of any other type both read as `None`.
pub fn get_string<'a>(metadata: &'a Metadata, key: &str) -> Option<&'a str> {
    metadata.get(key).and_then(Value::as_str)
}

/// Returns a wiki-link style value under `key`.
///
/// An unquoted `creator: [[Chef Ana]]` is a nested flow sequence to YAML, so
/// single-element sequences are unwrapped down to their string. The brackets
/// themselves are the caller's business.
pub fn get_link<'a>(metadata: &'a Metadata, key: &str) -> Option<&'a str> {
    fn unwrap_link(value: &Value) -> Option<&str> {
        match value {
            Value::String(s) => Some(s),
            Value::Sequence(items) if items.len() == 1 => unwrap_link(&items[0]),
            _ => None,
        }
    }
    metadata.get(key).and_then(unwrap_link)
}
