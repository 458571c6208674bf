//! Front-matter parsing
//!
//! A document may open with a block of `key: value` lines fenced by `---`:
//!
//! ```text
//! ---
//! title: Hello World
//! publishedAt: 2024-01-15
//! summary: "A first post"
//! ---
//!
//! Body text.
//! ```
//!
//! Values are always plain strings. Nesting, lists and YAML typing are not supported.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::helpers::{iso_now, parse_timestamp};

lazy_static! {
    /// Opening `---` line, lazily matched inner lines, closing `---` line
    static ref FRONTMATTER_RE: Regex =
        Regex::new(r"\A---[ \t]*\r?\n(?:(?s:(.*?))\r?\n)??---[ \t]*(?:\r?\n|\z)")
            .expect("front-matter pattern is valid");
}

/// Default title for documents that do not declare one
const DEFAULT_TITLE: &str = "Untitled";

/// Front-matter data from a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,

    /// Publication timestamp, kept verbatim as written
    #[serde(rename = "publishedAt")]
    pub published_at: String,

    #[serde(default)]
    pub summary: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Additional custom fields, in declaration order
    #[serde(flatten)]
    pub extra: IndexMap<String, String>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            published_at: iso_now(),
            summary: String::new(),
            image: None,
            extra: IndexMap::new(),
        }
    }
}

impl Metadata {
    /// Parse front-matter from content string
    /// Returns (metadata, trimmed body)
    pub fn parse(content: &str) -> (Self, String) {
        let mut metadata = Metadata::default();

        let Some(caps) = FRONTMATTER_RE.captures(content) else {
            return (metadata, content.trim().to_string());
        };

        let block = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        for line in block.split(['\r', '\n']).map(str::trim) {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            metadata.set(key, strip_quotes(value.trim()));
        }

        let body_start = caps.get(0).map(|m| m.end()).unwrap_or(0);
        (metadata, content[body_start..].trim().to_string())
    }

    /// Assign a field by its front-matter key
    pub fn set(&mut self, key: &str, value: &str) {
        match key {
            "title" => self.title = value.to_string(),
            "publishedAt" => self.published_at = value.to_string(),
            "summary" => self.summary = value.to_string(),
            "image" => self.image = Some(value.to_string()),
            _ => {
                self.extra.insert(key.to_string(), value.to_string());
            }
        }
    }

    /// Parse `publishedAt` into an instant
    pub fn published(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.published_at)
    }
}

/// Split a document into its metadata and body
pub fn parse_frontmatter(content: &str) -> (Metadata, String) {
    Metadata::parse(content)
}

/// Remove one matching pair of surrounding single or double quotes
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
