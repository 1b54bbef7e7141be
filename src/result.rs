//! Result types for extraction output.
//!
//! This module defines the structured output of an extraction call, the
//! page metadata it carries, and the per-item records of batch mode.

use serde::{Deserialize, Serialize};

/// Metadata harvested from an HTML document.
///
/// All fields are optional as metadata may not be present in all documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Article title.
    pub title: Option<String>,

    /// Author line.
    pub byline: Option<String>,

    /// Site name (e.g., "Example News").
    pub site_name: Option<String>,

    /// Hero image URL.
    pub image: Option<String>,

    /// Publication timestamp, as found in the page.
    pub published_time: Option<String>,

    /// Last modification timestamp, as found in the page.
    pub modified_time: Option<String>,

    /// Favicon URL.
    pub favicon: Option<String>,

    /// Canonical URL of the document.
    pub url: Option<String>,

    /// Document language (`<html lang>`).
    pub lang: Option<String>,

    /// Text direction: `ltr`, `rtl` or `auto`.
    pub dir: Option<String>,
}

/// Result of extracting the readable article from an HTML document.
///
/// Every field is always present when serialized; absent values become `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleResult {
    /// Article title.
    pub title: Option<String>,

    /// Author line.
    pub byline: Option<String>,

    /// Cleaned article markup, rooted at the
    /// `<div id="readability-page-1" class="page">` wrapper.
    pub content: Option<String>,

    /// Plain text of the article, blocks separated by blank lines.
    pub text_content: Option<String>,

    /// Character count of `text_content`.
    pub length: usize,

    /// Short summary: first substantial paragraph or truncated text.
    pub excerpt: Option<String>,

    /// Site name.
    pub site_name: Option<String>,

    /// Hero image URL.
    pub image: Option<String>,

    /// Publication timestamp.
    pub published_time: Option<String>,

    /// Last modification timestamp.
    pub modified_time: Option<String>,

    /// Favicon URL.
    pub favicon: Option<String>,

    /// Canonical URL.
    pub url: Option<String>,

    /// Document language.
    pub lang: Option<String>,

    /// Text direction.
    pub dir: Option<String>,

    /// Set when no candidate cleared the confidence threshold and a
    /// best-effort fallback produced the article.
    pub degraded: bool,
}

impl ArticleResult {
    /// Serialize to a JSON string.
    ///
    /// Infallible for this type; returns `"null"` if serialization ever fails.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "null".to_string())
    }
}

/// A failed batch item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Position of the item in the batch input.
    pub index: usize,

    /// Human-readable error message.
    pub message: String,
}

/// One document of a batch call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchItem {
    /// Raw HTML of the document.
    pub html: String,

    /// Optional page URL.
    #[serde(default)]
    pub url: Option<String>,
}

impl BatchItem {
    /// Create a batch item.
    #[must_use]
    pub fn new(html: impl Into<String>, url: Option<&str>) -> Self {
        Self {
            html: html.into(),
            url: url.map(ToString::to_string),
        }
    }
}

/// Outcome of one batch item: the article or the item's error record.
pub type BatchOutcome = std::result::Result<ArticleResult, ErrorRecord>;
