//! # rs-readable
//!
//! Reader-mode article extraction for arbitrary, noisy HTML.
//!
//! Given a web page and optionally its URL, the engine finds the main
//! article, strips navigation, advertisements and other boilerplate, and
//! returns the cleaned article markup, its plain text and the page metadata
//! (title, byline, site name, dates, language and more).
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readable::extract;
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><article><h1>Hello</h1><p>World</p></article></body></html>"#;
//!
//! let result = extract(html, Some("https://example.com/post"))?;
//! println!("Title: {:?}", result.title);
//! assert!(result.text_content.unwrap_or_default().contains("World"));
//! # Ok::<(), rs_readable::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Article Detection**: Paragraph scores propagate to their containers;
//!   the best container and its related siblings form the article
//! - **Metadata Extraction**: Open Graph, Twitter cards, JSON-LD, `<title>`,
//!   link relations and the visible byline
//! - **Cleanup**: Forms, share widgets, link farms and empty wrappers are
//!   removed; relative URLs are resolved against the page URL
//! - **Batch Mode**: Parallel extraction with per-item error isolation
//!
//! Every call is independent: no global mutable state, no caches.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Pre-order element index used by scoring and cleanup.
pub mod element_index;

/// Article extraction stages (preparation, scoring, selection, cleanup).
pub mod extractor;

/// Metadata extraction (meta tags, JSON-LD, title, link relations).
pub mod metadata;

/// URL utilities for validation and resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Link density measures for boilerplate detection.
pub mod link_density;

/// Result assembly: markup, plain text and excerpt.
pub mod output;

/// Input validation, including loosely typed JSON requests.
pub mod input;

/// Parallel batch extraction.
pub mod batch;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::{ArticleResult, BatchItem, BatchOutcome, ErrorRecord, Metadata};

/// Extracts the article of an HTML document.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
/// * `url` - The page URL, used to resolve relative links and as the
///   fallback canonical URL
///
/// # Errors
///
/// Returns `Error::InvalidInput` when `html` is empty or whitespace only.
/// A page without a recognizable article is not an error: the result has
/// `degraded` set.
///
/// # Example
///
/// ```rust
/// use rs_readable::extract;
///
/// let result = extract("<html><body><p>Content</p></body></html>", None)?;
/// assert_eq!(result.length, "Content".len());
/// # Ok::<(), rs_readable::Error>(())
/// ```
pub fn extract(html: &str, url: Option<&str>) -> Result<ArticleResult> {
    extract_with_options(html, &Options::with_url(url))
}

/// Extracts the article of an HTML document with custom options.
///
/// The page URL is taken from `options.url`.
///
/// # Example
///
/// ```rust
/// use rs_readable::{extract_with_options, Options};
///
/// let options = Options {
///     char_threshold: 100,
///     keep_classes: true,
///     ..Options::default()
/// };
/// let result = extract_with_options("<html><body><p>Content</p></body></html>", &options)?;
/// assert!(result.degraded);
/// # Ok::<(), rs_readable::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ArticleResult> {
    extract::extract_document(html, options)
}

/// Extracts the article of an HTML document given as raw bytes.
///
/// The charset is detected from a byte-order mark or a `<meta>`
/// declaration and defaults to UTF-8. Invalid sequences are replaced with
/// U+FFFD rather than causing errors.
///
/// # Errors
///
/// Returns `Error::InvalidInput("html must be textual")` when the first
/// kilobyte holds a NUL byte.
///
/// # Example
///
/// ```rust
/// use rs_readable::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let result = extract_bytes(html, None)?;
/// assert_eq!(result.text_content.as_deref(), Some("Café"));
/// # Ok::<(), rs_readable::Error>(())
/// ```
pub fn extract_bytes(html: &[u8], url: Option<&str>) -> Result<ArticleResult> {
    let html = encoding::decode_html(html)?;
    extract(&html, url)
}

/// Extracts many documents in parallel.
///
/// Returns one outcome per item, in input order. A failing item never
/// affects the others.
#[must_use]
pub fn extract_many(items: &[BatchItem]) -> Vec<BatchOutcome> {
    batch::extract_many(items)
}

/// Extracts a document described by a JSON object `{ html, url? }`.
///
/// # Errors
///
/// Returns `Error::InvalidInput` when `html` is not a string, or when `url`
/// is present, not null and not a string.
pub fn extract_value(value: &serde_json::Value) -> Result<ArticleResult> {
    let request = input::request_from_value(value)?;
    extract(&request.html, request.url.as_deref())
}

/// Extracts a JSON array of `{ html, url? }` objects in parallel.
///
/// # Errors
///
/// Fails as a whole only when `value` is not an array; malformed items are
/// reported in their own slot.
pub fn extract_many_values(value: &serde_json::Value) -> Result<Vec<BatchOutcome>> {
    batch::extract_many_values(value)
}

/// Version of the extraction engine.
#[must_use]
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
