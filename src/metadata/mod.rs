//! Metadata extraction module.
//!
//! Harvests page metadata from the pristine document: `<meta>` tags,
//! the `<title>` element, `<link>` relations, `<html lang/dir>` and
//! JSON-LD. Signals that live inside the article (first heading, visible
//! byline, inline image) are bound later by [`PageMetadata::finish`], once
//! the article has been selected.

pub mod dom_extraction;
pub mod json_ld;
pub mod meta_tags;

use dom_query::{Document, NodeRef};
use url::Url;

use crate::result::Metadata;
use crate::url_utils;

pub use dom_extraction::{clean_title, examine_title_element, infer_dir};
pub use json_ld::{extract_json_ld, JsonLdFields};
pub use meta_tags::{examine_meta, is_timestamp, validate_byline, MetaTags};

/// Metadata from the document head plus the structured-data values that
/// rank below in-article signals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Fields resolved from head-level sources.
    pub metadata: Metadata,
    /// JSON-LD author, used when neither meta tags nor the article name one.
    pub structured_byline: Option<String>,
    /// JSON-LD image, used when neither meta tags nor the article have one.
    pub structured_image: Option<String>,
}

/// Extract all head-level metadata from a document.
///
/// Per field, sources are tried in order and the first non-empty value wins:
/// 1. Meta tags (Open Graph, Twitter cards, article:*)
/// 2. `<title>` element and `<link>` relations
/// 3. JSON-LD (Schema.org structured data)
/// 4. The page URL (canonical URL and site name fallbacks)
///
/// # Arguments
/// * `doc` - The HTML document, never mutated
/// * `base` - Page URL used to resolve relative links
#[must_use]
pub fn extract_metadata(doc: &Document, base: Option<&Url>) -> PageMetadata {
    let meta = MetaTags::collect(doc);
    let structured = json_ld::extract_json_ld(doc);

    // 1. Meta tags
    let mut metadata = meta_tags::examine_meta(&meta, Metadata::default(), base);

    // 2. <title> and link relations
    if metadata.title.is_none() {
        metadata.title = dom_extraction::examine_title_element(doc);
    }
    metadata = dom_extraction::extract_link_metadata(doc, metadata, base);
    if metadata.url.is_none() {
        metadata.url = meta
            .first_of(&["og:url"])
            .map(|url| url_utils::resolve(&url, base));
    }

    // 3. JSON-LD
    if metadata.title.is_none() {
        metadata.title.clone_from(&structured.title);
    }
    if metadata.site_name.is_none() {
        metadata.site_name.clone_from(&structured.publisher);
    }
    if metadata.published_time.is_none() {
        metadata.published_time.clone_from(&structured.date_published);
    }
    if metadata.modified_time.is_none() {
        metadata.modified_time.clone_from(&structured.date_modified);
    }

    // 4. Page URL
    if metadata.url.is_none() {
        metadata.url = base.map(ToString::to_string);
    }
    if metadata.site_name.is_none() {
        metadata.site_name = metadata
            .url
            .as_deref()
            .and_then(url_utils::extract_hostname)
            .or_else(|| base.and_then(|b| url_utils::extract_hostname(b.as_str())));
    }

    metadata = dom_extraction::extract_language(doc, metadata);
    metadata = post_process_metadata(metadata);

    tracing::debug!(
        meta_tags = meta.len(),
        title = metadata.title.is_some(),
        byline = metadata.byline.is_some(),
        site_name = metadata.site_name.is_some(),
        published = metadata.published_time.is_some(),
        "metadata harvested"
    );

    PageMetadata {
        metadata,
        structured_byline: structured.author,
        structured_image: structured.image.map(|src| url_utils::resolve(&src, base)),
    }
}

impl PageMetadata {
    /// Bind in-article signals and return the final metadata.
    ///
    /// * title: first `<h1>` of the article when no other source had one
    /// * byline: the visible byline found by the cleaner, then JSON-LD
    /// * image: first large article image, then JSON-LD
    #[must_use]
    pub fn finish(
        self,
        article: Option<&NodeRef>,
        visible_byline: Option<String>,
        base: Option<&Url>,
    ) -> Metadata {
        let mut metadata = self.metadata;

        if metadata.title.is_none() {
            metadata.title = article.and_then(dom_extraction::article_heading);
        }
        if metadata.byline.is_none() {
            metadata.byline = visible_byline.or(self.structured_byline);
        }
        if metadata.image.is_none() {
            metadata.image = article
                .and_then(|root| dom_extraction::article_image(root, base))
                .or(self.structured_image);
        }

        post_process_metadata(metadata)
    }
}

/// Trim every field; empty strings become `None`.
fn post_process_metadata(metadata: Metadata) -> Metadata {
    fn clean(value: Option<String>) -> Option<String> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    Metadata {
        title: clean(metadata.title),
        byline: clean(metadata.byline),
        site_name: clean(metadata.site_name),
        image: clean(metadata.image),
        published_time: clean(metadata.published_time),
        modified_time: clean(metadata.modified_time),
        favicon: clean(metadata.favicon),
        url: clean(metadata.url),
        lang: clean(metadata.lang),
        dir: clean(metadata.dir),
    }
}
