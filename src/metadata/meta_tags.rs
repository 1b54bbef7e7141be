//! HTML Meta Tag Extraction
//!
//! Reads `<meta>` tags (Open Graph, Twitter cards, article:*, plain names)
//! into a first-match table, then fills metadata fields in precedence order.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use dom_query::{Document, Selection};
use url::Url;

use crate::dom;
use crate::result::Metadata;
use crate::url_utils;

/// First value seen for every meta key, keys lowercased.
#[derive(Debug, Default, Clone)]
pub struct MetaTags {
    values: HashMap<String, String>,
}

impl MetaTags {
    /// Collect all meta tags of a document, first occurrence per key wins.
    #[must_use]
    pub fn collect(doc: &Document) -> Self {
        let mut values = HashMap::new();

        for node in doc.select("meta").nodes() {
            let meta = Selection::from(*node);
            let Some(content) = dom::get_attribute(&meta, "content")
                .map(|c| dom::collapse_whitespace(&c))
                .filter(|c| !c.is_empty())
            else {
                continue;
            };

            // A tag may carry several keys, e.g. property="og:title twitter:title"
            for attr in ["property", "name", "itemprop"] {
                let Some(keys) = dom::get_attribute(&meta, attr) else {
                    continue;
                };
                for key in keys.split_whitespace() {
                    values
                        .entry(key.to_lowercase())
                        .or_insert_with(|| content.clone());
                }
            }
        }

        Self { values }
    }

    /// Value of a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// First present value among `keys`, in the order given.
    #[must_use]
    pub fn first_of(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.get(key)).map(ToString::to_string)
    }

    /// First value among `keys` accepted by `accept`.
    #[must_use]
    pub fn first_valid(&self, keys: &[&str], accept: fn(&str) -> bool) -> Option<String> {
        keys.iter()
            .filter_map(|key| self.get(key))
            .find(|value| accept(value))
            .map(ToString::to_string)
    }

    /// Number of collected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no meta tag carried content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Examine HTML meta tags for metadata.
///
/// Fills only fields that are still empty, so earlier sources keep
/// precedence. Image URLs are resolved against `base` when given.
#[must_use]
pub fn examine_meta(meta: &MetaTags, original: Metadata, base: Option<&Url>) -> Metadata {
    let mut result = original;

    if result.title.is_none() {
        result.title = meta.first_of(&["og:title", "twitter:title"]);
    }

    if result.byline.is_none() {
        result.byline = meta
            .first_valid(&["author", "article:author", "dc.creator"], validate_byline)
            .map(|name| name.trim().to_string());
    }

    if result.site_name.is_none() {
        result.site_name = meta.first_of(&["og:site_name"]);
    }

    if result.image.is_none() {
        result.image = meta
            .first_of(&[
                "og:image",
                "og:image:url",
                "og:image:secure_url",
                "twitter:image",
                "twitter:image:src",
            ])
            .map(|src| url_utils::resolve(&src, base));
    }

    if result.published_time.is_none() {
        result.published_time = meta.first_valid(
            &[
                "article:published_time",
                "og:article:published_time",
                "og:published_time",
                "datepublished",
            ],
            is_timestamp,
        );
    }

    if result.modified_time.is_none() {
        result.modified_time = meta.first_valid(
            &[
                "article:modified_time",
                "og:article:modified_time",
                "og:updated_time",
                "datemodified",
            ],
            is_timestamp,
        );
    }

    result
}

/// Validate that a meta value looks like a person's name rather than a URL.
///
/// Filters out:
/// - Empty names or names longer than 100 characters
/// - Names that look like URLs (profile links are common in `article:author`)
/// - Names that look like JSON
#[must_use]
pub fn validate_byline(name: &str) -> bool {
    let name = name.trim();
    let length = name.chars().count();

    if length == 0 || length > 100 {
        return false;
    }

    if url_utils::looks_like_url(name) {
        return false;
    }

    !(name.starts_with('{') || name.starts_with('['))
}

/// Whether a string is an ISO-8601-like timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM[:SS]` with an optional numeric offset,
/// and plain `YYYY-MM-DD`.
#[must_use]
pub fn is_timestamp(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }

    DateTime::parse_from_rfc3339(value).is_ok()
        || DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z").is_ok()
        || DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z").is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}
