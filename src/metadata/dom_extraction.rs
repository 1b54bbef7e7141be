//! DOM-Based Metadata Extraction
//!
//! Signals read from elements rather than `<meta>` tags: the `<title>`
//! element, `<link>` relations, `<html lang/dir>`, and the late-bound
//! in-article heading and image.

use dom_query::{Document, NodeRef, Selection};
use url::Url;

use crate::dom;
use crate::metadata::meta_tags;
use crate::patterns;
use crate::result::Metadata;
use crate::url_utils;

/// Minimum declared width/height of an in-article hero image.
const MIN_IMAGE_DIMENSION: u32 = 100;

/// Read and clean the `<title>` element.
///
/// When the title contains a spaced separator (`|`, `-`, `–`, `—`, `»`) or a
/// colon and its longest part has at least four words, that part is used;
/// this drops the usual site-name suffix. Otherwise the full text is kept.
#[must_use]
pub fn examine_title_element(doc: &Document) -> Option<String> {
    let title = doc.select("title");
    let raw = dom::collapse_whitespace(&dom::text_content(&title));
    if raw.is_empty() {
        return None;
    }
    Some(clean_title(&raw))
}

/// Strip a site suffix or prefix from a document title.
#[must_use]
pub fn clean_title(title: &str) -> String {
    if !patterns::TITLE_SEPARATOR.is_match(title) {
        return title.to_string();
    }

    let longest = patterns::TITLE_SEPARATOR
        .split(title)
        .map(str::trim)
        .max_by_key(|part| part.chars().count())
        .unwrap_or(title);

    if longest.split_whitespace().count() >= 4 {
        longest.to_string()
    } else {
        title.to_string()
    }
}

/// Fill canonical URL, favicon and `rel=author` byline from link relations.
#[must_use]
pub fn extract_link_metadata(doc: &Document, original: Metadata, base: Option<&Url>) -> Metadata {
    let mut result = original;

    for node in doc.select("[rel]").nodes() {
        let rel = node.attr("rel").unwrap_or_default().to_lowercase();
        let tokens: Vec<&str> = rel.split_whitespace().collect();
        let tag = dom::node_tag(node);

        if tag == "link" && result.url.is_none() && tokens.contains(&"canonical") {
            result.url = dom::attr_trimmed(node, "href").map(|href| url_utils::resolve(&href, base));
        }

        if tag == "link" && result.favicon.is_none() && tokens.contains(&"icon") {
            result.favicon = dom::attr_trimmed(node, "href").map(|href| url_utils::resolve(&href, base));
        }

        if result.byline.is_none() && tokens.contains(&"author") {
            let name = match tag.as_str() {
                "a" => Some(dom::normalized_text(node)),
                "link" => dom::attr_trimmed(node, "title"),
                _ => None,
            };
            result.byline = name.filter(|n| meta_tags::validate_byline(n));
        }
    }

    result
}

/// Fill `lang` and `dir` from the `<html>` element.
#[must_use]
pub fn extract_language(doc: &Document, original: Metadata) -> Metadata {
    let mut result = original;
    let html = doc.select("html");

    if result.lang.is_none() {
        result.lang = dom::get_attribute(&html, "lang")
            .map(|lang| lang.trim().to_string())
            .filter(|lang| !lang.is_empty());
    }

    if result.dir.is_none() {
        result.dir = dom::get_attribute(&html, "dir")
            .map(|dir| dir.trim().to_ascii_lowercase())
            .filter(|dir| matches!(dir.as_str(), "ltr" | "rtl" | "auto"))
            .or_else(|| result.lang.as_deref().map(|lang| infer_dir(lang).to_string()));
    }

    result
}

/// Text direction implied by a language tag's primary subtag.
#[must_use]
pub fn infer_dir(lang: &str) -> &'static str {
    let primary = lang
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if patterns::RTL_LANGUAGES.contains(&primary.as_str()) {
        "rtl"
    } else {
        "ltr"
    }
}

/// Text of the first `<h1>` inside the article.
#[must_use]
pub fn article_heading(root: &NodeRef) -> Option<String> {
    Selection::from(*root)
        .select("h1")
        .nodes()
        .iter()
        .map(dom::normalized_text)
        .find(|text| !text.is_empty())
}

/// First large, non-tracking image inside the article.
#[must_use]
pub fn article_image(root: &NodeRef, base: Option<&Url>) -> Option<String> {
    Selection::from(*root)
        .select("img")
        .nodes()
        .iter()
        .filter(|img| is_large_enough(img))
        .find_map(|img| {
            dom::attr_trimmed(img, "src")
                .filter(|src| !src.starts_with("data:"))
                .filter(|src| !patterns::TRACKING_IMAGE.is_match(src))
        })
        .map(|src| url_utils::resolve(&src, base))
}

/// Declared dimensions, when present, must both reach the minimum.
fn is_large_enough(img: &NodeRef) -> bool {
    ["width", "height"].iter().all(|name| {
        dom::attr_trimmed(img, name)
            .and_then(|v| v.trim_end_matches("px").parse::<u32>().ok())
            .is_none_or(|v| v >= MIN_IMAGE_DIMENSION)
    })
}
