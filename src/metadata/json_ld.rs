//! JSON-LD Metadata Parsing
//!
//! Reads Schema.org JSON-LD blocks. They only fill fields the `<head>` meta
//! tags left empty, so malformed or missing JSON-LD never hides better data.

use dom_query::{Document, Selection};
use serde_json::Value;

use crate::dom;
use crate::metadata::meta_tags;

/// Schema.org types describing the page's main article.
const ARTICLE_TYPES: &[&str] = &[
    "Article",
    "NewsArticle",
    "BlogPosting",
    "Report",
    "ScholarlyArticle",
    "TechArticle",
    "AnalysisNewsArticle",
    "OpinionNewsArticle",
    "ReportageNewsArticle",
    "SocialMediaPosting",
    "LiveBlogPosting",
    "WebPage",
];

/// Fields harvested from the first article-like JSON-LD object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonLdFields {
    /// `headline`, else `name`.
    pub title: Option<String>,
    /// `author.name` (names of several authors joined with ", ").
    pub author: Option<String>,
    /// `publisher.name`.
    pub publisher: Option<String>,
    /// `datePublished`, when it is a valid timestamp.
    pub date_published: Option<String>,
    /// `dateModified`, when it is a valid timestamp.
    pub date_modified: Option<String>,
    /// `image` URL.
    pub image: Option<String>,
}

/// Extract article fields from the JSON-LD scripts of a document.
///
/// Scripts that fail to parse are skipped. Objects nested in arrays and
/// `@graph` containers are searched in document order.
#[must_use]
pub fn extract_json_ld(doc: &Document) -> JsonLdFields {
    let mut fields = JsonLdFields::default();

    for script in doc.select(r#"script[type="application/ld+json"]"#).nodes() {
        let raw = dom::text_content(&Selection::from(*script));
        let Ok(value) = serde_json::from_str::<Value>(raw.trim()) else {
            tracing::trace!("skipping malformed JSON-LD block");
            continue;
        };

        let mut objects = Vec::new();
        flatten_objects(&value, &mut objects);

        for object in objects.into_iter().filter(|o| is_article(o)) {
            merge_article(&mut fields, object);
        }
    }

    fields
}

/// Collect objects from top-level arrays and `@graph` containers.
fn flatten_objects<'v>(value: &'v Value, out: &mut Vec<&'v serde_json::Map<String, Value>>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_objects(item, out);
            }
        }
        Value::Object(map) => {
            out.push(map);
            if let Some(graph) = map.get("@graph") {
                flatten_objects(graph, out);
            }
        }
        _ => {}
    }
}

/// Whether an object's `@type` names an article-like type.
fn is_article(object: &serde_json::Map<String, Value>) -> bool {
    match object.get("@type") {
        Some(Value::String(t)) => ARTICLE_TYPES.contains(&t.as_str()),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|t| ARTICLE_TYPES.contains(&t)),
        _ => false,
    }
}

fn merge_article(fields: &mut JsonLdFields, object: &serde_json::Map<String, Value>) {
    if fields.title.is_none() {
        fields.title = string_value(object.get("headline")).or_else(|| string_value(object.get("name")));
    }
    if fields.author.is_none() {
        fields.author = object.get("author").and_then(names_of);
    }
    if fields.publisher.is_none() {
        fields.publisher = object.get("publisher").and_then(names_of);
    }
    if fields.date_published.is_none() {
        fields.date_published =
            string_value(object.get("datePublished")).filter(|d| meta_tags::is_timestamp(d));
    }
    if fields.date_modified.is_none() {
        fields.date_modified =
            string_value(object.get("dateModified")).filter(|d| meta_tags::is_timestamp(d));
    }
    if fields.image.is_none() {
        fields.image = object.get("image").and_then(image_url);
    }
}

/// Trimmed, whitespace-collapsed string, `None` when empty or not a string.
fn string_value(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(dom::collapse_whitespace)
        .filter(|s| !s.is_empty())
}

/// Name(s) of a person or organization given as a string, object or array.
fn names_of(value: &Value) -> Option<String> {
    let names: Vec<String> = match value {
        Value::String(_) => string_value(Some(value)).into_iter().collect(),
        Value::Object(map) => string_value(map.get("name")).into_iter().collect(),
        Value::Array(items) => items.iter().filter_map(names_of).collect(),
        _ => Vec::new(),
    };

    let names: Vec<String> = names
        .into_iter()
        .filter(|n| meta_tags::validate_byline(n))
        .collect();

    if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    }
}

/// URL of a Schema.org image given as a string, `ImageObject` or array.
fn image_url(value: &Value) -> Option<String> {
    match value {
        Value::String(_) => string_value(Some(value)),
        Value::Object(map) => {
            string_value(map.get("url")).or_else(|| string_value(map.get("contentUrl")))
        }
        Value::Array(items) => items.iter().find_map(image_url),
        _ => None,
    }
}
