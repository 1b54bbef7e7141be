//! DOM Operations Adapter
//!
//! Small helpers over the `dom_query` tree used by every pipeline stage.
//! Selection-level helpers mirror the `dom_query` API with stable names;
//! node-level helpers work on single `NodeRef` handles and never fail:
//! missing nodes or attributes yield empty text or `None`.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use crate::patterns;

/// Elements that have no closing tag and cannot have children.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose presence keeps an otherwise text-less node meaningful.
pub const MEDIA_TAGS: &[&str] = &[
    "img", "picture", "video", "audio", "iframe", "embed", "object", "svg", "canvas", "math",
];

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Deep copy of a document.
///
/// The copy is independent: mutations never reach the source tree.
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html().to_string())
}

/// `<body>` of a document, or the `<html>` root when there is none.
#[must_use]
pub fn body_or_root(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select("body")
        .nodes()
        .first()
        .copied()
        .or_else(|| doc.select("html").nodes().first().copied())
}

// === Selection Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Remove an attribute
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// Get tag name (lowercase) of the first node in a selection
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(NodeRef::node_name)
        .map(|name| name.to_ascii_lowercase())
}

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Node Accessors ===

/// Lowercase tag name of an element; empty for non-element nodes.
#[must_use]
pub fn node_tag(node: &NodeRef) -> String {
    if !node.is_element() {
        return String::new();
    }
    node.node_name()
        .map(|name| name.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Attribute value of a node.
#[inline]
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|v| v.to_string())
}

/// Non-empty, trimmed attribute value of a node.
#[must_use]
pub fn attr_trimmed(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `class` and `id` joined by a space, for pattern matching.
#[must_use]
pub fn class_and_id(node: &NodeRef) -> String {
    let class = node.attr("class").unwrap_or_default();
    let id = node.attr("id").unwrap_or_default();
    format!("{class} {id}")
}

/// Get all attributes as key-value pairs
#[must_use]
pub fn get_all_attributes(node: &NodeRef) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

/// Whitespace-collapsed text of a node and its descendants.
#[must_use]
pub fn normalized_text(node: &NodeRef) -> String {
    collapse_whitespace(&node.text())
}

/// Character count of the whitespace-collapsed text.
#[must_use]
pub fn text_len(node: &NodeRef) -> usize {
    normalized_text(node).chars().count()
}

/// Text of the node's own text children, without descendant elements.
#[must_use]
pub fn direct_text(node: &NodeRef) -> String {
    let mut out = String::new();
    for child in node.children() {
        if child.is_text() {
            out.push_str(&child.text());
        }
    }
    out
}

/// Element children in document order.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

/// Parent element, skipping the document node.
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent().filter(NodeRef::is_element)
}

/// Next sibling that is an element.
#[must_use]
pub fn next_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut current = node.next_sibling();
    while let Some(sibling) = current {
        if sibling.is_element() {
            return Some(sibling);
        }
        current = sibling.next_sibling();
    }
    None
}

/// Whether any ancestor (up to `max_depth` levels, 0 = unlimited) has one of `tags`.
#[must_use]
pub fn has_ancestor_tag(node: &NodeRef, tags: &[&str], max_depth: usize) -> bool {
    let mut depth = 0;
    let mut current = parent_element(node);
    while let Some(parent) = current {
        if max_depth > 0 && depth >= max_depth {
            return false;
        }
        if tags.contains(&node_tag(&parent).as_str()) {
            return true;
        }
        depth += 1;
        current = parent_element(&parent);
    }
    false
}

/// Whether `node` is `root` or still attached below it.
#[must_use]
pub fn is_within(node: &NodeRef, root: &NodeRef) -> bool {
    let mut current = Some(*node);
    while let Some(n) = current {
        if n.id == root.id {
            return true;
        }
        current = n.parent();
    }
    false
}

/// Whether the subtree contains an element with one of `tags` (the node included).
#[must_use]
pub fn contains_any_tag(node: &NodeRef, tags: &[&str]) -> bool {
    tags.contains(&node_tag(node).as_str())
        || node
            .descendants()
            .iter()
            .any(|d| d.is_element() && tags.contains(&node_tag(d).as_str()))
}

/// Count of descendant elements with the given tag.
#[must_use]
pub fn count_tag(node: &NodeRef, tag: &str) -> usize {
    Selection::from(*node).select(tag).length()
}

/// Check if element is a void element (self-closing)
#[must_use]
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Hidden-node test: `hidden` attribute, `aria-hidden="true"` (math fallback
/// images excepted) or an inline style hiding the element.
#[must_use]
pub fn is_hidden(node: &NodeRef) -> bool {
    if !node.is_element() {
        return false;
    }
    if node.attr("hidden").is_some() {
        return true;
    }
    if node
        .attr("aria-hidden")
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
        && !node
            .attr("class")
            .is_some_and(|c| c.contains("fallback-image"))
    {
        return true;
    }
    node.attr("style")
        .is_some_and(|style| patterns::HIDDEN_STYLE.is_match(&style))
}

// === Mutations ===

/// Detach a node (and its subtree) from the tree.
#[inline]
pub fn remove(node: &NodeRef) {
    Selection::from(*node).remove();
}

/// Rename element tag
#[inline]
pub fn rename(node: &NodeRef, new_tag: &str) {
    Selection::from(*node).rename(new_tag);
}

/// Replace a node by its children.
pub fn unwrap(node: &NodeRef) {
    let children = node.children();
    match children.as_slice() {
        [] => remove(node),
        [only] => node.replace_with(&only.id),
        _ => {
            let inner = Selection::from(*node).inner_html();
            Selection::from(*node).replace_with_html(inner.to_string().as_str());
        }
    }
}

/// Serialize a node as if its tag were `tag`, keeping attributes and children.
#[must_use]
pub fn outer_html_as(node: &NodeRef, tag: &str) -> String {
    let mut out = String::with_capacity(64);
    out.push('<');
    out.push_str(tag);
    for (name, value) in get_all_attributes(node) {
        out.push(' ');
        out.push_str(&name);
        out.push_str("=\"");
        out.push_str(&escape_attr(&value));
        out.push('"');
    }
    out.push('>');
    out.push_str(&Selection::from(*node).inner_html());
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}

// === Text Utilities ===

/// Collapse whitespace runs to a single space and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapse whitespace runs to a single space, keeping a single leading or
/// trailing space when the input had one.
#[must_use]
pub fn collapse_inner_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

/// Escape text for use as HTML character data.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text for use inside a double-quoted attribute value.
#[must_use]
pub fn escape_attr(text: &str) -> String {
    text.replace('&', "&amp;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<'a>(doc: &'a Document, css: &str) -> NodeRef<'a> {
        *doc.select(css).nodes().first().unwrap()
    }

    #[test]
    fn test_parse_and_select() {
        let doc = parse(r#"<div id="main" class="container">content</div>"#);
        let div = doc.select("div");

        assert_eq!(get_attribute(&div, "id"), Some("main".to_string()));
        assert_eq!(tag_name(&div), Some("div".to_string()));
        assert_eq!(class_and_id(&first(&doc, "div")), "container main");
    }

    #[test]
    fn test_attribute_modification() {
        let doc = parse(r#"<a href="/old" class="link">text</a>"#);
        let link = doc.select("a");

        remove_attribute(&link, "class");

        assert_eq!(get_attribute(&link, "href"), Some("/old".to_string()));
        assert!(attr(&first(&doc, "a"), "class").is_none());
    }

    #[test]
    fn test_missing_body_parts_are_tolerated() {
        let doc = parse("");
        assert!(body_or_root(&doc).is_some());
        assert_eq!(text_content(&doc.select("article")).to_string(), "");
        assert!(tag_name(&doc.select("article")).is_none());
    }

    #[test]
    fn test_direct_text_excludes_children() {
        let doc = parse("<div>Hello <span>nested</span> world</div>");
        let div = first(&doc, "div");

        assert_eq!(collapse_whitespace(&direct_text(&div)), "Hello world");
        assert_eq!(normalized_text(&div), "Hello nested world");
        assert_eq!(text_len(&div), 18);
    }

    #[test]
    fn test_element_children_and_siblings() {
        let doc = parse("<ul>text<li>a</li> <li>b</li><li>c</li></ul>");
        let ul = first(&doc, "ul");
        let items = element_children(&ul);

        assert_eq!(items.len(), 3);
        let next = next_element_sibling(&items[0]).unwrap();
        assert_eq!(normalized_text(&next), "b");
        assert!(next_element_sibling(&items[2]).is_none());
        assert_eq!(node_tag(&parent_element(&items[1]).unwrap()), "ul");
    }

    #[test]
    fn test_hidden_detection() {
        let doc = parse(
            r#"<div id="a" hidden>x</div>
            <div id="b" style="display : NONE">x</div>
            <div id="c" style="visibility:hidden">x</div>
            <div id="d" aria-hidden="true">x</div>
            <span id="e" aria-hidden="true" class="fallback-image">x</span>
            <div id="f" style="color: red">x</div>"#,
        );

        for id in ["a", "b", "c", "d"] {
            assert!(is_hidden(&first(&doc, &format!("#{id}"))), "{id} should be hidden");
        }
        assert!(!is_hidden(&first(&doc, "#e")));
        assert!(!is_hidden(&first(&doc, "#f")));
    }

    #[test]
    fn test_unwrap_single_child() {
        let doc = parse("<section><div><p>Keep me</p></div></section>");
        unwrap(&first(&doc, "div"));

        assert!(doc.select("div").is_empty());
        assert_eq!(doc.select("section > p").length(), 1);
        assert_eq!(normalized_text(&first(&doc, "section")), "Keep me");
    }

    #[test]
    fn test_unwrap_many_children() {
        let doc = parse("<section><span>one <b>two</b> three</span></section>");
        unwrap(&first(&doc, "span"));

        assert!(doc.select("span").is_empty());
        assert!(doc.select("section > b").exists());
        assert_eq!(normalized_text(&first(&doc, "section")), "one two three");
    }

    #[test]
    fn test_rename_keeps_content() {
        let doc = parse(r#"<div class="x">text</div>"#);
        rename(&first(&doc, "div"), "p");

        assert!(doc.select("div").is_empty());
        assert_eq!(get_attribute(&doc.select("p"), "class"), Some("x".to_string()));
    }

    #[test]
    fn test_outer_html_as_escapes_attributes() {
        let doc = parse(r#"<table><tr><td title='a "b"'>cell</td></tr></table>"#);
        let html = outer_html_as(&first(&doc, "td"), "div");

        assert_eq!(html, r#"<div title="a &quot;b&quot;">cell</div>"#);
    }

    #[test]
    fn test_ancestry_helpers() {
        let doc = parse("<table><tr><td><code><b>x</b></code></td></tr></table><p>y</p>");
        let b = first(&doc, "b");
        let table = first(&doc, "table");

        assert!(has_ancestor_tag(&b, &["table"], 0));
        assert!(!has_ancestor_tag(&b, &["table"], 2));
        assert!(is_within(&b, &table));
        assert!(!is_within(&first(&doc, "p"), &table));
        assert!(contains_any_tag(&table, &["code"]));
        assert_eq!(count_tag(&table, "b"), 1);
    }

    #[test]
    fn test_clone_document_is_independent() {
        let doc = parse("<div><p>one</p></div>");
        let copy = clone_document(&doc);
        copy.select("p").remove();

        assert!(doc.select("p").exists());
        assert!(copy.select("p").is_empty());
    }

    #[test]
    fn test_whitespace_helpers() {
        assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
        assert_eq!(collapse_inner_whitespace("\n  a \n\t b  "), " a b ");
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
        assert!(is_void_element("br"));
        assert!(!is_void_element("p"));
    }
}
