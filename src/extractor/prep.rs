//! Working-copy preparation.
//!
//! Strips what can never be article content before the scorer runs:
//! scripts, hidden nodes, unlikely candidates and empty containers. It
//! also rewrites `div`s that hold only inline content into paragraphs so
//! they are scored like paragraphs.
//!
//! Removal passes collect matches over a pre-order snapshot, skip
//! descendants of nodes already marked, then detach the top-most matches.

use dom_query::{Document, NodeRef};

use crate::dom;
use crate::element_index::ElementIndex;
use crate::link_density::link_density;
use crate::patterns;

/// Elements removed outright from the working copy.
const NON_CONTENT_SELECTOR: &str = "script, style, noscript, template, link, meta";

/// Descendants that keep a `div` from being treated as a paragraph.
const DIV_TO_P_BLOCKERS: &[&str] = &[
    "blockquote", "dl", "div", "img", "ol", "p", "pre", "table", "ul",
];

/// Containers dropped when they hold nothing.
const EMPTY_CANDIDATES: &[&str] = &[
    "div", "section", "header", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// What a preparation run changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PrepReport {
    /// Hidden elements removed.
    pub hidden: usize,
    /// Unlikely candidates and landmark boilerplate removed.
    pub unlikely: usize,
    /// Empty containers removed.
    pub empty: usize,
    /// `div`s rewritten as `p` or collapsed into their single paragraph.
    pub converted: usize,
}

/// Prepare a working copy for scoring.
///
/// `strip_unlikely` enables removal of unlikely candidates by class, id and
/// role, and of `nav`/`aside`/`footer` landmarks.
pub fn prepare_document(doc: &Document, strip_unlikely: bool) -> PrepReport {
    let mut report = PrepReport {
        hidden: strip_non_content(doc),
        ..PrepReport::default()
    };

    let Some(root) = dom::body_or_root(doc) else {
        return report;
    };

    if strip_unlikely {
        report.unlikely = remove_matching(root, is_unlikely_candidate);
    }

    report.empty = remove_empty_containers(root);
    report.converted = convert_divs(root);

    tracing::trace!(?report, strip_unlikely, "working copy prepared");
    report
}

/// Remove scripts, styles, unlisted embeds and hidden nodes.
///
/// Returns the number of hidden subtrees removed.
pub fn strip_non_content(doc: &Document) -> usize {
    doc.select(NON_CONTENT_SELECTOR).remove();
    remove_unlisted_embeds(doc);

    dom::body_or_root(doc).map_or(0, |root| remove_matching(root, |node, _| dom::is_hidden(node)))
}

/// Drop `object`/`embed` players that are not on the video allow-list.
fn remove_unlisted_embeds(doc: &Document) {
    for node in doc.select("object, embed").nodes() {
        let source = ["src", "data"]
            .iter()
            .filter_map(|name| dom::attr(node, name))
            .collect::<Vec<_>>()
            .join(" ");
        if !patterns::VIDEOS.is_match(&source) {
            dom::remove(node);
        }
    }
}

/// Remove every top-most element below `root` accepted by `matches`.
///
/// Returns the number of removed subtrees.
fn remove_matching<F>(root: NodeRef, matches: F) -> usize
where
    F: Fn(&NodeRef, &str) -> bool,
{
    let index = ElementIndex::build(root);
    let mut removed = vec![false; index.len()];
    let mut targets = Vec::new();

    for (idx, element) in index.iter().skip(1) {
        if element.parent.is_some_and(|p| removed[p]) {
            removed[idx] = true;
            continue;
        }
        if matches(&element.node, &element.tag) {
            removed[idx] = true;
            targets.push(element.node);
        }
    }

    for node in &targets {
        dom::remove(node);
    }
    targets.len()
}

/// Unlikely-candidate test on class, id, role and landmark tags.
fn is_unlikely_candidate(node: &NodeRef, tag: &str) -> bool {
    if matches!(tag, "body" | "html" | "a" | "article" | "main") {
        return false;
    }

    match tag {
        "nav" | "aside" | "footer" => return true,
        "header" => return !dom::has_ancestor_tag(node, &["article", "main"], 0),
        _ => {}
    }

    if node
        .attr("role")
        .is_some_and(|role| patterns::UNLIKELY_ROLES.contains(&role.trim().to_ascii_lowercase().as_str()))
    {
        return true;
    }

    let match_string = dom::class_and_id(node);
    patterns::UNLIKELY_CANDIDATES.is_match(&match_string)
        && !patterns::MAYBE_CANDIDATE.is_match(&match_string)
        && !dom::has_ancestor_tag(node, &["table", "code"], 0)
}

/// Remove containers without text whose only children are `br`/`hr`.
///
/// Walks in reverse document order so emptied parents are caught too.
fn remove_empty_containers(root: NodeRef) -> usize {
    let index = ElementIndex::build(root);
    let mut count = 0;

    for (_, element) in index.iter().skip(1).rev() {
        if !EMPTY_CANDIDATES.contains(&element.tag.as_str()) {
            continue;
        }
        let node = element.node;
        if !dom::normalized_text(&node).is_empty() {
            continue;
        }
        let only_breaks = dom::element_children(&node)
            .iter()
            .all(|child| matches!(dom::node_tag(child).as_str(), "br" | "hr"));
        if only_breaks {
            dom::remove(&node);
            count += 1;
        }
    }
    count
}

/// Rewrite inline-only `div`s as `p`, and collapse a `div` wrapping a single
/// low-link paragraph into that paragraph.
fn convert_divs(root: NodeRef) -> usize {
    let index = ElementIndex::build(root);
    let mut count = 0;

    for (_, element) in index.iter().skip(1) {
        if element.tag != "div" || !dom::is_within(&element.node, &root) {
            continue;
        }
        let node = element.node;
        let children = dom::element_children(&node);

        if let [only] = children.as_slice() {
            if dom::node_tag(only) == "p"
                && dom::collapse_whitespace(&dom::direct_text(&node)).is_empty()
                && link_density(&node) < 0.25
            {
                node.replace_with(&only.id);
                count += 1;
                continue;
            }
        }

        if !has_block_descendant(&node) {
            dom::rename(&node, "p");
            count += 1;
        }
    }
    count
}

fn has_block_descendant(node: &NodeRef) -> bool {
    node
        .descendants()
        .iter()
        .any(|d| d.is_element() && DIV_TO_P_BLOCKERS.contains(&dom::node_tag(d).as_str()))
}
