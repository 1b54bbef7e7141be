//! Article selection.
//!
//! Picks the best-scored container, widens it when the runners-up live
//! under a common ancestor or a parent scores higher, then merges related
//! siblings into a fresh page document.

use dom_query::{Document, Selection};

use crate::dom;
use crate::element_index::ElementIndex;
use crate::error::{Error, Result};
use crate::link_density::link_density;
use crate::options::Options;
use crate::patterns;

use super::scoring::ScoreTable;

/// Runners-up needed to promote a shared ancestor.
const MIN_TOP_CANDIDATES: usize = 3;

/// Share of the top score a runner-up needs to count for promotion.
const PROMOTION_RATIO: f64 = 0.75;

/// Bonus share of the top score for siblings sharing its class.
const SAME_CLASS_BONUS: f64 = 0.2;

/// Tags serialized as-is when merged; any other tag becomes a `div`.
const ALTER_TO_DIV_EXCEPTIONS: &[&str] = &[
    "div", "article", "section", "p", "main", "table", "ul", "ol", "dl", "pre", "blockquote",
    "figure", "header", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// The article chosen from one working copy.
pub struct Chosen {
    /// `<div id="readability-page-1" class="page">` holding the article.
    pub document: Document,
    /// Score of the final top candidate.
    pub top_score: f64,
    /// Collapsed text length of the article.
    pub text_len: usize,
    /// Siblings merged next to the top candidate.
    pub merged: usize,
}

/// Choose the article among scored candidates.
///
/// Returns `Ok(None)` when no element was scored.
pub fn select_article(
    index: &ElementIndex,
    scores: &ScoreTable,
    options: &Options,
) -> Result<Option<Chosen>> {
    let ranked = scores.ranked(options.nb_top_candidates.max(1));
    let Some(&(first, first_score)) = ranked.first() else {
        return Ok(None);
    };

    let Some(root) = index.get(0) else {
        return Ok(None);
    };
    if first == 0 {
        let inner = Selection::from(root.node).inner_html();
        tracing::debug!(score = first_score, "top candidate is the body");
        return Ok(Some(page(&inner, first_score, 0)));
    }

    let mut top = promote_common_ancestor(index, &ranked);
    let mut top_score = scores.score(top).unwrap_or(first_score);

    (top, top_score) = climb_parents(index, scores, top, top_score);

    while let Some(parent) = index.parent(top) {
        if parent == 0 || index.children(parent).len() != 1 {
            break;
        }
        top = parent;
        top_score = scores.score(top).unwrap_or(top_score);
    }

    let members = merge_siblings(index, scores, top, top_score, options);
    let merged = members.len().saturating_sub(1);

    let parts = if merged == 0 {
        let single = collapse_down(index, top)?;
        serialize(index, single)
    } else {
        members
            .iter()
            .map(|&idx| serialize(index, idx))
            .collect::<String>()
    };

    tracing::debug!(
        candidates = scores.candidates(),
        top_score,
        merged,
        "article selected"
    );

    Ok(Some(page(&parts, top_score, merged)))
}

/// Move the top to the nearest ancestor that also holds at least three
/// close runners-up.
fn promote_common_ancestor(index: &ElementIndex, ranked: &[(usize, f64)]) -> usize {
    let Some(&(top, top_score)) = ranked.first() else {
        return 0;
    };
    if top_score <= 0.0 {
        return top;
    }

    let alternatives: Vec<usize> = ranked[1..]
        .iter()
        .filter(|(_, score)| *score >= top_score * PROMOTION_RATIO)
        .map(|&(idx, _)| idx)
        .collect();
    if alternatives.len() < MIN_TOP_CANDIDATES {
        return top;
    }

    let mut current = index.parent(top);
    while let Some(parent) = current {
        if parent == 0 {
            break;
        }
        let contained = alternatives
            .iter()
            .filter(|&&alt| index.is_ancestor(parent, alt))
            .count();
        if contained >= MIN_TOP_CANDIDATES {
            tracing::trace!(from = top, to = parent, "promoted to common ancestor");
            return parent;
        }
        current = index.parent(parent);
    }
    top
}

/// Walk up while scored ancestors keep at least a third of the top score;
/// the first one beating its child becomes the top.
fn climb_parents(
    index: &ElementIndex,
    scores: &ScoreTable,
    top: usize,
    top_score: f64,
) -> (usize, f64) {
    let threshold = top_score / 3.0;
    let mut last_score = top_score;
    let mut current = index.parent(top);

    while let Some(parent) = current {
        if parent == 0 {
            break;
        }
        match scores.score(parent) {
            None => {}
            Some(score) if score < threshold => break,
            Some(score) if score > last_score => return (parent, score),
            Some(score) => last_score = score,
        }
        current = index.parent(parent);
    }
    (top, top_score)
}

/// The top plus every sibling that belongs to the article, in order.
fn merge_siblings(
    index: &ElementIndex,
    scores: &ScoreTable,
    top: usize,
    top_score: f64,
    options: &Options,
) -> Vec<usize> {
    let Some(parent) = index.parent(top) else {
        return vec![top];
    };
    let Some(top_element) = index.get(top) else {
        return vec![top];
    };

    let threshold = options.sibling_threshold(top_score);
    let top_class = dom::attr_trimmed(&top_element.node, "class");

    index
        .children(parent)
        .iter()
        .copied()
        .filter(|&sibling| {
            if sibling == top {
                return true;
            }
            let Some(element) = index.get(sibling) else {
                return false;
            };

            let bonus = match (&top_class, dom::attr_trimmed(&element.node, "class")) {
                (Some(top_class), Some(class)) if *top_class == class => {
                    top_score * SAME_CLASS_BONUS
                }
                _ => 0.0,
            };
            if scores
                .score(sibling)
                .is_some_and(|score| score + bonus >= threshold)
            {
                return true;
            }

            element.tag == "p" && is_standalone_paragraph(&element.node)
        })
        .collect()
}

/// Unscored paragraphs that still read as article prose.
fn is_standalone_paragraph(node: &dom::NodeRef) -> bool {
    let density = link_density(node);
    let text = dom::normalized_text(node);
    let length = text.chars().count();

    if length > 80 {
        density < 0.25
    } else {
        length > 0 && density == 0.0 && patterns::SENTENCE_END.is_match(&text)
    }
}

/// Descend through single-child wrappers without own text.
fn collapse_down(index: &ElementIndex, top: usize) -> Result<usize> {
    let mut current = top;
    let mut steps = 0;

    while let [only] = index.children(current) {
        let only = *only;
        let has_text = index
            .get(current)
            .is_some_and(|e| !dom::direct_text(&e.node).trim().is_empty());
        if has_text || index.tag(only) == "p" {
            break;
        }
        current = only;
        steps += 1;
        if steps > index.len() {
            return Err(Error::InternalFault(
                "article collapse exceeded the tree depth".to_string(),
            ));
        }
    }
    Ok(current)
}

fn serialize(index: &ElementIndex, idx: usize) -> String {
    let Some(element) = index.get(idx) else {
        return String::new();
    };
    if ALTER_TO_DIV_EXCEPTIONS.contains(&element.tag.as_str()) {
        Selection::from(element.node).html().to_string()
    } else {
        dom::outer_html_as(&element.node, "div")
    }
}

fn page(inner: &str, top_score: f64, merged: usize) -> Chosen {
    let document = super::page_document(inner);
    let text_len = super::page_root(&document).map_or(0, |root| dom::text_len(&root));
    Chosen {
        document,
        top_score,
        text_len,
        merged,
    }
}
