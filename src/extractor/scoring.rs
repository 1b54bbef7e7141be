//! Candidate scoring.
//!
//! Paragraph-like leaves hand a content score to up to five ancestors;
//! each ancestor starts from a weight derived from its tag and its
//! class/id. The resulting table is scaled by `1 - link_density` so
//! navigation blocks sink below prose.

use dom_query::NodeRef;

use crate::dom;
use crate::element_index::ElementIndex;
use crate::link_density::link_density;
use crate::patterns;

/// Elements whose own text feeds their ancestors.
const SCORABLE_TAGS: &[&str] = &["p", "td", "pre", "h2", "h3", "h4", "h5", "h6"];

/// Ancestor levels reached by a leaf's score.
const ANCESTOR_LEVELS: usize = 5;

/// Weight of a POSITIVE or NEGATIVE match on class or id.
const CLASS_WEIGHT: f64 = 25.0;

/// Direct `<p>` children of at least this length earn a bonus.
const EMBEDDED_PARAGRAPH_LEN: usize = 25;

/// Score of one candidate container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreEntry {
    /// Accumulated content score.
    pub score: f64,
    /// Number of scorable leaves that reached this container.
    pub paragraphs: usize,
}

/// Per-element scores, aligned with an [`ElementIndex`].
///
/// Elements never reached by a scorable leaf have no entry and are not
/// candidates.
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    entries: Vec<Option<ScoreEntry>>,
}

impl ScoreTable {
    /// Score of the element at `idx`.
    #[must_use]
    pub fn score(&self, idx: usize) -> Option<f64> {
        self.entry(idx).map(|e| e.score)
    }

    /// Entry of the element at `idx`.
    #[must_use]
    pub fn entry(&self, idx: usize) -> Option<&ScoreEntry> {
        self.entries.get(idx).and_then(Option::as_ref)
    }

    /// Number of scored elements.
    #[must_use]
    pub fn candidates(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    /// The `limit` best candidates, highest score first.
    ///
    /// Equal scores keep document order.
    #[must_use]
    pub fn ranked(&self, limit: usize) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| entry.map(|e| (idx, e.score)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}

/// Score every container of the index.
///
/// Leaves are visited in reverse pre-order, so every ancestor entry is
/// complete before the link-density scaling runs.
#[must_use]
pub fn score_candidates(index: &ElementIndex, min_paragraph_len: usize) -> ScoreTable {
    let mut entries: Vec<Option<ScoreEntry>> = vec![None; index.len()];

    for (idx, element) in index.iter().rev() {
        if !SCORABLE_TAGS.contains(&element.tag.as_str()) {
            continue;
        }
        // A cell around paragraphs is scored through them.
        if element.tag == "td" && holds_scorable(index, idx) {
            continue;
        }

        let text = dom::normalized_text(&element.node);
        if text.chars().count() < min_paragraph_len {
            continue;
        }

        let increment = content_score(&text) + embedded_paragraphs(index, idx);

        for (level, ancestor) in index
            .ancestors(idx, ANCESTOR_LEVELS)
            .into_iter()
            .enumerate()
        {
            let divider = match level {
                0 => 1.0,
                1 => 2.0,
                _ => level as f64 * 3.0,
            };
            let entry = entries[ancestor].get_or_insert_with(|| ScoreEntry {
                score: initial_score(index, ancestor),
                paragraphs: 0,
            });
            entry.score += increment / divider;
            entry.paragraphs += 1;
        }
    }

    for (idx, slot) in entries.iter_mut().enumerate() {
        if let (Some(entry), Some(element)) = (slot.as_mut(), index.get(idx)) {
            entry.score *= 1.0 - link_density(&element.node);
        }
    }

    let table = ScoreTable { entries };
    tracing::trace!(candidates = table.candidates(), "candidates scored");
    table
}

/// Content score of a leaf's text: one point, one per comma, one per
/// hundred characters (at most three).
#[must_use]
pub fn content_score(text: &str) -> f64 {
    let commas = text.chars().filter(|c| matches!(c, ',' | '，')).count();
    let length_bonus = (text.chars().count() / 100).min(3);
    (1 + commas + length_bonus) as f64
}

/// Base score of a container from its tag.
#[must_use]
pub fn tag_weight(tag: &str) -> f64 {
    match tag {
        "article" => 10.0,
        "main" => 8.0,
        "div" => 5.0,
        "pre" | "td" | "blockquote" | "section" => 3.0,
        "address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" | "form" => -3.0,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "th" => -5.0,
        "nav" | "aside" | "footer" => -25.0,
        _ => 0.0,
    }
}

/// Class and id weight: +25 for a POSITIVE match, -25 for a NEGATIVE
/// match, on each of the two attributes.
#[must_use]
pub fn class_weight(node: &NodeRef) -> f64 {
    let mut weight = 0.0;

    for name in ["class", "id"] {
        let Some(value) = dom::attr_trimmed(node, name) else {
            continue;
        };
        if patterns::NEGATIVE.is_match(&value) {
            weight -= CLASS_WEIGHT;
        }
        if patterns::POSITIVE.is_match(&value) {
            weight += CLASS_WEIGHT;
        }
    }

    weight
}

fn initial_score(index: &ElementIndex, idx: usize) -> f64 {
    index
        .get(idx)
        .map_or(0.0, |element| tag_weight(&element.tag) + class_weight(&element.node))
}

/// Whether a scorable leaf sits anywhere below `idx`.
///
/// Descendants follow their ancestor contiguously in the index, deeper
/// than it.
fn holds_scorable(index: &ElementIndex, idx: usize) -> bool {
    let Some(cell) = index.get(idx) else {
        return false;
    };
    index
        .iter()
        .skip(idx + 1)
        .take_while(|(_, element)| element.depth > cell.depth)
        .any(|(_, element)| SCORABLE_TAGS.contains(&element.tag.as_str()))
}

/// Bonus for substantial paragraphs nested directly in a leaf.
fn embedded_paragraphs(index: &ElementIndex, idx: usize) -> f64 {
    index
        .children(idx)
        .iter()
        .filter_map(|&child| index.get(child))
        .filter(|child| child.tag == "p" && dom::text_len(&child.node) >= EMBEDDED_PARAGRAPH_LEN)
        .count() as f64
}
