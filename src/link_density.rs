//! Link Density
//!
//! Measures how much of a block's text sits inside links. Scoring scales
//! every candidate by `1 - link_density`; the cleaner uses the same ratio
//! and the navigation-list test to drop link farms.

use dom_query::{NodeRef, Selection};

use crate::dom;

/// Weight of same-page `#anchor` links, which are rarely boilerplate.
const HASH_LINK_COEFFICIENT: f64 = 0.3;

/// Collect heuristics on link text.
///
/// Returns (weighted_link_length, num_short_links, non_empty_links)
fn collect_link_info(links: &Selection) -> (f64, usize, usize) {
    let mut link_length = 0.0;
    let mut n_short_links = 0;
    let mut n_non_empty_links = 0;

    for link in links.nodes() {
        let text_length = dom::text_len(link);
        if text_length == 0 {
            continue;
        }

        let coefficient = match link.attr("href") {
            Some(href) if href.len() > 1 && href.starts_with('#') => HASH_LINK_COEFFICIENT,
            _ => 1.0,
        };
        link_length += text_length as f64 * coefficient;
        if text_length < 10 {
            n_short_links += 1;
        }
        n_non_empty_links += 1;
    }

    (link_length, n_short_links, n_non_empty_links)
}

/// Share of a node's text that is link text, in `0.0..=1.0`.
///
/// Text is whitespace-collapsed before counting; a node without text has
/// density `0.0`.
#[must_use]
pub fn link_density(node: &NodeRef) -> f64 {
    let text_length = dom::text_len(node);
    if text_length == 0 {
        return 0.0;
    }

    let links = Selection::from(*node).select("a");
    if links.is_empty() {
        return 0.0;
    }
    let (link_length, _, _) = collect_link_info(&links);

    (link_length / text_length as f64).min(1.0)
}

/// Whether a short block is made of links, typical of menus and tag lists.
///
/// Longer blocks are judged by [`link_density`] alone.
#[must_use]
pub fn is_link_list(node: &NodeRef) -> bool {
    let links = Selection::from(*node).select("a");
    if links.is_empty() {
        return false;
    }

    let text_length = dom::text_len(node);
    let has_next_sibling = dom::next_element_sibling(node).is_some();
    let limit_length: usize = if dom::node_tag(node) == "p" {
        if has_next_sibling { 30 } else { 60 }
    } else if has_next_sibling {
        100
    } else {
        300
    };

    if text_length >= limit_length {
        return false;
    }

    let (link_length, n_short_links, n_non_empty_links) = collect_link_info(&links);
    if n_non_empty_links == 0 {
        return false;
    }

    // Link text > 80% of total text
    if link_length > text_length as f64 * 0.8 {
        return true;
    }

    // More than 80% of links are short (< 10 chars)
    n_non_empty_links > 1 && (n_short_links as f64) / (n_non_empty_links as f64) > 0.8
}
