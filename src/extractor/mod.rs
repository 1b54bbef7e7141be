//! Article extraction stages.
//!
//! # Module Structure
//!
//! - `prep`: Working-copy preparation (hidden and unlikely nodes, div rewriting)
//! - `scoring`: Content scores propagated from paragraphs to their containers
//! - `selection`: Top candidate, ancestor promotion and sibling merge
//! - `cleaner`: Cleanup of the selected article
//!
//! # Usage
//!
//! ```rust
//! use rs_readable::element_index::ElementIndex;
//! use rs_readable::extractor::{self, cleaner, prep, scoring, selection};
//! use rs_readable::{dom, Options};
//!
//! let paragraph = "<p>A paragraph of plain prose, long enough, with commas, to be scored.</p>";
//! let doc = dom::parse(&format!("<html><body><div>{}</div></body></html>", paragraph.repeat(4)));
//! let options = Options::default();
//!
//! let work = dom::clone_document(&doc);
//! prep::prepare_document(&work, options.strip_unlikely);
//!
//! if let Some(body) = dom::body_or_root(&work) {
//!     let index = ElementIndex::build(body);
//!     let scores = scoring::score_candidates(&index, options.min_paragraph_len);
//!
//!     if let Some(chosen) = selection::select_article(&index, &scores, &options)? {
//!         if let Some(root) = extractor::page_root(&chosen.document) {
//!             cleaner::clean_article(&chosen.document, root, None, None, &options);
//!             assert!(dom::text_len(&root) > 0);
//!         }
//!     }
//! }
//! # Ok::<(), rs_readable::Error>(())
//! ```

pub mod cleaner;
pub mod prep;
pub mod scoring;
pub mod selection;

use dom_query::{Document, NodeRef};

pub use cleaner::{clean_article, CleanReport};
pub use prep::{prepare_document, PrepReport};
pub use scoring::{class_weight, score_candidates, ScoreEntry, ScoreTable};
pub use selection::{select_article, Chosen};

/// `id` of the wrapper `div` around the extracted article.
pub const PAGE_ID: &str = "readability-page-1";

/// Wrap article markup in the page `div` and parse it as a new document.
#[must_use]
pub fn page_document(inner: &str) -> Document {
    Document::from(format!(r#"<div id="{PAGE_ID}" class="page">{inner}</div>"#))
}

/// The page wrapper of an article document.
#[must_use]
pub fn page_root(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select(&format!("div#{PAGE_ID}")).nodes().first().copied()
}
