//! Extraction pipeline.
//!
//! One call owns its trees from parse to output:
//!
//! 1. validate and parse the HTML
//! 2. harvest head-level metadata from the pristine document
//! 3. prepare, score and select on a working copy, strictly first and, when
//!    the article stays short, once more without unlikely-candidate removal
//! 4. clean the selected article and bind in-article metadata
//! 5. assemble the result

use dom_query::{Document, Selection};
use url::Url;

use crate::dom;
use crate::element_index::ElementIndex;
use crate::error::{Error, Result};
use crate::extractor::{self, cleaner, prep, scoring, selection, Chosen};
use crate::input;
use crate::metadata;
use crate::options::Options;
use crate::output;
use crate::result::ArticleResult;
use crate::url_utils;

/// The article picked for cleaning.
struct Selected {
    document: Document,
    degraded: bool,
}

/// Extract the article of an HTML document.
pub fn extract_document(html: &str, options: &Options) -> Result<ArticleResult> {
    input::validate_html(html)?;

    let base: Option<Url> = options.url.as_deref().and_then(url_utils::parse_url);
    tracing::debug!(bytes = html.len(), url = ?options.url, "extraction started");

    let doc = dom::parse(html);
    if options.max_elems_to_parse > 0 {
        let elements = doc.select("*").length();
        if elements > options.max_elems_to_parse {
            return Err(Error::InvalidInput(
                "document exceeds max_elems_to_parse".to_string(),
            ));
        }
    }

    let page = metadata::extract_metadata(&doc, base.as_ref());
    let selected = select(&doc, options)?;

    let Some(root) = extractor::page_root(&selected.document) else {
        return Err(Error::InternalFault("article wrapper missing".to_string()));
    };

    let report = cleaner::clean_article(
        &selected.document,
        root,
        page.metadata.title.as_deref(),
        base.as_ref(),
        options,
    );
    let metadata = page.finish(Some(&root), report.byline, base.as_ref());
    let result = output::assemble(metadata, Some(&root), selected.degraded, options);

    tracing::debug!(
        length = result.length,
        degraded = result.degraded,
        clean_passes = report.passes,
        "extraction finished"
    );
    Ok(result)
}

/// Run the strict attempt, then the relaxed one, then fall back to the body.
fn select(doc: &Document, options: &Options) -> Result<Selected> {
    let attempts: &[bool] = if options.strip_unlikely {
        &[true, false]
    } else {
        &[false]
    };

    let mut best: Option<Chosen> = None;
    for &strip_unlikely in attempts {
        let Some(chosen) = attempt(doc, strip_unlikely, options)? else {
            tracing::debug!(strip_unlikely, "no candidate found");
            continue;
        };

        if chosen.text_len >= options.char_threshold {
            return Ok(Selected {
                document: chosen.document,
                degraded: false,
            });
        }

        tracing::debug!(
            strip_unlikely,
            text_len = chosen.text_len,
            threshold = options.char_threshold,
            "article below threshold"
        );
        if best.as_ref().is_none_or(|b| chosen.text_len > b.text_len) {
            best = Some(chosen);
        }
    }

    if let Some(best) = best {
        return Ok(Selected {
            document: best.document,
            degraded: true,
        });
    }

    tracing::debug!("falling back to the document body");
    Ok(Selected {
        document: body_fallback(doc, options),
        degraded: true,
    })
}

/// Prepare a fresh working copy, score it and select the article.
fn attempt(doc: &Document, strip_unlikely: bool, options: &Options) -> Result<Option<Chosen>> {
    let work = dom::clone_document(doc);
    prep::prepare_document(&work, strip_unlikely);

    let Some(body) = dom::body_or_root(&work) else {
        return Ok(None);
    };
    let index = ElementIndex::build(body);
    let scores = scoring::score_candidates(&index, options.min_paragraph_len);
    selection::select_article(&index, &scores, options)
}

/// The prepared body, or the body with only non-content and hidden nodes
/// removed when preparation left nothing.
fn body_fallback(doc: &Document, options: &Options) -> Document {
    let work = dom::clone_document(doc);
    prep::prepare_document(&work, options.strip_unlikely);
    if let Some(body) = dom::body_or_root(&work).filter(|b| dom::text_len(b) > 0) {
        return extractor::page_document(&Selection::from(body).inner_html());
    }

    let raw = dom::clone_document(doc);
    prep::strip_non_content(&raw);
    let inner = dom::body_or_root(&raw)
        .map(|body| Selection::from(body).inner_html().to_string())
        .unwrap_or_default();
    extractor::page_document(&inner)
}
