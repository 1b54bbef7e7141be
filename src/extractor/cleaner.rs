//! Article cleanup.
//!
//! Runs on the page document built by selection, never on the source
//! tree. Removes interactive and boilerplate elements, pulls out the
//! visible byline, drops weak blocks, normalizes attributes and URLs and
//! finally unwraps empty or presentational wrappers until nothing changes.

use dom_query::{Document, NodeRef, Selection};
use url::Url;

use crate::dom;
use crate::element_index::ElementIndex;
use crate::link_density::{is_link_list, link_density};
use crate::options::Options;
use crate::patterns;
use crate::url_utils;

use super::scoring::class_weight;

/// Elements that never belong in a reader view.
const UNWANTED_SELECTOR: &str = "script, style, noscript, template, form, input, button, \
     select, textarea, fieldset, label, footer, aside, nav, link, meta";

/// Embedded players, kept only when allow-listed.
const EMBED_SELECTOR: &str = "iframe, embed, object";

/// Elements scanned for a byline, from the top of the article.
const BYLINE_SCAN_LIMIT: usize = 25;

/// Longest text accepted as a byline.
const MAX_BYLINE_LEN: usize = 100;

/// Share widgets shorter than this are dropped.
const WEAK_BLOCK_LEN: usize = 500;

/// Containers judged by conditional cleaning.
const CONDITIONAL_TAGS: &[&str] = &["table", "ul", "ol", "div", "section"];

/// A container with this many commas is always kept.
const COMMA_KEEP: usize = 10;

/// Attributes with no meaning in a reader view.
const PRESENTATIONAL_ATTRIBUTES: &[&str] = &[
    "style", "align", "background", "bgcolor", "border", "cellpadding", "cellspacing", "frame",
    "hspace", "rules", "valign", "vspace",
];

/// Elements allowed to keep `width` and `height`.
const DEPRECATED_SIZE_ELEMENTS: &[&str] = &["table", "th", "td", "hr", "pre"];

/// Lazy-loading attributes promoted to `src`, in order of preference.
const LAZY_SRC_ATTRIBUTES: &[&str] = &["data-src", "data-original", "data-lazy-src"];

/// Presentational wrappers unwrapped when attribute-less.
const WRAPPER_TAGS: &[&str] = &["span", "font", "div", "center"];

/// Children that keep their block boundary when a wrapper `div` goes away.
const BLOCK_CHILDREN: &[&str] = &[
    "p", "div", "section", "article", "main", "table", "ul", "ol", "dl", "pre", "blockquote",
    "figure", "header", "h1", "h2", "h3", "h4", "h5", "h6", "center",
];

/// Elements never removed for being empty.
const KEEP_WHEN_EMPTY: &[&str] = &[
    "br", "hr", "td", "th", "tr", "tbody", "thead", "tfoot", "col", "colgroup",
];

/// Text inside these keeps its whitespace.
const PREFORMATTED: &[&str] = &["pre", "code", "textarea"];

/// Outcome of a cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Visible byline found and removed from the article.
    pub byline: Option<String>,
    /// Fixed-point passes executed.
    pub passes: usize,
    /// Whether the last pass changed nothing.
    pub converged: bool,
}

/// Clean the article in place.
///
/// `root` is the page wrapper of `doc`. `title` is used to drop a heading
/// that repeats it.
pub fn clean_article(
    doc: &Document,
    root: NodeRef,
    title: Option<&str>,
    base: Option<&Url>,
    options: &Options,
) -> CleanReport {
    let mut report = CleanReport::default();

    remove_unwanted(doc, options.allow_video);
    report.byline = take_byline(root);
    if let Some(title) = title {
        remove_title_heading(root, title);
    }
    remove_weak_blocks(root);
    clean_conditionally(root);

    promote_lazy_images(root);
    strip_attributes(root, options.keep_classes);
    fix_links(root, base);

    while report.passes < options.max_clean_passes {
        report.passes += 1;
        let unwrapped = unwrap_wrappers(root);
        let stripped = strip_empty(root);
        if !unwrapped && !stripped {
            report.converged = true;
            break;
        }
    }
    if !report.converged {
        tracing::debug!(passes = report.passes, "cleanup stopped at the pass limit");
    }

    normalize_text_nodes(root);

    tracing::trace!(?report, "article cleaned");
    report
}

fn remove_unwanted(doc: &Document, allow_video: bool) {
    doc.select(UNWANTED_SELECTOR).remove();

    for node in doc.select(EMBED_SELECTOR).nodes() {
        let allowed = allow_video
            && ["src", "data"]
                .iter()
                .filter_map(|name| dom::attr(node, name))
                .any(|src| patterns::VIDEOS.is_match(&src));
        if !allowed {
            dom::remove(node);
        }
    }
}

/// Find, remove and return the first byline near the top of the article.
fn take_byline(root: NodeRef) -> Option<String> {
    let candidates = Selection::from(root).select("*");

    for node in candidates.nodes().iter().take(BYLINE_SCAN_LIMIT) {
        let rel_author = node
            .attr("rel")
            .is_some_and(|rel| rel.split_whitespace().any(|t| t.eq_ignore_ascii_case("author")));
        let itemprop_author = node
            .attr("itemprop")
            .is_some_and(|prop| prop.to_ascii_lowercase().contains("author"));
        if !rel_author && !itemprop_author && !patterns::BYLINE.is_match(&dom::class_and_id(node)) {
            continue;
        }

        let text = dom::normalized_text(node);
        let byline = patterns::BYLINE_PREFIX.replace(&text, "").trim().to_string();
        let length = byline.chars().count();
        if length == 0 || length > MAX_BYLINE_LEN {
            continue;
        }

        dom::remove(node);
        return Some(byline);
    }
    None
}

/// Drop the first `h1`/`h2` repeating the title.
fn remove_title_heading(root: NodeRef, title: &str) {
    let headings = Selection::from(root).select("h1, h2");
    let Some(first) = headings.nodes().first().copied() else {
        return;
    };
    if text_similarity(title, &dom::normalized_text(&first)) > 0.75 {
        dom::remove(&first);
    }
}

/// Share of `b`'s word characters also found among `a`'s words.
fn text_similarity(a: &str, b: &str) -> f64 {
    fn tokens(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    let tokens_a = tokens(a);
    let tokens_b = tokens(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let unique_b = tokens_b
        .iter()
        .filter(|t| !tokens_a.contains(t))
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    let all_b = tokens_b.join(" ");

    1.0 - unique_b.chars().count() as f64 / all_b.chars().count() as f64
}

/// Remove short blocks whose class or id marks them as share widgets.
///
/// Other negative classes are left to scoring and conditional cleaning.
fn remove_weak_blocks(root: NodeRef) {
    let index = ElementIndex::build(root);
    let mut removed = vec![false; index.len()];

    for (idx, element) in index.iter().skip(1) {
        if element.parent.is_some_and(|p| removed[p]) {
            removed[idx] = true;
            continue;
        }
        let node = element.node;
        let match_string = dom::class_and_id(&node);
        if !patterns::SHARE_ELEMENTS.is_match(&match_string)
            || dom::contains_any_tag(&node, dom::MEDIA_TAGS)
            || dom::text_len(&node) >= WEAK_BLOCK_LEN
        {
            continue;
        }
        removed[idx] = true;
        dom::remove(&node);
    }
}

/// Remove containers that look like boilerplate.
///
/// When the removals take more than six sevenths of the text, the article
/// is restored as it was before this step.
fn clean_conditionally(root: NodeRef) {
    let before = dom::text_len(&root);
    let backup = Selection::from(root).inner_html();

    let index = ElementIndex::build(root);
    let mut count = 0;
    for (_, element) in index.iter().skip(1).rev() {
        if !CONDITIONAL_TAGS.contains(&element.tag.as_str()) || !dom::is_within(&element.node, &root) {
            continue;
        }
        if should_remove(&element.node, &element.tag) {
            dom::remove(&element.node);
            count += 1;
        }
    }

    let after = dom::text_len(&root);
    if before > 0 && after <= before / 7 {
        tracing::debug!(before, after, "conditional cleaning reverted");
        Selection::from(root).set_html(backup.to_string().as_str());
    } else if count > 0 {
        tracing::trace!(removed = count, "conditionally cleaned");
    }
}

fn should_remove(node: &NodeRef, tag: &str) -> bool {
    if tag == "table" && is_data_table(node) {
        return false;
    }
    if dom::has_ancestor_tag(node, &["code", "pre"], 0) || within_data_table(node) {
        return false;
    }

    let weight = class_weight(node);
    if weight < 0.0 {
        return true;
    }

    let text = dom::normalized_text(node);
    let commas = text.chars().filter(|c| matches!(c, ',' | '，')).count();
    if commas >= COMMA_KEEP {
        return false;
    }

    // Allow-listed players survived `remove_unwanted`.
    if dom::contains_any_tag(node, &["iframe", "embed", "object"]) {
        return false;
    }

    let is_list = matches!(tag, "ul" | "ol");
    let in_figure = dom::has_ancestor_tag(node, &["figure"], 0);
    let paragraphs = dom::count_tag(node, "p");
    let images = dom::count_tag(node, "img");
    let items = dom::count_tag(node, "li").saturating_sub(100);
    let inputs = dom::count_tag(node, "input");
    let length = text.chars().count();
    let density = link_density(node);
    let heading_density = heading_density(node, length);

    (images > 1 && (paragraphs as f64 / images as f64) < 0.5 && !in_figure)
        || (!is_list && items > paragraphs)
        || inputs > paragraphs / 3
        || (!is_list
            && heading_density < 0.9
            && length < 25
            && (images == 0 || images > 2)
            && !in_figure)
        || (!is_list && weight < 25.0 && density > 0.2)
        || (weight >= 25.0 && density > 0.5)
        || (!is_list && is_link_list(node))
}

/// Share of a node's text inside headings.
fn heading_density(node: &NodeRef, length: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }
    let heading_len: usize = Selection::from(*node)
        .select("h1, h2, h3, h4, h5, h6")
        .nodes()
        .iter()
        .map(dom::text_len)
        .sum();
    heading_len as f64 / length as f64
}

/// Tables holding data rather than layout.
fn is_data_table(node: &NodeRef) -> bool {
    if node
        .attr("role")
        .is_some_and(|role| role.trim().eq_ignore_ascii_case("presentation"))
        || node.attr("datatable").is_some_and(|v| v.trim() == "0")
    {
        return false;
    }
    if node.attr("summary").is_some() {
        return true;
    }

    let table = Selection::from(*node);
    if table.select("caption").nodes().iter().any(|c| dom::text_len(c) > 0) {
        return true;
    }
    if table.select("col, colgroup, tfoot, thead, th").exists() {
        return true;
    }
    if table.select("table").exists() {
        return false;
    }

    let rows = table.select("tr");
    let row_count = rows.length();
    let columns = rows
        .nodes()
        .iter()
        .map(|row| {
            dom::element_children(row)
                .iter()
                .filter(|cell| matches!(dom::node_tag(cell).as_str(), "td" | "th"))
                .map(|cell| {
                    dom::attr_trimmed(cell, "colspan")
                        .and_then(|span| span.parse::<usize>().ok())
                        .unwrap_or(1)
                })
                .sum::<usize>()
        })
        .max()
        .unwrap_or(0);

    row_count >= 10 || columns > 4 || row_count * columns > 10
}

fn within_data_table(node: &NodeRef) -> bool {
    let mut current = dom::parent_element(node);
    while let Some(parent) = current {
        if dom::node_tag(&parent) == "table" && is_data_table(&parent) {
            return true;
        }
        current = dom::parent_element(&parent);
    }
    false
}

/// Promote lazy-loading sources when `src` is missing or a placeholder.
fn promote_lazy_images(root: NodeRef) {
    for img in Selection::from(root).select("img").nodes() {
        let has_real_src = dom::attr_trimmed(img, "src")
            .is_some_and(|src| !patterns::LAZY_PLACEHOLDER.is_match(&src));

        if !has_real_src {
            if let Some(lazy) = LAZY_SRC_ATTRIBUTES
                .iter()
                .find_map(|name| dom::attr_trimmed(img, name))
            {
                img.set_attr("src", &lazy);
            }
        }
        if dom::attr_trimmed(img, "srcset").is_none() {
            if let Some(lazy) = dom::attr_trimmed(img, "data-srcset") {
                img.set_attr("srcset", &lazy);
            }
        }
    }
}

fn strip_attributes(root: NodeRef, keep_classes: bool) {
    for node in Selection::from(root).select("*").nodes() {
        let sel = Selection::from(*node);
        for name in PRESENTATIONAL_ATTRIBUTES {
            dom::remove_attribute(&sel, name);
        }
        if !DEPRECATED_SIZE_ELEMENTS.contains(&dom::node_tag(node).as_str()) {
            dom::remove_attribute(&sel, "width");
            dom::remove_attribute(&sel, "height");
        }
        if !keep_classes {
            dom::remove_attribute(&sel, "class");
        }
    }
}

/// Resolve relative URLs against `base` and unwrap `javascript:` links.
fn fix_links(root: NodeRef, base: Option<&Url>) {
    let scope = Selection::from(root);

    for link in scope.select("a[href]").nodes() {
        let href = dom::attr(link, "href").unwrap_or_default();
        let href = href.trim();
        if href.to_ascii_lowercase().starts_with("javascript:") {
            dom::unwrap(link);
        } else if let Some(base) = base {
            if !href.starts_with('#') {
                link.set_attr("href", &url_utils::create_absolute_url(href, base));
            }
        }
    }

    let Some(base) = base else {
        return;
    };

    for node in scope
        .select("img, picture, video, audio, source, iframe, embed, track")
        .nodes()
    {
        for name in ["src", "poster"] {
            if let Some(value) = dom::attr_trimmed(node, name) {
                node.set_attr(name, &url_utils::create_absolute_url(&value, base));
            }
        }
        if let Some(srcset) = dom::attr_trimmed(node, "srcset") {
            node.set_attr("srcset", &url_utils::resolve_srcset(&srcset, base));
        }
    }
}

/// Unwrap attribute-less wrappers. Returns whether anything changed.
///
/// `span` and `font` always go; `div` and `center` only when they hold a
/// single block child and no text of their own.
fn unwrap_wrappers(root: NodeRef) -> bool {
    let index = ElementIndex::build(root);
    let mut changed = false;

    for (_, element) in index.iter().skip(1).rev() {
        let node = element.node;
        if !WRAPPER_TAGS.contains(&element.tag.as_str())
            || !node.attrs().is_empty()
            || !dom::is_within(&node, &root)
        {
            continue;
        }

        if matches!(element.tag.as_str(), "span" | "font") {
            dom::unwrap(&node);
            changed = true;
            continue;
        }

        let children = dom::element_children(&node);
        let [only] = children.as_slice() else {
            continue;
        };
        if BLOCK_CHILDREN.contains(&dom::node_tag(only).as_str())
            && dom::direct_text(&node).trim().is_empty()
        {
            node.replace_with(&only.id);
            changed = true;
        }
    }
    changed
}

/// Remove elements without text or media. Returns whether anything changed.
fn strip_empty(root: NodeRef) -> bool {
    let index = ElementIndex::build(root);
    let mut changed = false;

    for (_, element) in index.iter().skip(1).rev() {
        let node = element.node;
        let tag = element.tag.as_str();
        if dom::is_void_element(tag)
            || KEEP_WHEN_EMPTY.contains(&tag)
            || dom::MEDIA_TAGS.contains(&tag)
            || !dom::is_within(&node, &root)
        {
            continue;
        }
        if !dom::normalized_text(&node).is_empty()
            || dom::contains_any_tag(&node, dom::MEDIA_TAGS)
            || dom::contains_any_tag(&node, &["br", "hr"])
        {
            continue;
        }
        dom::remove(&node);
        changed = true;
    }
    changed
}

/// Collapse whitespace runs in text nodes outside preformatted elements.
fn normalize_text_nodes(root: NodeRef) {
    for node in root.descendants() {
        if !node.is_text() || dom::has_ancestor_tag(&node, PREFORMATTED, 0) {
            continue;
        }
        let text = node.text();
        let collapsed = dom::collapse_inner_whitespace(&text);
        if collapsed != *text {
            Selection::from(node).replace_with_html(dom::escape_text(&collapsed).as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{page_root, PAGE_ID};

    const PARAGRAPH: &str = "Readers come for the story, and the story is told in plain \
        paragraphs that carry most of the words on the page.";

    fn cleaned_with(inner: &str, title: Option<&str>, base: Option<&str>, options: &Options) -> (String, CleanReport) {
        let doc = Document::from(format!(r#"<div id="{PAGE_ID}" class="page">{inner}</div>"#));
        let root = page_root(&doc).unwrap();
        let base = base.map(|b| Url::parse(b).unwrap());
        let report = clean_article(&doc, root, title, base.as_ref(), options);
        (Selection::from(root).html().to_string(), report)
    }

    fn cleaned(inner: &str) -> String {
        cleaned_with(inner, None, None, &Options::default()).0
    }

    #[test]
    fn test_unwanted_elements_removed() {
        let out = cleaned(&format!(
            "<p>{PARAGRAPH}</p><form><input name='q'><button>Go</button></form><script>x()</script><nav>Menu</nav>"
        ));
        assert!(!out.contains("<form"));
        assert!(!out.contains("<script"));
        assert!(!out.contains("Menu"));
        assert!(out.contains("Readers come"));
    }

    #[test]
    fn test_video_embeds_follow_option() {
        let inner = format!(
            r#"<p>{PARAGRAPH}</p><iframe src="https://www.youtube.com/embed/abc"></iframe><iframe src="https://ads.example.com/frame"></iframe>"#
        );
        let out = cleaned(&inner);
        assert!(out.contains("youtube.com/embed/abc"));
        assert!(!out.contains("ads.example.com"));

        let options = Options {
            allow_video: false,
            ..Options::default()
        };
        let (out, _) = cleaned_with(&inner, None, None, &options);
        assert!(!out.contains("<iframe"));
    }

    #[test]
    fn test_byline_taken_and_removed() {
        let inner = format!(r#"<p class="byline">By Jane Doe</p><p>{PARAGRAPH}</p>"#);
        let (out, report) = cleaned_with(&inner, None, None, &Options::default());
        assert_eq!(report.byline.as_deref(), Some("Jane Doe"));
        assert!(!out.contains("Jane Doe"));
    }

    #[test]
    fn test_long_author_bio_is_not_a_byline() {
        let bio = "word ".repeat(40);
        let inner = format!(r#"<div class="author-bio"><p>{bio}</p></div><p>{PARAGRAPH}</p>"#);
        let (_, report) = cleaned_with(&inner, None, None, &Options::default());
        assert!(report.byline.is_none());
    }

    #[test]
    fn test_title_heading_removed() {
        let inner = format!("<h1>Ten Things About Rust</h1><p>{PARAGRAPH}</p><h2>Ten more</h2>");
        let (out, _) = cleaned_with(&inner, Some("Ten Things About Rust"), None, &Options::default());
        assert!(!out.contains("<h1"));
        assert!(out.contains("Ten more"));
    }

    #[test]
    fn test_text_similarity() {
        assert_eq!(text_similarity("Ten Things", "ten things"), 1.0);
        assert_eq!(text_similarity("Alpha", "Beta"), 0.0);
        assert_eq!(text_similarity("", "Beta"), 0.0);
    }

    #[test]
    fn test_share_widgets_removed() {
        let inner = format!(
            r#"<p>{PARAGRAPH}</p><div class="share-buttons"><a href="/t">Tweet</a></div><div class="tags">rust</div>"#
        );
        let out = cleaned(&inner);
        assert!(!out.contains("Tweet"));
        assert!(!out.contains(">rust<"));
    }

    #[test]
    fn test_negative_class_alone_is_not_weak() {
        let inner = format!(
            r#"<div><p>{PARAGRAPH}</p><p class="overflow-hidden">A short closing line.</p><figure class="media"><figcaption>Map of the route</figcaption></figure></div>"#
        );
        let out = cleaned(&inner);
        assert!(out.contains("A short closing line."));
        assert!(out.contains("Map of the route"));
    }

    #[test]
    fn test_link_heavy_container_removed() {
        let inner = format!(
            r#"<div><p>{PARAGRAPH}</p><p>{PARAGRAPH}</p></div>
               <div><a href="/1">One related story</a> <a href="/2">Another related story</a></div>"#
        );
        let out = cleaned(&inner);
        assert!(out.contains("Readers come"));
        assert!(!out.contains("related story"));
    }

    #[test]
    fn test_data_table_kept() {
        let inner = format!(
            "<p>{PARAGRAPH}</p><table><thead><tr><th>A</th></tr></thead><tr><td><a href='/x'>1</a></td></tr></table>"
        );
        let out = cleaned(&inner);
        assert!(out.contains("<table"));
    }

    #[test]
    fn test_over_aggressive_cleaning_reverted() {
        let inner = r#"<div><a href="/a">Only links in here</a></div>"#;
        let out = cleaned(inner);
        assert!(out.contains("Only links in here"));
    }

    #[test]
    fn test_lazy_images_promoted() {
        let out = cleaned(&format!(
            r#"<p>{PARAGRAPH}</p><figure><img src="data:image/gif;base64,R0lGOD" data-src="/real.jpg"></figure>"#
        ));
        assert!(out.contains(r#"src="/real.jpg""#));
    }

    #[test]
    fn test_attributes_stripped() {
        let inner = format!(
            r#"<p class="lead" style="color:red" align="center">{PARAGRAPH}</p><table width="100"><tr><th>Year</th><td>2024</td></tr></table><img src="/a.png" width="10">"#
        );
        let out = cleaned(&inner);
        assert!(out.contains(r#"class="page""#));
        assert!(!out.contains("lead"));
        assert!(!out.contains("style="));
        assert!(!out.contains("align="));
        assert!(out.contains(r#"<table width="100">"#));
        assert!(!out.contains(r#"width="10""#));

        let options = Options {
            keep_classes: true,
            ..Options::default()
        };
        let (out, _) = cleaned_with(&inner, None, None, &options);
        assert!(out.contains(r#"class="lead""#));
    }

    #[test]
    fn test_links_resolved_against_base() {
        let inner = format!(
            r##"<p>{PARAGRAPH} <a href="/about">About</a> <a href="#notes">Notes</a> <a href="javascript:void(0)">Click</a></p><img src="img/a.png" srcset="img/a.png 1x, img/b.png 2x">"##
        );
        let (out, _) = cleaned_with(&inner, None, Some("https://example.com/blog/post"), &Options::default());

        assert!(out.contains(r#"href="https://example.com/about""#));
        assert!(out.contains(r##"href="#notes""##));
        assert!(!out.contains("javascript:"));
        assert!(out.contains("Click"));
        assert!(out.contains(r#"src="https://example.com/blog/img/a.png""#));
        assert!(out.contains("https://example.com/blog/img/b.png 2x"));
    }

    #[test]
    fn test_links_untouched_without_base() {
        let out = cleaned(&format!(r#"<p>{PARAGRAPH} <a href="/about">About</a></p>"#));
        assert!(out.contains(r#"href="/about""#));
    }

    #[test]
    fn test_wrappers_unwrapped_to_fixed_point() {
        let inner = format!(
            "<div><div><div><p>{PARAGRAPH}</p></div></div></div><p><span><font>plain</font></span> text</p><p></p><div><span></span></div>"
        );
        let (out, report) = cleaned_with(&inner, None, None, &Options::default());

        assert!(report.converged);
        assert!(report.passes >= 2);
        assert!(!out.contains("<span"));
        assert!(!out.contains("<font"));
        assert!(!out.contains("<p></p>"));
        assert!(out.contains(&format!(r#"<div id="{PAGE_ID}" class="page"><p>"#)));
    }

    #[test]
    fn test_pass_limit_respected() {
        let options = Options {
            max_clean_passes: 1,
            ..Options::default()
        };
        let inner = format!("<div><div><p>{PARAGRAPH}</p></div></div><p><b></b></p>");
        let (_, report) = cleaned_with(&inner, None, None, &options);
        assert_eq!(report.passes, 1);
        assert!(!report.converged);
    }

    #[test]
    fn test_whitespace_normalized_outside_pre() {
        let inner = format!("<p>{PARAGRAPH}   with\n\n  gaps</p><pre>keep   this\n  layout</pre>");
        let out = cleaned(&inner);
        assert!(out.contains("with gaps"));
        assert!(out.contains("keep   this\n  layout"));
    }
}
