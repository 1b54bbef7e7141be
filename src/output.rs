//! Output assembly.
//!
//! Turns the cleaned article tree and the bound metadata into an
//! [`ArticleResult`]: serialized markup, block-aware plain text, length
//! and excerpt.

use dom_query::{NodeRef, Selection};

use crate::dom;
use crate::options::Options;
use crate::result::{ArticleResult, Metadata};

/// Elements that start and end a text block.
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "main", "header", "h1", "h2", "h3", "h4", "h5", "h6", "li",
    "blockquote", "pre", "tr", "table", "ul", "ol", "figure", "figcaption", "dl", "dt", "dd", "hr",
    "center", "address", "details", "summary",
];

/// Table cells, separated by a space.
const CELL_TAGS: &[&str] = &["td", "th"];

/// Build the result for a cleaned article.
///
/// An article without text yields no `content`/`text_content` and is
/// always `degraded`.
#[must_use]
pub fn assemble(
    metadata: Metadata,
    article: Option<&NodeRef>,
    degraded: bool,
    options: &Options,
) -> ArticleResult {
    let text = article.map(text_content).unwrap_or_default();

    let (content, text_content, excerpt, degraded) = match article {
        Some(root) if !text.is_empty() => (
            Some(Selection::from(*root).html().to_string()),
            Some(text.clone()),
            excerpt(root, &text, options),
            degraded,
        ),
        _ => (None, None, None, true),
    };

    ArticleResult {
        title: metadata.title,
        byline: metadata.byline,
        length: text_content.as_ref().map_or(0, |t| t.chars().count()),
        content,
        text_content,
        excerpt,
        site_name: metadata.site_name,
        image: metadata.image,
        published_time: metadata.published_time,
        modified_time: metadata.modified_time,
        favicon: metadata.favicon,
        url: metadata.url,
        lang: metadata.lang,
        dir: metadata.dir,
        degraded,
    }
}

/// Plain text of a subtree.
///
/// Blocks are separated by one blank line and `<br>` by a newline; inline
/// whitespace is collapsed except inside `<pre>`.
#[must_use]
pub fn text_content(root: &NodeRef) -> String {
    enum Step<'a> {
        Visit(NodeRef<'a>, bool),
        Close(bool),
    }

    let mut writer = TextWriter::default();
    let mut stack = vec![Step::Visit(*root, false)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Close(block) => {
                if block {
                    writer.block_break();
                }
            }
            Step::Visit(node, in_pre) => {
                if node.is_text() {
                    if in_pre {
                        writer.write_verbatim(&node.text());
                    } else {
                        writer.write_inline(&node.text());
                    }
                    continue;
                }
                if !node.is_element() {
                    continue;
                }

                let tag = dom::node_tag(&node);
                if tag == "br" {
                    writer.line_break();
                    continue;
                }
                if CELL_TAGS.contains(&tag.as_str()) {
                    writer.write_inline(" ");
                }

                let block = BLOCK_TAGS.contains(&tag.as_str());
                if block {
                    writer.block_break();
                }
                stack.push(Step::Close(block));

                let in_pre = in_pre || tag == "pre";
                for child in node.children().into_iter().rev() {
                    stack.push(Step::Visit(child, in_pre));
                }
            }
        }
    }

    writer.finish()
}

/// Accumulates text with pending line and block breaks.
#[derive(Default)]
struct TextWriter {
    out: String,
    /// Newlines owed before the next content: 0, 1 or 2.
    pending: usize,
}

impl TextWriter {
    fn line_break(&mut self) {
        self.pending = self.pending.max(1);
    }

    fn block_break(&mut self) {
        self.pending = 2;
    }

    fn write_inline(&mut self, text: &str) {
        let collapsed = dom::collapse_inner_whitespace(text);
        let at_line_start = self.pending > 0 || self.out.is_empty() || self.out.ends_with('\n');
        let piece = if at_line_start {
            collapsed.trim_start()
        } else if self.out.ends_with(' ') {
            collapsed.trim_start_matches(' ')
        } else {
            collapsed.as_str()
        };
        if piece.is_empty() {
            return;
        }
        self.flush();
        self.out.push_str(piece);
    }

    fn write_verbatim(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.flush();
        self.out.push_str(text);
    }

    fn flush(&mut self) {
        if self.pending == 0 {
            return;
        }
        let trimmed = self.out.trim_end_matches([' ', '\t']).len();
        self.out.truncate(trimmed);
        if !self.out.is_empty() {
            let existing = self.out.len() - self.out.trim_end_matches('\n').len();
            for _ in existing..self.pending {
                self.out.push('\n');
            }
        }
        self.pending = 0;
    }

    fn finish(self) -> String {
        self.out.trim().to_string()
    }
}

/// First long-enough paragraph, else the text cut at a word boundary.
#[must_use]
pub fn excerpt(root: &NodeRef, text: &str, options: &Options) -> Option<String> {
    let paragraph = Selection::from(*root)
        .select("p")
        .nodes()
        .iter()
        .map(dom::normalized_text)
        .find(|p| !p.is_empty() && p.chars().count() >= options.min_excerpt_paragraph);
    if paragraph.is_some() {
        return paragraph;
    }

    let excerpt = truncate_at_word(&dom::collapse_whitespace(text), options.excerpt_length);
    (!excerpt.is_empty()).then_some(excerpt)
}

/// Cut `text` to at most `max_chars` characters without splitting a word.
///
/// A single word longer than the limit is cut at the limit.
#[must_use]
pub fn truncate_at_word(text: &str, max_chars: usize) -> String {
    let Some((cut, next)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let head = &text[..cut];
    if next.is_whitespace() {
        return head.trim_end().to_string();
    }
    match head.rfind(char::is_whitespace) {
        Some(boundary) => head[..boundary].trim_end().to_string(),
        None => head.to_string(),
    }
}
