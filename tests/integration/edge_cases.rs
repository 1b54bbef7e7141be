//! Edge case integration tests
//!
//! Tests for unusual inputs, boundary conditions, and cleanup details.

use rs_readable::{extract, extract_with_options, Error, Options};

fn prose(marker: &str, n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "<p>{marker} paragraph {i} goes on for a while, with a comma here, and another \
                 there, so that it looks like real prose to the scorer.</p>"
            )
        })
        .collect()
}

#[test]
fn test_extract_minimal_html() {
    let html = "<html><body><p>Minimal content.</p></body></html>";
    let result = extract(html, None).expect("extraction should succeed");

    assert!(result.degraded);
    assert_eq!(result.text_content.as_deref(), Some("Minimal content."));
}

#[test]
fn test_extract_no_body() {
    let html = "<html><head><title>No Body</title></head></html>";
    let result = extract(html, None).expect("should handle missing body gracefully");

    assert_eq!(result.title.as_deref(), Some("No Body"));
    assert!(result.content.is_none());
    assert!(result.degraded);
}

#[test]
fn test_entities_decoded_in_text() {
    let html = "<html><body><p>Fish &amp; chips &lt;3 &quot;quoted&quot; caf&eacute;</p></body></html>";
    let result = extract(html, None).expect("extraction should succeed");

    assert_eq!(
        result.text_content.as_deref(),
        Some("Fish & chips <3 \"quoted\" café")
    );
}

#[test]
fn test_sibling_columns_merged() {
    let html = format!(
        r#"<html><body>
            <div class="col">{}</div>
            <div class="col">{}</div>
            <div class="ad-slot"><a href="/ad">Buy now</a></div>
        </body></html>"#,
        prose("First", 4),
        prose("Second", 4)
    );
    let result = extract(&html, None).expect("extraction should succeed");
    let text = result.text_content.expect("article text");

    assert!(text.contains("First paragraph 0"));
    assert!(text.contains("Second paragraph 3"));
    assert!(!text.contains("Buy now"));
}

#[test]
fn test_javascript_links_unwrapped() {
    let html = format!(
        r#"<html><body><article>{}<p>Press <a href="javascript:openMenu()">here</a> to open the menu.</p></article></body></html>"#,
        prose("Body", 5)
    );
    let result = extract(&html, None).expect("extraction should succeed");
    let content = result.content.expect("markup");

    assert!(!content.contains("javascript:"));
    assert!(result
        .text_content
        .expect("text")
        .contains("Press here to open the menu."));
}

#[test]
fn test_fragment_links_not_resolved() {
    let html = format!(
        r##"<html><body><article>{}<p>Jump to <a href="#notes">the notes</a> or read <a href="../intro">the intro</a>.</p></article></body></html>"##,
        prose("Body", 5)
    );
    let result = extract(&html, Some("https://docs.example/guide/part2/")).expect("extraction should succeed");
    let content = result.content.expect("markup");

    assert!(content.contains(r##"href="#notes""##));
    assert!(content.contains(r#"href="https://docs.example/guide/intro""#));
}

#[test]
fn test_video_embeds() {
    let html = format!(
        r#"<html><body><article>{}
            <iframe src="https://www.youtube.com/embed/abc123"></iframe>
            <iframe src="https://ads.example/frame.html"></iframe>
        </article></body></html>"#,
        prose("Body", 5)
    );

    let result = extract(&html, None).expect("extraction should succeed");
    let content = result.content.expect("markup");
    assert!(content.contains("youtube.com/embed/abc123"));
    assert!(!content.contains("ads.example"));

    let options = Options {
        allow_video: false,
        ..Options::default()
    };
    let result = extract_with_options(&html, &options).expect("extraction should succeed");
    assert!(!result.content.expect("markup").contains("<iframe"));
}

#[test]
fn test_data_table_kept() {
    let html = format!(
        r#"<html><body><article>{}
            <table>
              <caption>Rainfall by month</caption>
              <tr><th>Month</th><th>Rain (mm)</th></tr>
              <tr><td>January</td><td>81</td></tr>
              <tr><td>February</td><td>62</td></tr>
            </table>
        </article></body></html>"#,
        prose("Body", 5)
    );
    let result = extract(&html, None).expect("extraction should succeed");
    let text = result.text_content.expect("text");

    assert!(text.contains("Rainfall by month"));
    assert!(text.contains("January 81"));
}

#[test]
fn test_text_list_kept() {
    let html = format!(
        r#"<html><body><article>{}
            <ul><li>Flour, two cups</li><li>Water, one cup</li><li>Salt, a pinch</li></ul>
        </article></body></html>"#,
        prose("Body", 5)
    );
    let result = extract(&html, None).expect("extraction should succeed");
    let text = result.text_content.expect("text");

    assert!(text.contains("Flour, two cups\n\nWater, one cup"));
}

#[test]
fn test_link_farm_removed() {
    let links: String = (0..12)
        .map(|i| format!(r#"<li><a href="/tag/{i}">Tag {i}</a></li>"#))
        .collect();
    let html = format!(
        r#"<html><body><article>{}<div><ul>{links}</ul></div></article></body></html>"#,
        prose("Body", 5)
    );
    let result = extract(&html, None).expect("extraction should succeed");
    let text = result.text_content.expect("text");

    assert!(!text.contains("Tag 7"));
    assert!(text.contains("Body paragraph 4"));
}

#[test]
fn test_empty_wrappers_removed() {
    let html = format!(
        r#"<html><body><article>{}<div><span></span><div>   </div></div></article></body></html>"#,
        prose("Body", 5)
    );
    let result = extract(&html, None).expect("extraction should succeed");
    let content = result.content.expect("markup");

    assert!(!content.contains("<span"));
    assert!(!content.contains("<div></div>"));
}

#[test]
fn test_max_elems_to_parse() {
    let html = format!("<html><body>{}</body></html>", prose("Body", 50));
    let options = Options {
        max_elems_to_parse: 10,
        ..Options::default()
    };

    let err = extract_with_options(&html, &options).expect_err("document is too large");
    assert_eq!(
        err,
        Error::InvalidInput("document exceeds max_elems_to_parse".to_string())
    );

    let unlimited = extract_with_options(&html, &Options::default()).expect("extraction should succeed");
    assert!(!unlimited.degraded);
}

#[test]
fn test_whitespace_only_body() {
    let result = extract("<html><body>   \n\n   </body></html>", None).expect("extraction should succeed");
    assert!(result.degraded);
    assert!(result.content.is_none());
    assert_eq!(result.length, 0);
}

#[test]
fn test_custom_sibling_fraction() {
    let html = format!(
        r#"<html><body><div class="main-col">{}</div><div class="aux">{}</div></body></html>"#,
        prose("Main", 8),
        prose("Aux", 2)
    );

    let strict = Options {
        sibling_score_fraction: 1.0,
        ..Options::default()
    };
    let result = extract_with_options(&html, &strict).expect("extraction should succeed");
    let text = result.text_content.expect("text");
    assert!(text.contains("Main paragraph 7"));
    assert!(!text.contains("Aux paragraph 0"));
}
