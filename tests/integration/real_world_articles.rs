//! Integration tests for real-world article extraction
//!
//! Tests extraction from realistic pages: a news site, a blog with
//! widgets and comments, and an old table-based layout.

use rs_readable::{extract, extract_with_options, Options};

/// Test fixture path helper
fn fixture(name: &str) -> String {
    let path = format!(
        "{}/tests/integration/fixtures/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    );
    std::fs::read_to_string(path).expect("Failed to read fixture")
}

#[test]
fn test_news_article_content() {
    let html = fixture("news_article.html");
    let result = extract(&html, Some("https://ledger.example/local/park-expansion?ref=home"))
        .expect("extraction should succeed");

    assert!(!result.degraded, "article should clear the threshold");
    let text = result.text_content.expect("article text");

    assert!(text.contains("The city council voted seven to two"));
    assert!(text.contains("Cleaning up the site"));
    assert!(text.contains("council member David Chen"));
    assert!(text.contains("maintenance costs"));

    for boilerplate in [
        "We use cookies",
        "Most Popular",
        "Subscribe to our newsletter",
        "Copyright 2024",
        "Great news for the east side",
        "Share on Twitter",
        "trackPageView",
        "Politics",
    ] {
        assert!(!text.contains(boilerplate), "boilerplate kept: {boilerplate}");
    }
}

#[test]
fn test_news_article_metadata() {
    let html = fixture("news_article.html");
    let result = extract(&html, Some("https://ledger.example/local/park-expansion?ref=home"))
        .expect("extraction should succeed");

    assert_eq!(result.title.as_deref(), Some("City Council Approves Riverside Park Expansion"));
    assert_eq!(result.byline.as_deref(), Some("Maria Lopez"));
    assert_eq!(result.site_name.as_deref(), Some("The Daily Ledger"));
    assert_eq!(result.url.as_deref(), Some("https://ledger.example/local/park-expansion"));
    assert_eq!(result.image.as_deref(), Some("https://ledger.example/media/park-lead.jpg"));
    assert_eq!(result.favicon.as_deref(), Some("https://ledger.example/static/favicon.png"));
    assert_eq!(result.published_time.as_deref(), Some("2024-06-12T14:30:00Z"));
    assert_eq!(result.modified_time.as_deref(), Some("2024-06-13T09:00:00Z"));
    assert_eq!(result.lang.as_deref(), Some("en-US"));
    assert_eq!(result.dir.as_deref(), Some("ltr"));

    let excerpt = result.excerpt.expect("excerpt");
    assert!(excerpt.starts_with("The city council voted"));
}

#[test]
fn test_news_article_markup() {
    let html = fixture("news_article.html");
    let result = extract(&html, Some("https://ledger.example/local/park-expansion"))
        .expect("extraction should succeed");
    let content = result.content.expect("article markup");

    assert!(content.starts_with(r#"<div id="readability-page-1" class="page">"#));
    assert!(content.contains(r#"src="https://ledger.example/media/park-lead.jpg""#));
    assert!(content.contains("<h2>"));
    assert!(!content.contains("<script"));
    assert!(!content.contains("<form"));
    assert!(!content.contains("class=\"story\""));
}

#[test]
fn test_blog_post() {
    let html = fixture("blog_post.html");
    let result = extract(&html, Some("https://rusty-notes.example/2024/05/03/ownership/"))
        .expect("extraction should succeed");

    assert!(!result.degraded);
    assert_eq!(result.title.as_deref(), Some("Understanding Ownership in Practice"));
    assert_eq!(result.byline.as_deref(), Some("Sam Rivera"));
    assert_eq!(
        result.url.as_deref(),
        Some("https://rusty-notes.example/posts/ownership-field-guide/")
    );
    assert_eq!(result.site_name.as_deref(), Some("rusty-notes.example"));

    let text = result.text_content.expect("article text");
    assert!(text.contains("every value has one owner"));
    assert!(text.contains("which are consumed."));
    assert!(text.contains("Click to expand the notes below"));
    assert!(!text.contains("Understanding Ownership in Practice"));
    assert!(!text.contains("Archives"));
    assert!(!text.contains("Could you cover lifetimes"));
    assert!(!text.contains("Proudly powered"));
    assert!(!text.contains("May 3, 2024"));
}

#[test]
fn test_blog_post_code_and_images() {
    let html = fixture("blog_post.html");
    let result = extract(&html, Some("https://rusty-notes.example/2024/05/03/ownership/"))
        .expect("extraction should succeed");

    let text = result.text_content.expect("article text");
    assert!(text.contains("let first = &names[0];\nprintln!(\"{first}\");"));

    let content = result.content.expect("article markup");
    assert!(!content.contains("javascript:"));
    assert!(!content.contains("data:image/gif"));
    assert!(content.contains(
        r#"src="https://rusty-notes.example/2024/05/03/ownership/images/borrow-diagram.png""#
    ));
}

#[test]
fn test_table_layout_page() {
    let html = fixture("layout_table.html");
    let result = extract(&html, None).expect("extraction should succeed");

    assert!(!result.degraded);
    assert_eq!(
        result.title.as_deref(),
        Some("Notes on Building a Backyard Weather Station")
    );

    let text = result.text_content.expect("article text");
    assert!(text.contains("I started this project"));
    assert!(text.contains("The hardest part turned out to be the rain gauge"));
    assert!(!text.contains("Projects"));
    assert!(!text.contains("Last updated"));

    let content = result.content.expect("article markup");
    assert!(!content.contains("bgcolor"));
    assert!(!content.contains("valign"));
}

#[test]
fn test_news_article_relaxed_options() {
    let html = fixture("news_article.html");
    let options = Options {
        strip_unlikely: false,
        keep_classes: true,
        ..Options::default()
    };

    let result = extract_with_options(&html, &options).expect("extraction should succeed");
    let text = result.text_content.expect("article text");
    assert!(text.contains("The city council voted seven to two"));
    assert!(!text.contains("Subscribe to our newsletter"));
}
