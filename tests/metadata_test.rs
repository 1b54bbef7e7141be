//! Metadata precedence across meta tags, `<title>`, link relations,
//! JSON-LD and in-article signals.

#![allow(clippy::expect_used)]

use rs_readable::extract;

const BODY: &str = r#"<body><article>
    <h1>Visible Heading Of The Article</h1>
    <p class="byline">By Visible Writer</p>
    <p>The committee met on Tuesday to review the budget, the schedule, and the
       plans for the new library, which has been delayed by two years.</p>
    <p>Members agreed that construction should resume in spring, although some
       warned that costs, already high, could rise again before the opening.</p>
    <p>A final vote is expected next month, after a public hearing, where residents
       will be able to comment on the design and on the proposed opening hours.</p>
</article></body>"#;

fn page(head: &str) -> String {
    format!("<html><head>{head}</head>{BODY}</html>")
}

#[test]
fn test_open_graph_beats_title_element() {
    let html = page(
        r#"<title>Library Plans Delayed Again This Year | Town Gazette</title>
           <meta property="og:title" content="Library plans delayed">
           <meta name="twitter:title" content="Twitter title">"#,
    );
    let result = extract(&html, None).expect("extraction should succeed");
    assert_eq!(result.title.as_deref(), Some("Library plans delayed"));
}

#[test]
fn test_twitter_title_when_no_open_graph() {
    let html = page(r#"<title>Some Title</title><meta name="twitter:title" content="Twitter title">"#);
    let result = extract(&html, None).expect("extraction should succeed");
    assert_eq!(result.title.as_deref(), Some("Twitter title"));
}

#[test]
fn test_short_title_part_keeps_full_title() {
    let html = page("<title>News | Town Gazette</title>");
    let result = extract(&html, None).expect("extraction should succeed");
    assert_eq!(result.title.as_deref(), Some("News | Town Gazette"));
}

#[test]
fn test_article_heading_when_head_has_no_title() {
    let result = extract(&page(""), None).expect("extraction should succeed");
    assert_eq!(result.title.as_deref(), Some("Visible Heading Of The Article"));
}

#[test]
fn test_meta_author_beats_visible_byline() {
    let html = page(r#"<title>Library</title><meta name="author" content="Head Author">"#);
    let result = extract(&html, None).expect("extraction should succeed");

    assert_eq!(result.byline.as_deref(), Some("Head Author"));
    // The byline element is dropped from the article either way.
    assert!(!result.text_content.expect("text").contains("Visible Writer"));
}

#[test]
fn test_author_profile_url_rejected() {
    let html = page(
        r#"<title>Library</title><meta property="article:author" content="https://facebook.com/someone">"#,
    );
    let result = extract(&html, None).expect("extraction should succeed");
    assert_eq!(result.byline.as_deref(), Some("Visible Writer"));
}

#[test]
fn test_json_ld_fallbacks() {
    let html = r#"<html><head>
        <script type="application/ld+json">
        {"@context": "https://schema.org", "@type": "NewsArticle",
          "headline": "Structured headline",
          "author": {"@type": "Person", "name": "Ld Author"},
          "publisher": {"@type": "Organization", "name": "Ld Publisher"},
          "datePublished": "2023-11-02T08:30:00+01:00",
          "dateModified": "2023-11-03",
          "image": "/images/lead.jpg"}
        </script></head>
        <body><div class="story">
          <p>The committee met on Tuesday to review the budget, the schedule, and the
             plans for the new library, which has been delayed by two years.</p>
          <p>Members agreed that construction should resume in spring, although some
             warned that costs, already high, could rise again before the opening.</p>
        </div></body></html>"#;
    let result = extract(html, Some("https://gazette.example/library")).expect("extraction should succeed");

    assert_eq!(result.title.as_deref(), Some("Structured headline"));
    assert_eq!(result.byline.as_deref(), Some("Ld Author"));
    assert_eq!(result.site_name.as_deref(), Some("Ld Publisher"));
    assert_eq!(result.published_time.as_deref(), Some("2023-11-02T08:30:00+01:00"));
    assert_eq!(result.modified_time.as_deref(), Some("2023-11-03"));
    assert_eq!(result.image.as_deref(), Some("https://gazette.example/images/lead.jpg"));
}

#[test]
fn test_meta_tags_beat_json_ld() {
    let html = page(
        r#"<meta property="og:site_name" content="Town Gazette">
           <meta property="article:published_time" content="2024-01-01">
           <script type="application/ld+json">
           {"@type": "Article", "publisher": {"name": "Other"}, "datePublished": "2020-05-05"}
           </script>"#,
    );
    let result = extract(&html, None).expect("extraction should succeed");
    assert_eq!(result.site_name.as_deref(), Some("Town Gazette"));
    assert_eq!(result.published_time.as_deref(), Some("2024-01-01"));
}

#[test]
fn test_invalid_timestamp_ignored() {
    let html = page(r#"<meta property="article:published_time" content="last Tuesday">"#);
    let result = extract(&html, None).expect("extraction should succeed");
    assert!(result.published_time.is_none());
}

#[test]
fn test_canonical_url_and_hostname_site_name() {
    let html = page(r#"<link rel="canonical" href="/library-plans">"#);
    let result = extract(&html, Some("https://www.gazette.example/news?id=4")).expect("extraction should succeed");

    assert_eq!(result.url.as_deref(), Some("https://www.gazette.example/library-plans"));
    assert_eq!(result.site_name.as_deref(), Some("gazette.example"));
}

#[test]
fn test_og_image_resolved() {
    let html = page(r#"<meta property="og:image" content="/cover.png">"#);
    let result = extract(&html, Some("https://gazette.example/a/b")).expect("extraction should succeed");
    assert_eq!(result.image.as_deref(), Some("https://gazette.example/cover.png"));
}

#[test]
fn test_language_and_direction() {
    let html = format!(r#"<html lang="ar"><head></head>{BODY}</html>"#);
    let result = extract(&html, None).expect("extraction should succeed");
    assert_eq!(result.lang.as_deref(), Some("ar"));
    assert_eq!(result.dir.as_deref(), Some("rtl"));

    let html = format!(r#"<html lang="en-GB" dir="RTL"><head></head>{BODY}</html>"#);
    let result = extract(&html, None).expect("extraction should succeed");
    assert_eq!(result.lang.as_deref(), Some("en-GB"));
    assert_eq!(result.dir.as_deref(), Some("rtl"));

    let result = extract(&page(""), None).expect("extraction should succeed");
    assert!(result.lang.is_none());
    assert!(result.dir.is_none());
}
