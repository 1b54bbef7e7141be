//! URL Utility Functions
//!
//! URL validation, resolution against the page URL, and hostname helpers
//! used by the metadata extractor and the content cleaner.

use url::Url;

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Parse a page URL usable as a resolution base.
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    is_absolute_url(url_str).1
}

/// Whether a reference must be left untouched by URL rewriting.
#[must_use]
pub fn is_special_url(url_str: &str) -> bool {
    let lower = url_str.trim_start().to_ascii_lowercase();
    lower.starts_with("data:")
        || lower.starts_with("javascript:")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with('#')
}

/// Convert a relative or absolute URL to absolute form.
///
/// `data:`, `javascript:`, `mailto:`, `tel:` and same-page `#fragment`
/// references are returned unchanged.
///
/// # Arguments
/// * `url_str` - The URL to resolve (can be relative or absolute)
/// * `base` - The base URL for resolution
///
/// # Returns
/// * The absolute URL string, or the original if resolution fails
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() || is_special_url(url_str) {
        return url_str.to_string();
    }

    if is_absolute_url(url_str).0 {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Resolve a URL when a base is known, otherwise return it trimmed.
#[must_use]
pub fn resolve(url_str: &str, base: Option<&Url>) -> String {
    match base {
        Some(base) => create_absolute_url(url_str, base),
        None => url_str.trim().to_string(),
    }
}

/// Resolve every candidate of a `srcset` attribute, keeping descriptors.
#[must_use]
pub fn resolve_srcset(srcset: &str, base: &Url) -> String {
    srcset
        .split(',')
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .map(|candidate| {
            let mut parts = candidate.splitn(2, char::is_whitespace);
            let url = parts.next().unwrap_or_default();
            let absolute = create_absolute_url(url, base);
            match parts.next().map(str::trim).filter(|d| !d.is_empty()) {
                Some(descriptor) => format!("{absolute} {descriptor}"),
                None => absolute,
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Extract the hostname of an absolute URL, without a leading `www.`.
///
/// # Returns
/// * The hostname, or `None` if the URL is not absolute
#[must_use]
pub fn extract_hostname(url_str: &str) -> Option<String> {
    let url = parse_url(url_str)?;
    let host = url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

/// Whether a string looks like a URL rather than a person's name.
#[must_use]
pub fn looks_like_url(s: &str) -> bool {
    let s = s.trim();
    is_absolute_url(s).0 || s.starts_with("www.") || s.starts_with("//")
}
