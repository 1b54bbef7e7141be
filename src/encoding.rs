//! Byte input decoding.
//!
//! Pages fetched off the wire arrive as bytes in whatever charset the
//! server chose. The charset is taken from a byte-order mark, then from a
//! `<meta>` declaration in the head, and defaults to UTF-8. Input that looks
//! binary is rejected before decoding.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

use crate::error::{Error, Result};

/// Bytes inspected for charset declarations and binary content.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("META_CHARSET regex")
});

/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
#[allow(clippy::expect_used)]
static META_CONTENT_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#,
    )
    .expect("META_CONTENT_TYPE regex")
});

/// Whether the start of the input holds a NUL byte, the mark of binary data.
///
/// UTF-16 input announced by a byte-order mark is textual despite its NULs.
#[must_use]
pub fn looks_binary(bytes: &[u8]) -> bool {
    if Encoding::for_bom(bytes).is_some() {
        return false;
    }
    bytes[..bytes.len().min(SNIFF_LEN)].contains(&0)
}

/// Charset of an HTML byte stream.
///
/// Order: byte-order mark, `<meta charset>`, `<meta http-equiv>` and UTF-8.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LEN)]);

    [&*META_CHARSET, &*META_CONTENT_TYPE]
        .iter()
        .filter_map(|re| re.captures(&head))
        .filter_map(|caps| caps.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().trim().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Malformed sequences become U+FFFD; decoding itself never fails.
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);
    let (decoded, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::trace!(encoding = used.name(), "replaced malformed input sequences");
    }
    decoded.into_owned()
}

/// Decode HTML bytes, rejecting binary input.
pub fn decode_html(bytes: &[u8]) -> Result<String> {
    if looks_binary(bytes) {
        return Err(Error::InvalidInput("html must be textual".to_string()));
    }
    Ok(transcode_to_utf8(bytes))
}
