//! Input validation.
//!
//! Checks performed before any tree work: non-empty HTML, and the shape of
//! loosely typed JSON requests (`{ html, url? }` objects and arrays of them).

use serde_json::Value;

use crate::error::{Error, Result};
use crate::result::BatchItem;

/// Reject empty or whitespace-only HTML.
pub fn validate_html(html: &str) -> Result<()> {
    if html.trim().is_empty() {
        return Err(Error::InvalidInput("html must not be empty".to_string()));
    }
    Ok(())
}

/// Read a `{ html, url? }` request object.
pub fn request_from_value(value: &Value) -> Result<BatchItem> {
    let html = value
        .get("html")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::InvalidInput("html must be a string".to_string()))?;

    let url = optional_url(value)
        .ok_or_else(|| Error::InvalidInput("url must be a string when provided".to_string()))?;

    Ok(BatchItem::new(html, url))
}

/// Read an array of request objects.
///
/// A non-array value fails the whole call; a malformed item yields an error
/// in its own slot.
pub fn batch_from_value(value: &Value) -> Result<Vec<Result<BatchItem>>> {
    let items = value.as_array().ok_or_else(|| {
        Error::InvalidInput("extract_many expects an array of { html, url? }".to_string())
    })?;

    Ok(items
        .iter()
        .enumerate()
        .map(|(i, item)| batch_item(i, item))
        .collect())
}

fn batch_item(i: usize, item: &Value) -> Result<BatchItem> {
    if !item.is_object() {
        return Err(Error::InvalidInput(format!("items[{i}] must be an object")));
    }

    let html = item
        .get("html")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::InvalidInput(format!("items[{i}].html must be a string")))?;

    let url = optional_url(item).ok_or_else(|| {
        Error::InvalidInput(format!("items[{i}].url must be a string when provided"))
    })?;

    Ok(BatchItem::new(html, url))
}

/// `Some(None)` when `url` is absent or null, `None` when it is not a string.
fn optional_url(value: &Value) -> Option<Option<&str>> {
    match value.get("url") {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(url)) => Some(Some(url.as_str())),
        Some(_) => None,
    }
}
