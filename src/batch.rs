//! Batch extraction.
//!
//! Items run in parallel on the rayon pool and are reported in input
//! order. Every item is isolated: an error or a panic while extracting one
//! document becomes that item's [`ErrorRecord`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::extract::extract_document;
use crate::input;
use crate::options::Options;
use crate::result::{ArticleResult, BatchItem, BatchOutcome, ErrorRecord};

/// Extract every item, one outcome per item in input order.
#[must_use]
pub fn extract_many(items: &[BatchItem]) -> Vec<BatchOutcome> {
    tracing::debug!(items = items.len(), "batch started");

    items
        .par_iter()
        .enumerate()
        .map(|(index, item)| run_item(index, item))
        .collect()
}

/// Extract a JSON array of `{ html, url? }` objects.
///
/// Fails as a whole only when `value` is not an array.
pub fn extract_many_values(value: &Value) -> Result<Vec<BatchOutcome>> {
    let requests = input::batch_from_value(value)?;
    tracing::debug!(items = requests.len(), "batch started");

    Ok(requests
        .par_iter()
        .enumerate()
        .map(|(index, request)| match request {
            Ok(item) => run_item(index, item),
            Err(err) => Err(record(index, err)),
        })
        .collect())
}

fn run_item(index: usize, item: &BatchItem) -> BatchOutcome {
    let options = Options::with_url(item.url.as_deref());
    isolate(index, || extract_document(&item.html, &options))
}

/// Run one extraction, turning errors and panics into the item's record.
fn isolate<F>(index: usize, extraction: F) -> BatchOutcome
where
    F: FnOnce() -> Result<ArticleResult>,
{
    match panic::catch_unwind(AssertUnwindSafe(extraction)) {
        Ok(Ok(article)) => Ok(article),
        Ok(Err(err)) => Err(record(index, &err)),
        Err(payload) => {
            let fault = Error::InternalFault(panic_message(payload.as_ref()));
            tracing::debug!(index, error = %fault, "batch item panicked");
            Err(record(index, &fault))
        }
    }
}

fn record(index: usize, err: &Error) -> ErrorRecord {
    ErrorRecord {
        index,
        message: err.to_string(),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "extraction panicked".to_string())
}
