//! Inventory scan and field coalescing.

use crate::error::LookupError;
use crate::types::{CvmRecord, CvmSummary};
use serde_json::Value;
use tracing::{debug, instrument};

/// Find the first non-terminated CVM matching `name` and project it
/// into a summary.
///
/// The payload is either a bare list of records or an object whose
/// `items` key holds one. Terminated records are skipped before name
/// matching, so a terminated record never matches even by exact name.
#[instrument(skip(payload))]
pub fn find_cvm(payload: &str, name: &str) -> Result<CvmSummary, LookupError> {
    if payload.is_empty() {
        return Err(LookupError::EmptyInput);
    }

    let value: Value = serde_json::from_str(payload)?;

    // Records are deserialized lazily, in order, so entries past the
    // first match are never inspected.
    for raw in into_items(value) {
        let record: CvmRecord = serde_json::from_value(raw)?;

        if record.is_terminated() {
            debug!("Skipping terminated CVM {:?}", record.name);
            continue;
        }

        if record.matches_name(name) {
            debug!("Matched CVM {:?}", record.name);
            return Ok(record.into_summary());
        }
    }

    Err(LookupError::NoMatch(name.to_string()))
}

/// Coerce the parsed payload into a record sequence.
fn into_items(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => items,
            _ => {
                debug!("Payload object has no items list");
                Vec::new()
            }
        },
        _ => {
            debug!("Payload is neither a list nor an object");
            Vec::new()
        }
    }
}
