//! Embedded JSON payloads.
//!
//! The server serializes each widget's configuration into a dedicated element
//! next to its anchor. Reading never fails: a blank or malformed payload
//! yields the type's empty default, which then drives the usual defaults.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::dom::{Document, NodeId};
use crate::error::Result;

/// Parse payload text, treating blank text as the empty default
pub fn parse_payload<T>(raw: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Read the payload embedded in `node`, falling back to `T::default()`
pub fn read_payload<T>(doc: &Document, node: NodeId) -> T
where
    T: DeserializeOwned + Default,
{
    match parse_payload(&doc.text_content(node)) {
        Ok(value) => value,
        Err(e) => {
            debug!("Malformed payload, using empty default: {}", e);
            T::default()
        }
    }
}
