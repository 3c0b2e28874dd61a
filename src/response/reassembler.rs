//! Rebuilds one logical response from accumulated pages

use super::accumulator::ResultAccumulator;
use super::layout::{Envelope, ResponseLayout};
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::{Serialize, Serializer};
use serde_json::json;

/// A response shaped like a single ungapped page
#[derive(Debug, Clone, PartialEq)]
pub struct ReassembledResponse {
    body: JsonValue,
    pointer: String,
}

impl ReassembledResponse {
    /// The full response body
    pub fn body(&self) -> &JsonValue {
        &self.body
    }

    /// Consume into the response body
    pub fn into_body(self) -> JsonValue {
        self.body
    }

    /// Every item, in fetch order
    pub fn items(&self) -> &[JsonValue] {
        self.body
            .pointer(&self.pointer)
            .and_then(JsonValue::as_array)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Number of items
    pub fn item_count(&self) -> usize {
        self.items().len()
    }
}

impl Serialize for ReassembledResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.body.serialize(serializer)
    }
}

/// Build the final response from an accumulator
///
/// Fails with `EmptyResult` when no page ever supplied an envelope.
pub fn reassemble(
    accumulator: ResultAccumulator,
    layout: &ResponseLayout,
) -> Result<ReassembledResponse> {
    let (items, envelope) = accumulator.into_parts();
    let Envelope { entity, profile } =
        envelope.ok_or_else(|| Error::empty_result(&layout.root))?;

    let mut profile: JsonObject = profile.unwrap_or_default();
    profile.insert(layout.collection.clone(), JsonValue::Array(items));

    let mut entity = entity;
    entity.insert(layout.profile.clone(), json!([profile]));

    let mut data = JsonObject::new();
    data.insert(layout.root.clone(), json!([entity]));

    Ok(ReassembledResponse {
        body: json!({ "data": data }),
        pointer: layout.collection_pointer(),
    })
}
