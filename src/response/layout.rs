//! Response layout and envelope extraction

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

/// Field nesting of a paged response: root entity, profile, item collection
///
/// A page is read as `data.<root>[0].<profile>[0].<collection>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseLayout {
    /// Top-level list field (e.g. `clients`)
    pub root: String,
    /// Nested profile list field (e.g. `clientProfiles`)
    pub profile: String,
    /// Paginated item collection field (e.g. `engagements`)
    pub collection: String,
}

impl Default for ResponseLayout {
    fn default() -> Self {
        Self {
            root: "clients".to_string(),
            profile: "clientProfiles".to_string(),
            collection: "engagements".to_string(),
        }
    }
}

/// Ancestor-entity fields that wrap the item collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Root entity fields, without the profile list
    pub entity: JsonObject,
    /// First profile's fields, without the item collection
    pub profile: Option<JsonObject>,
}

/// The envelope and raw collection node of one page
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedPage<'a> {
    /// Envelope read from this page
    pub envelope: Envelope,
    /// Collection node, if the page had one
    pub collection: Option<&'a JsonValue>,
}

impl ResponseLayout {
    /// Create a layout
    pub fn new(
        root: impl Into<String>,
        profile: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            profile: profile.into(),
            collection: collection.into(),
        }
    }

    /// Locate the envelope and item collection in a response body
    ///
    /// Returns `Ok(None)` when the root list is missing or empty, i.e. the
    /// query matched no top-level entity.
    pub fn locate<'a>(&self, body: &'a JsonValue) -> Result<Option<LocatedPage<'a>>> {
        let roots = match body.get("data").and_then(|data| data.get(&self.root)) {
            None | Some(JsonValue::Null) => return Ok(None),
            Some(JsonValue::Array(roots)) => roots,
            Some(other) => {
                return Err(layout_error(format!(
                    "'{}' is not a list: {}",
                    self.root,
                    kind_of(other)
                )))
            }
        };

        let Some(first) = roots.first() else {
            return Ok(None);
        };
        let entity = first
            .as_object()
            .ok_or_else(|| layout_error(format!("'{}[0]' is not an object", self.root)))?;

        let profile = match entity.get(&self.profile) {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::Array(profiles)) => match profiles.first() {
                None => None,
                Some(JsonValue::Object(profile)) => Some(profile),
                Some(_) => {
                    return Err(layout_error(format!(
                        "'{}[0]' is not an object",
                        self.profile
                    )))
                }
            },
            Some(other) => {
                return Err(layout_error(format!(
                    "'{}' is not a list: {}",
                    self.profile,
                    kind_of(other)
                )))
            }
        };

        let collection = profile.and_then(|p| p.get(&self.collection));
        let envelope = Envelope {
            entity: without(entity, &self.profile),
            profile: profile.map(|p| without(p, &self.collection)),
        };

        Ok(Some(LocatedPage {
            envelope,
            collection,
        }))
    }

    /// JSON pointer to the item collection of a reassembled response
    pub fn collection_pointer(&self) -> String {
        format!(
            "/data/{}/0/{}/0/{}",
            escape_pointer(&self.root),
            escape_pointer(&self.profile),
            escape_pointer(&self.collection)
        )
    }
}

fn without(object: &JsonObject, key: &str) -> JsonObject {
    object
        .iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

fn escape_pointer(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "list",
        JsonValue::Object(_) => "object",
    }
}

fn layout_error(message: String) -> Error {
    Error::decode("response", message)
}
