//! Ordered merge of page items

use super::layout::Envelope;
use crate::pagination::Page;
use crate::types::JsonValue;

/// Items gathered so far plus the envelope of the first page
///
/// Items keep page order, then in-page order. Nothing is deduplicated or
/// reordered, and the envelope never changes once set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultAccumulator {
    items: Vec<JsonValue>,
    envelope: Option<Envelope>,
}

impl ResultAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page's items; take its envelope if none is set yet
    pub fn absorb(&mut self, page: Page) {
        if self.envelope.is_none() {
            self.envelope = page.envelope;
        }
        self.items.extend(page.items);
    }

    /// Items gathered so far
    pub fn items(&self) -> &[JsonValue] {
        &self.items
    }

    /// Envelope captured from the first page
    pub fn envelope(&self) -> Option<&Envelope> {
        self.envelope.as_ref()
    }

    /// Number of items gathered so far
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items were gathered
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Split into items and envelope
    pub fn into_parts(self) -> (Vec<JsonValue>, Option<Envelope>) {
        (self.items, self.envelope)
    }
}
