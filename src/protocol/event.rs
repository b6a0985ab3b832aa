//! Event message types.
//!
//! An event is a notification sent from the embedded page to the hosting
//! shell when a UI interaction occurs. Every event is one JSON object with
//! exactly two fields, `id` then `value`, and no independent lifetime: it
//! is built, serialized and handed to the bridge inside the handler that
//! reacted to the interaction.
//!
//! # Event Shapes
//!
//! | Interaction | `value` |
//! |-------------|---------|
//! | click | `"Clicked"` |
//! | component created | `"Created"` |
//! | page finished loading | `"PageLoaded"` |
//! | input value changed | `{"ValueChanged": "<current value>"}` |
//! | tree child clicked | `{"ChildClicked": "<child id>"}` |
//! | tree node expanded | `{"NodeExpand": "<node id>"}` |

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::Result;

// ============================================================================
// Constants
// ============================================================================

/// The fixed `id` carried by page-level events such as [`EventValue::PageLoaded`].
pub const PAGE_ID: &str = "App";

// ============================================================================
// EventValue
// ============================================================================

/// The payload half of an event message.
///
/// Serde's externally-tagged enum encoding gives the wire split exactly:
/// unit variants serialize to a bare flag string (`"Clicked"`), newtype
/// variants to a single-key object (`{"ValueChanged":"hello"}`). An event
/// value is always exactly one of the six shapes, never both.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum EventValue {
    /// The element was clicked.
    Clicked,

    /// The element was created and is now live in the page.
    Created,

    /// The page finished loading. Carried with id [`PAGE_ID`].
    PageLoaded,

    /// An input-like element's value changed; carries the current value.
    ValueChanged(String),

    /// A child node of the element was clicked; carries the child's id.
    ChildClicked(String),

    /// A node of the element was expanded; carries the node's id.
    NodeExpand(String),
}

impl EventValue {
    /// Returns the variant name, for diagnostics.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Clicked => "Clicked",
            Self::Created => "Created",
            Self::PageLoaded => "PageLoaded",
            Self::ValueChanged(_) => "ValueChanged",
            Self::ChildClicked(_) => "ChildClicked",
            Self::NodeExpand(_) => "NodeExpand",
        }
    }
}

// ============================================================================
// Event
// ============================================================================

/// An event message bound for the hosting shell.
///
/// # Format
///
/// ```json
/// {
///   "id": "element-id",
///   "value": "Clicked"
/// }
/// ```
///
/// Field order is fixed: `id` first, then `value` (serde serializes struct
/// fields in declaration order).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Identifier of the UI element that raised the event.
    pub id: String,

    /// What happened to it.
    pub value: EventValue,
}

impl Event {
    /// Creates an event from an id and a value.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, value: EventValue) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }

    /// Creates a click event for the element.
    #[inline]
    #[must_use]
    pub fn clicked(id: impl Into<String>) -> Self {
        Self::new(id, EventValue::Clicked)
    }

    /// Creates a creation event for the element.
    #[inline]
    #[must_use]
    pub fn created(id: impl Into<String>) -> Self {
        Self::new(id, EventValue::Created)
    }

    /// Creates the page-loaded event, with the fixed id [`PAGE_ID`].
    #[inline]
    #[must_use]
    pub fn page_loaded() -> Self {
        Self::new(PAGE_ID, EventValue::PageLoaded)
    }

    /// Creates a value-changed event carrying the element's current value.
    #[inline]
    #[must_use]
    pub fn value_changed(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(id, EventValue::ValueChanged(value.into()))
    }

    /// Creates a child-clicked event for a node under the element.
    #[inline]
    #[must_use]
    pub fn child_clicked(id: impl Into<String>, child_id: impl Into<String>) -> Self {
        Self::new(id, EventValue::ChildClicked(child_id.into()))
    }

    /// Creates a node-expand event for a node under the element.
    #[inline]
    #[must_use]
    pub fn node_expand(id: impl Into<String>, node_id: impl Into<String>) -> Self {
        Self::new(id, EventValue::NodeExpand(node_id.into()))
    }

    /// Serializes the event to its wire text.
    ///
    /// All string payloads are JSON-escaped by serde_json; there is no
    /// hand-rolled quoting anywhere in the crate.
    #[inline]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses wire text back into an event.
    ///
    /// This is the host's half of the round trip.
    #[inline]
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
