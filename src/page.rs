//! Page-side element state.
//!
//! `notify_value_changed` needs "the current string value of the element",
//! which in the browser original came from a DOM lookup. Here the lookup is
//! an explicit seam: [`ValueSource`]. The embedding shell plugs in whatever
//! reflects its page; [`PageState`] is the bundled table-backed
//! implementation.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use uuid::Uuid;

// ============================================================================
// ValueSource
// ============================================================================

/// Read access to the current value of input-like elements.
///
/// Returning `None` means the element is unknown; value-changed delivery is
/// skipped for unknown elements rather than faulting.
pub trait ValueSource: Send + Sync {
    /// Returns the element's current string value, if the element exists.
    fn current_value(&self, id: &str) -> Option<String>;
}

/// A shared source is a source. This lets an embedder keep a handle to the
/// same [`PageState`] it hands the emitter.
impl<T: ValueSource + ?Sized> ValueSource for Arc<T> {
    fn current_value(&self, id: &str) -> Option<String> {
        (**self).current_value(id)
    }
}

// ============================================================================
// PageState
// ============================================================================

/// A table of element ids to their current input values.
///
/// # Example
///
/// ```
/// use webview_event_bridge::{PageState, ValueSource, generate_id};
///
/// let page = PageState::new();
/// page.set_value("input1", "hello");
///
/// assert_eq!(page.current_value("input1"), Some("hello".to_string()));
/// assert_eq!(page.current_value("missing"), None);
///
/// // Generated widgets get fresh ids before registration.
/// let field_id = generate_id();
/// page.set_value(&field_id, "");
/// assert!(page.contains(&field_id));
/// ```
#[derive(Default)]
pub struct PageState {
    values: Mutex<FxHashMap<String, String>>,
}

impl PageState {
    /// Creates an empty page state.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the element's current value, replacing any previous one.
    pub fn set_value(&self, id: impl Into<String>, value: impl Into<String>) {
        self.values.lock().insert(id.into(), value.into());
    }

    /// Forgets the element. Subsequent lookups return `None`.
    pub fn remove(&self, id: &str) {
        self.values.lock().remove(id);
    }

    /// Returns `true` if the element is known.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.values.lock().contains_key(id)
    }
}

impl ValueSource for PageState {
    fn current_value(&self, id: &str) -> Option<String> {
        self.values.lock().get(id).cloned()
    }
}

// ============================================================================
// Id Generation
// ============================================================================

/// Creates a fresh element id for a generated widget.
#[must_use]
pub fn generate_id() -> String {
    format!("id-{id}", id = Uuid::new_v4())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_read_value() {
        let page = PageState::new();
        page.set_value("input1", "hello");

        assert_eq!(page.current_value("input1"), Some("hello".to_string()));
        assert!(page.contains("input1"));
    }

    #[test]
    fn test_unknown_element_is_none() {
        let page = PageState::new();
        assert_eq!(page.current_value("ghost"), None);
        assert!(!page.contains("ghost"));
    }

    #[test]
    fn test_value_is_replaced() {
        let page = PageState::new();
        page.set_value("input1", "a");
        page.set_value("input1", "b");
        assert_eq!(page.current_value("input1"), Some("b".to_string()));
    }

    #[test]
    fn test_remove_forgets_element() {
        let page = PageState::new();
        page.set_value("input1", "a");
        page.remove("input1");
        assert_eq!(page.current_value("input1"), None);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = generate_id();
        let b = generate_id();
        assert!(a.starts_with("id-"));
        assert_ne!(a, b);
    }
}
