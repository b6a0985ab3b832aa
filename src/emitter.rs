//! The event emitter.
//!
//! Translates the fixed set of UI interactions into [`Event`] messages and
//! delivers them across the host boundary, best-effort.
//!
//! # Contract
//!
//! Every `notify_*` operation is synchronous, side-effect-only and never
//! raises: a missing or failing host degrades the page to a no-op event
//! system. Messages go out in call order, one bridge call each, and are
//! never accumulated or retried.
//!
//! # Example
//!
//! ```
//! use webview_event_bridge::{Emitter, RecordingBridge};
//!
//! let bridge = RecordingBridge::new();
//! let emitter = Emitter::builder().bridge(bridge.clone()).build();
//!
//! emitter.notify_clicked("btn1");
//! emitter.notify_page_loaded();
//!
//! assert_eq!(bridge.messages(), vec![
//!     r#"{"id":"btn1","value":"Clicked"}"#,
//!     r#"{"id":"App","value":"PageLoaded"}"#,
//! ]);
//! ```

// ============================================================================
// Imports
// ============================================================================

use tracing::{debug, trace};

use crate::bridge::{HostBridge, NullBridge};
use crate::page::{PageState, ValueSource};
use crate::protocol::Event;

// ============================================================================
// Emitter
// ============================================================================

/// Emits UI interaction events to the hosting shell.
///
/// Stateless per message: each operation builds one envelope, serializes
/// it and hands it to the bridge in the same call. The only held state is
/// the bridge and the [`ValueSource`] consulted for value-changed events.
pub struct Emitter {
    bridge: Box<dyn HostBridge>,
    values: Box<dyn ValueSource>,
}

impl Emitter {
    /// Starts building an emitter.
    #[inline]
    #[must_use]
    pub fn builder() -> EmitterBuilder {
        EmitterBuilder::new()
    }

    // ========================================================================
    // Notify Operations
    // ========================================================================

    /// Notifies the host that the element was clicked.
    pub fn notify_clicked(&self, id: &str) {
        self.deliver(Event::clicked(id));
    }

    /// Notifies the host that an input-like element's value changed.
    ///
    /// The current value is read from the [`ValueSource`]; when the element
    /// is unknown there, nothing is delivered.
    pub fn notify_value_changed(&self, id: &str) {
        match self.values.current_value(id) {
            Some(value) => self.deliver(Event::value_changed(id, value)),
            None => {
                trace!(target: "emitter", id, "no value for element, skipping");
            }
        }
    }

    /// Notifies the host that the element was created.
    pub fn notify_created(&self, id: &str) {
        self.deliver(Event::created(id));
    }

    /// Notifies the host that the page finished loading.
    pub fn notify_page_loaded(&self) {
        self.deliver(Event::page_loaded());
    }

    /// Notifies the host that a child node of the element was clicked.
    pub fn notify_child_clicked(&self, id: &str, child_id: &str) {
        self.deliver(Event::child_clicked(id, child_id));
    }

    /// Notifies the host that a node of the element was expanded.
    pub fn notify_node_expand(&self, id: &str, node_id: &str) {
        self.deliver(Event::node_expand(id, node_id));
    }

    // ========================================================================
    // Delivery
    // ========================================================================

    /// Serializes and hands one message to the bridge, swallowing failure.
    ///
    /// The emitter cannot tell "host accepted it", "host rejected it" and
    /// "no host present" apart, and does not try: a failed delivery leaves
    /// no trace beyond an opt-in diagnostic event.
    fn deliver(&self, event: Event) {
        let payload = match event.to_json() {
            Ok(payload) => payload,
            Err(err) => {
                trace!(target: "emitter", %err, "failed to serialize event");
                return;
            }
        };

        debug!(target: "emitter", id = %event.id, kind = event.value.kind(), "delivering event");

        if let Err(err) = self.bridge.invoke(&payload) {
            trace!(target: "emitter", %err, "delivery failed, dropping event");
        }
    }
}

// ============================================================================
// EmitterBuilder
// ============================================================================

/// Builder for configuring an [`Emitter`].
///
/// Defaults: [`NullBridge`] (no host) and an empty [`PageState`].
#[derive(Default)]
pub struct EmitterBuilder {
    bridge: Option<Box<dyn HostBridge>>,
    values: Option<Box<dyn ValueSource>>,
}

impl EmitterBuilder {
    /// Creates a builder with no configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the host bridge to deliver through.
    #[inline]
    #[must_use]
    pub fn bridge(mut self, bridge: impl HostBridge + 'static) -> Self {
        self.bridge = Some(Box::new(bridge));
        self
    }

    /// Sets the value source consulted for value-changed events.
    #[inline]
    #[must_use]
    pub fn values(mut self, values: impl ValueSource + 'static) -> Self {
        self.values = Some(Box::new(values));
        self
    }

    /// Builds the emitter.
    #[must_use]
    pub fn build(self) -> Emitter {
        Emitter {
            bridge: self.bridge.unwrap_or_else(|| Box::new(NullBridge)),
            values: self.values.unwrap_or_else(|| Box::new(PageState::new())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crate::bridge::RecordingBridge;

    fn emitter_with(bridge: RecordingBridge, page: Arc<PageState>) -> Emitter {
        Emitter::builder().bridge(bridge).values(page).build()
    }

    #[test]
    fn test_notify_clicked() {
        let bridge = RecordingBridge::new();
        let emitter = Emitter::builder().bridge(bridge.clone()).build();

        emitter.notify_clicked("btn1");
        assert_eq!(bridge.messages(), vec![r#"{"id":"btn1","value":"Clicked"}"#]);
    }

    #[test]
    fn test_notify_value_changed() {
        let bridge = RecordingBridge::new();
        let page = Arc::new(PageState::new());
        page.set_value("input1", "hello");
        let emitter = emitter_with(bridge.clone(), page);

        emitter.notify_value_changed("input1");
        assert_eq!(
            bridge.messages(),
            vec![r#"{"id":"input1","value":{"ValueChanged":"hello"}}"#]
        );
    }

    #[test]
    fn test_notify_value_changed_skips_unknown_element() {
        let bridge = RecordingBridge::new();
        let emitter = Emitter::builder().bridge(bridge.clone()).build();

        emitter.notify_value_changed("missing");
        assert!(bridge.is_empty());
    }

    #[test]
    fn test_notify_created() {
        let bridge = RecordingBridge::new();
        let emitter = Emitter::builder().bridge(bridge.clone()).build();

        emitter.notify_created("panel2");
        assert_eq!(
            bridge.messages(),
            vec![r#"{"id":"panel2","value":"Created"}"#]
        );
    }

    #[test]
    fn test_notify_page_loaded() {
        let bridge = RecordingBridge::new();
        let emitter = Emitter::builder().bridge(bridge.clone()).build();

        emitter.notify_page_loaded();
        assert_eq!(
            bridge.messages(),
            vec![r#"{"id":"App","value":"PageLoaded"}"#]
        );
    }

    #[test]
    fn test_notify_child_clicked() {
        let bridge = RecordingBridge::new();
        let emitter = Emitter::builder().bridge(bridge.clone()).build();

        emitter.notify_child_clicked("tree1", "node3");
        assert_eq!(
            bridge.messages(),
            vec![r#"{"id":"tree1","value":{"ChildClicked":"node3"}}"#]
        );
    }

    #[test]
    fn test_notify_node_expand() {
        let bridge = RecordingBridge::new();
        let emitter = Emitter::builder().bridge(bridge.clone()).build();

        emitter.notify_node_expand("tree1", "node7");
        assert_eq!(
            bridge.messages(),
            vec![r#"{"id":"tree1","value":{"NodeExpand":"node7"}}"#]
        );
    }

    #[test]
    fn test_failing_bridge_is_swallowed() {
        let bridge = RecordingBridge::new();
        bridge.set_failing(true);
        let emitter = Emitter::builder().bridge(bridge.clone()).build();

        // Must return normally and leave nothing behind.
        emitter.notify_clicked("x");
        assert!(bridge.is_empty());

        // No retry once the host recovers: the event is gone.
        bridge.set_failing(false);
        emitter.notify_clicked("y");
        assert_eq!(bridge.messages(), vec![r#"{"id":"y","value":"Clicked"}"#]);
    }

    #[test]
    fn test_default_emitter_has_no_host() {
        // Builder defaults: NullBridge. Nothing raises, nothing is delivered.
        let emitter = Emitter::builder().build();
        emitter.notify_clicked("btn1");
        emitter.notify_page_loaded();
    }

    #[test]
    fn test_same_input_produces_identical_messages() {
        let bridge = RecordingBridge::new();
        let emitter = Emitter::builder().bridge(bridge.clone()).build();

        emitter.notify_child_clicked("tree1", "node3");
        emitter.notify_child_clicked("tree1", "node3");

        let messages = bridge.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], messages[1]);
    }

    #[test]
    fn test_messages_go_out_in_call_order() {
        let bridge = RecordingBridge::new();
        let page = Arc::new(PageState::new());
        page.set_value("input1", "a");
        let emitter = emitter_with(bridge.clone(), page);

        emitter.notify_page_loaded();
        emitter.notify_created("panel2");
        emitter.notify_value_changed("input1");
        emitter.notify_clicked("btn1");

        let messages = bridge.messages();
        assert_eq!(messages.len(), 4);
        assert!(messages[0].contains("PageLoaded"));
        assert!(messages[1].contains("Created"));
        assert!(messages[2].contains("ValueChanged"));
        assert!(messages[3].contains("Clicked"));
    }

    #[test]
    fn test_value_with_quotes_survives() {
        let bridge = RecordingBridge::new();
        let page = Arc::new(PageState::new());
        page.set_value("input1", "say \"hi\"");
        let emitter = emitter_with(bridge.clone(), page);

        emitter.notify_value_changed("input1");

        let messages = bridge.messages();
        let parsed = Event::from_json(&messages[0]).expect("parse");
        assert_eq!(parsed.id, "input1");
    }
}
