//! Recording bridge for tests.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{Error, Result};

use super::HostBridge;

// ============================================================================
// RecordingBridge
// ============================================================================

/// A bridge that captures every delivered payload.
///
/// Clones share the same buffer, so a test can hand one clone to an
/// [`Emitter`](crate::Emitter) and inspect deliveries through another.
/// Flip [`set_failing`](Self::set_failing) to simulate a missing or
/// rejecting host.
///
/// # Example
///
/// ```
/// use webview_event_bridge::{Emitter, RecordingBridge};
///
/// let bridge = RecordingBridge::new();
/// let emitter = Emitter::builder().bridge(bridge.clone()).build();
///
/// emitter.notify_clicked("btn1");
/// assert_eq!(bridge.messages(), vec![r#"{"id":"btn1","value":"Clicked"}"#]);
/// ```
#[derive(Default, Clone)]
pub struct RecordingBridge {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    messages: Vec<String>,
    failing: bool,
}

impl RecordingBridge {
    /// Creates an empty, succeeding recording bridge.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent invokes fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().failing = failing;
    }

    /// Returns a copy of all payloads delivered so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.inner.lock().messages.clone()
    }

    /// Drains and returns all payloads delivered so far.
    #[must_use]
    pub fn take_messages(&self) -> Vec<String> {
        std::mem::take(&mut self.inner.lock().messages)
    }

    /// Returns the number of payloads delivered so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().messages.len()
    }

    /// Returns `true` if nothing has been delivered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().messages.is_empty()
    }
}

impl HostBridge for RecordingBridge {
    fn invoke(&self, payload: &str) -> Result<()> {
        let mut inner = self.inner.lock();
        if inner.failing {
            return Err(Error::bridge_failed("recording bridge set to fail"));
        }
        inner.messages.push(payload.to_string());
        Ok(())
    }

    fn is_available(&self) -> bool {
        !self.inner.lock().failing
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_delivery_order() {
        let bridge = RecordingBridge::new();
        bridge.invoke("first").expect("deliver");
        bridge.invoke("second").expect("deliver");

        assert_eq!(bridge.messages(), vec!["first", "second"]);
        assert_eq!(bridge.len(), 2);
    }

    #[test]
    fn test_clones_share_the_buffer() {
        let bridge = RecordingBridge::new();
        let clone = bridge.clone();

        clone.invoke("via clone").expect("deliver");
        assert_eq!(bridge.messages(), vec!["via clone"]);
    }

    #[test]
    fn test_failing_records_nothing() {
        let bridge = RecordingBridge::new();
        bridge.set_failing(true);

        let err = bridge.invoke("lost").unwrap_err();
        assert!(err.is_delivery_error());
        assert!(bridge.is_empty());
    }

    #[test]
    fn test_availability_follows_failing_flag() {
        let bridge = RecordingBridge::new();
        assert!(bridge.is_available());

        bridge.set_failing(true);
        assert!(!bridge.is_available());

        bridge.set_failing(false);
        assert!(bridge.is_available());
    }

    #[test]
    fn test_take_messages_drains() {
        let bridge = RecordingBridge::new();
        bridge.invoke("one").expect("deliver");

        assert_eq!(bridge.take_messages(), vec!["one"]);
        assert!(bridge.is_empty());
    }
}
