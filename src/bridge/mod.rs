//! Host bridge: the single delivery primitive.
//!
//! The hosting shell exposes one callable reachable from the page's global
//! scope. It takes the serialized message text, returns nothing meaningful,
//! and may be missing or failing. Both look the same from the page and
//! both are swallowed by the emitter.
//!
//! # Implementations
//!
//! | Type | Behavior |
//! |------|----------|
//! | [`FnBridge`] | Adapts the host's callable (any closure) |
//! | [`NullBridge`] | No host present; every invoke fails |
//! | [`ProbedBridge`] | Probes availability once, caches the verdict |
//! | [`RecordingBridge`] | Captures payloads; test double |

// ============================================================================
// Submodules
// ============================================================================

/// Capability-probing bridge wrapper.
pub mod probed;

/// Recording bridge for tests.
pub mod recording;

// ============================================================================
// Re-exports
// ============================================================================

pub use probed::ProbedBridge;
pub use recording::RecordingBridge;

// ============================================================================
// Imports
// ============================================================================

use crate::error::{Error, Result};

// ============================================================================
// HostBridge
// ============================================================================

/// The host-provided invocation boundary.
///
/// # Contract
///
/// One synchronous call per message, with the fully serialized text. The
/// call completes or fails before the triggering handler returns; there is
/// no acknowledgment, no timeout and nothing to cancel. Implementations
/// report failure through [`Result`]; they never panic.
pub trait HostBridge: Send + Sync {
    /// Delivers one serialized event message to the host.
    fn invoke(&self, payload: &str) -> Result<()>;

    /// Reports whether a host is reachable behind this bridge.
    ///
    /// Capability-checking wrappers consult this to reach a verdict without
    /// putting a message on the wire. The default assumes a host is present
    /// and lets [`invoke`](Self::invoke) find out otherwise.
    fn is_available(&self) -> bool {
        true
    }
}

// ============================================================================
// FnBridge
// ============================================================================

/// A bridge backed by an arbitrary host callable.
///
/// This is the adapter an embedding shell uses to plug its own invoke
/// function in.
///
/// # Example
///
/// ```
/// use webview_event_bridge::{FnBridge, HostBridge};
///
/// let bridge = FnBridge::new(|payload: &str| {
///     println!("host received: {payload}");
///     Ok(())
/// });
///
/// bridge.invoke(r#"{"id":"btn1","value":"Clicked"}"#).unwrap();
/// ```
pub struct FnBridge<F> {
    call: F,
}

impl<F> FnBridge<F>
where
    F: Fn(&str) -> Result<()> + Send + Sync,
{
    /// Wraps a host callable.
    #[inline]
    #[must_use]
    pub fn new(call: F) -> Self {
        Self { call }
    }
}

impl<F> HostBridge for FnBridge<F>
where
    F: Fn(&str) -> Result<()> + Send + Sync,
{
    #[inline]
    fn invoke(&self, payload: &str) -> Result<()> {
        (self.call)(payload)
    }
}

// ============================================================================
// NullBridge
// ============================================================================

/// The "no host present" bridge.
///
/// Every invoke reports [`Error::BridgeUnavailable`]. This is what a page
/// previewed in a plain browser effectively talks to, and it is the
/// default bridge of a freshly built [`Emitter`](crate::Emitter).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBridge;

impl HostBridge for NullBridge {
    #[inline]
    fn invoke(&self, _payload: &str) -> Result<()> {
        Err(Error::BridgeUnavailable)
    }

    #[inline]
    fn is_available(&self) -> bool {
        false
    }
}

// ============================================================================
// Tests
// ============================================================================
