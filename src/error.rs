//! Error types for the event bridge.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! Fallible operations at the bridge and decode layer return [`Result<T>`]
//! which uses [`Error`]:
//!
//! ```ignore
//! use webview_event_bridge::{HostBridge, Result};
//!
//! fn deliver(bridge: &dyn HostBridge, payload: &str) -> Result<()> {
//!     bridge.invoke(payload)?;
//!     Ok(())
//! }
//! ```
//!
//! No `notify_*` operation on [`Emitter`](crate::Emitter) ever surfaces one
//! of these: delivery failure is swallowed at the call site.
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Delivery | [`Error::BridgeUnavailable`], [`Error::BridgeFailed`] |
//! | Decode | [`Error::Json`] |

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// There is exactly one failure domain of consequence: the bridge call may
/// be absent or may fail. Everything else is JSON plumbing.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Delivery Errors
    // ========================================================================
    /// No host bridge is reachable.
    ///
    /// Returned when the page runs outside its intended host, e.g. a plain
    /// browser preview with no shell embedding the view.
    #[error("Host bridge unavailable")]
    BridgeUnavailable,

    /// The bridge call was made but failed.
    ///
    /// The emitter cannot distinguish "host rejected it" from any other
    /// failure mode; the message carries whatever the host reported.
    #[error("Bridge call failed: {message}")]
    BridgeFailed {
        /// Description of the delivery failure.
        message: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// JSON serialization or parse error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a bridge failure error.
    #[inline]
    pub fn bridge_failed(message: impl Into<String>) -> Self {
        Self::BridgeFailed {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a delivery error.
    ///
    /// Delivery errors are the ones an [`Emitter`](crate::Emitter) swallows.
    #[inline]
    #[must_use]
    pub fn is_delivery_error(&self) -> bool {
        matches!(self, Self::BridgeUnavailable | Self::BridgeFailed { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::bridge_failed("host rejected payload");
        assert_eq!(err.to_string(), "Bridge call failed: host rejected payload");
    }

    #[test]
    fn test_unavailable_display() {
        assert_eq!(
            Error::BridgeUnavailable.to_string(),
            "Host bridge unavailable"
        );
    }

    #[test]
    fn test_is_delivery_error() {
        assert!(Error::BridgeUnavailable.is_delivery_error());
        assert!(Error::bridge_failed("x").is_delivery_error());

        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(!err.is_delivery_error());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
