//! Capability-probing bridge wrapper.
//!
//! Instead of paying for a failed call on every event when the page runs
//! outside its host, [`ProbedBridge`] checks the host once and caches the
//! verdict. The check happens on the first delivery, or eagerly via
//! [`ProbedBridge::probe`] at page startup. With an absent host, later
//! deliveries skip the underlying call entirely.

// ============================================================================
// Imports
// ============================================================================

use parking_lot::Mutex;
use tracing::debug;

use crate::error::{Error, Result};

use super::HostBridge;

// ============================================================================
// ProbedBridge
// ============================================================================

/// Wraps a bridge with a one-shot availability check.
///
/// The first invoke (or an explicit [`probe`](Self::probe)) decides whether
/// a host is reachable. A host that fails the probe is treated as absent
/// for the rest of the page session; there is no re-probe.
pub struct ProbedBridge<B> {
    inner: B,
    /// `None` until probed, then the cached verdict.
    available: Mutex<Option<bool>>,
}

impl<B: HostBridge> ProbedBridge<B> {
    /// Wraps a bridge, not yet probed.
    #[inline]
    #[must_use]
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            available: Mutex::new(None),
        }
    }

    /// Probes the host now, caching the verdict.
    ///
    /// Asks the wrapped bridge's [`is_available`](HostBridge::is_available)
    /// capability; no message is put on the wire. Returns the verdict.
    pub fn probe(&self) -> bool {
        let mut available = self.available.lock();
        if let Some(verdict) = *available {
            return verdict;
        }

        let verdict = self.inner.is_available();
        debug!(target: "bridge", available = verdict, "probed host bridge");
        *available = Some(verdict);
        verdict
    }

    /// Returns the cached verdict, or `None` if not yet probed.
    #[inline]
    #[must_use]
    pub fn is_available(&self) -> Option<bool> {
        *self.available.lock()
    }
}

impl<B: HostBridge> HostBridge for ProbedBridge<B> {
    fn invoke(&self, payload: &str) -> Result<()> {
        let mut available = self.available.lock();

        match *available {
            Some(true) => self.inner.invoke(payload),
            Some(false) => Err(Error::BridgeUnavailable),
            None => {
                // First delivery doubles as the probe.
                if !self.inner.is_available() {
                    debug!(target: "bridge", available = false, "probed host bridge");
                    *available = Some(false);
                    return Err(Error::BridgeUnavailable);
                }

                let result = self.inner.invoke(payload);
                let verdict = result.is_ok();
                debug!(target: "bridge", available = verdict, "probed host bridge");
                *available = Some(verdict);
                result
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
