//! Wire format for page-to-host event messages.
//!
//! This module defines the single message format exchanged between the
//! embedded page (emit side) and the hosting shell (decode side).
//!
//! # Protocol Overview
//!
//! | Message Type | Direction | Purpose |
//! |--------------|-----------|---------|
//! | [`Event`] | Page → Host | UI interaction notification |
//!
//! There is nothing else on the wire: no acknowledgment, no reply, no
//! batching, no length prefix. One bridge call carries one UTF-8 JSON
//! message, and the message is discarded after handoff.

// ============================================================================
// Submodules
// ============================================================================

/// Event message types.
pub mod event;

// ============================================================================
// Re-exports
// ============================================================================

pub use event::{Event, EventValue, PAGE_ID};
