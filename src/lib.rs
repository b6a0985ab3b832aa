//! Event serialization and delivery between an embedded web view page and
//! the shell that hosts it.
//!
//! # Architecture
//!
//! The page side of a hosted web view reports UI interactions to the shell
//! through a single host-provided callable. This crate covers the whole of
//! that contract:
//!
//! - **Emit side**: [`Emitter`] translates interactions (click, value
//!   change, creation, page load, tree child click, tree node expand) into
//!   the two-field JSON envelope and hands it to the bridge.
//! - **Decode side**: [`Event::from_json`] parses a received envelope back
//!   into the typed [`Event`] for the host to act on.
//!
//! Key design principles:
//!
//! - One synchronous bridge call per message, in call order, fire-and-forget
//! - Best-effort delivery: a missing or failing host is swallowed, so the
//!   page keeps working when previewed outside its shell
//! - No hand-rolled JSON: serde handles escaping end to end
//!
//! # Quick Start
//!
//! ```
//! use webview_event_bridge::{Emitter, Event, FnBridge, Result};
//!
//! // Adapt the shell's invoke callable.
//! let bridge = FnBridge::new(|payload: &str| -> Result<()> {
//!     let event = Event::from_json(payload)?;
//!     println!("shell received {:?} from {}", event.value, event.id);
//!     Ok(())
//! });
//!
//! let emitter = Emitter::builder().bridge(bridge).build();
//!
//! emitter.notify_page_loaded();
//! emitter.notify_clicked("btn1");
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`bridge`] | The host invocation boundary and its implementations |
//! | [`emitter`] | The notify operations |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`page`] | Element value lookup for value-changed events |
//! | [`protocol`] | The event wire format |

// ============================================================================
// Modules
// ============================================================================

/// The host invocation boundary.
///
/// - [`HostBridge`] - the delivery primitive
/// - [`FnBridge`], [`NullBridge`], [`ProbedBridge`], [`RecordingBridge`] -
///   implementations
pub mod bridge;

/// The notify operations.
///
/// Use [`Emitter::builder()`] to configure an emitter.
pub mod emitter;

/// Error types and result aliases.
///
/// Fallible bridge and decode operations return [`Result<T>`] which uses
/// [`Error`]; the notify operations themselves never fail.
pub mod error;

/// Page-side element state.
///
/// [`ValueSource`] is the seam for "current value of an input-like
/// element"; [`PageState`] is the bundled implementation.
pub mod page;

/// Event wire format.
///
/// The two-field JSON envelope and its tagged payload union.
pub mod protocol;

// ============================================================================
// Re-exports
// ============================================================================

// Bridge types
pub use bridge::{FnBridge, HostBridge, NullBridge, ProbedBridge, RecordingBridge};

// Emitter types
pub use emitter::{Emitter, EmitterBuilder};

// Error types
pub use error::{Error, Result};

// Page types
pub use page::{PageState, ValueSource, generate_id};

// Protocol types
pub use protocol::{Event, EventValue, PAGE_ID};
