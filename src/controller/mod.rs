//! Controller module - the snap state machine and everything attached to it.
//!
//! This module is organized into several submodules:
//! - `state` - the SheetController struct and its callback slots
//! - `lifecycle` - construction, surface attachment, resize, open/close, dispose
//! - `transitions` - committed transitions, backdrop click, imperative snap
//! - `reconcile` - controlled `snap_point` prop and the pending request slot
//! - `handle` - shared imperative handle for the embedding component
//! - `inspect` - read-only introspection snapshot

mod state;
mod lifecycle;
mod transitions;
mod reconcile;
mod handle;
mod inspect;

pub use handle::SheetHandle;
pub use inspect::SheetSnapshot;
pub use reconcile::PendingRequest;
pub use state::{CloseCallback, SheetCallbacks, SheetController, TransitionCallback};
