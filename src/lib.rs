//! Snapsheet - a draggable bottom sheet that rests at discrete snap states.
//!
//! The crate is split into a headless controller and an optional GPUI shell:
//!
//! - `input` - gesture tracking and pointer/keyboard event handling
//! - `snap` - release resolution (fling-aware nearest snap)
//! - `controller` - the snap state machine, controlled-prop reconciliation,
//!   imperative handle and introspection
//! - `surface` - the render node the controller writes offsets to
//! - `presentation` - headless frame and accessibility attributes
//! - `replay` - scripted event replay used by `snapsheet-replay`
//! - `render` - GPUI presentation shell (feature `gpui`)

pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod input;
pub mod presentation;
pub mod replay;
pub mod snap;
pub mod surface;
pub mod types;

#[cfg(feature = "gpui")]
pub mod render;

pub use config::{SheetConfig, SheetOptions};
pub use controller::{SheetController, SheetHandle, SheetSnapshot};
pub use error::{SheetError, SheetResult};
pub use geometry::SnapOffsets;
pub use snap::SnapResolver;
pub use surface::{NullSurface, SheetSurface};
pub use types::{DragZone, PointerEvent, SheetKey, SnapState, Transition, TransitionReason};
