//! Pointer and keyboard input handling for the sheet.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InteractionState`) for
//! the transient gesture, separate from the committed `SnapState` held by the
//! controller. Handlers are `impl SheetController` blocks split per event.
//!
//! ## Modules
//!
//! - `gesture` - sample window, displacement and velocity
//! - `state` - interaction state enum and drag sessions
//! - `pointer_down` - drag start (zone gating, pointer ownership)
//! - `drag` - pointer move (live offset updates)
//! - `pointer_up` - release resolution, cancellation
//! - `keyboard` - Escape/Enter/Space on the handle

pub mod gesture;
mod state;
mod pointer_down;
mod drag;
mod pointer_up;
mod keyboard;

pub use gesture::{GestureRelease, GestureTracker};
pub use state::{DragSession, InteractionState};
