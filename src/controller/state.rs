//! SheetController struct definition and callback slots.

use crate::config::{SheetConfig, StateCallback};
use crate::controller::reconcile::PendingRequest;
use crate::geometry::SnapOffsets;
use crate::input::InteractionState;
use crate::snap::SnapResolver;
use crate::surface::SheetSurface;
use crate::types::{SnapState, Transition, TransitionReason};
use std::fmt;

/// Observer for "the user asked to close the sheet"
pub type CloseCallback = Box<dyn FnMut()>;

/// Observer that sees the origin and cause of every committed transition
pub type TransitionCallback = Box<dyn FnMut(Transition)>;

/// Observers registered by the embedding component.
#[derive(Default)]
pub struct SheetCallbacks {
    /// Fired once per committed transition
    pub on_state_change: Option<StateCallback>,
    /// Fired after `on_state_change`, for parents mirroring the controlled prop
    pub on_snap_point_change: Option<StateCallback>,
    /// Fired by Escape on a collapsed sheet
    pub on_close: Option<CloseCallback>,
    /// Fired last, with the transition's origin and reason
    pub on_transition: Option<TransitionCallback>,
}

impl SheetCallbacks {
    pub(crate) fn notify_transition(&mut self, transition: Transition) {
        if let Some(cb) = self.on_state_change.as_mut() {
            cb(transition.to);
        }
        if let Some(cb) = self.on_snap_point_change.as_mut() {
            cb(transition.to);
        }
        if let Some(cb) = self.on_transition.as_mut() {
            cb(transition);
        }
    }

    pub(crate) fn notify_close(&mut self) {
        if let Some(cb) = self.on_close.as_mut() {
            cb();
        }
    }

    pub(crate) fn clear(&mut self) {
        self.on_state_change = None;
        self.on_snap_point_change = None;
        self.on_close = None;
        self.on_transition = None;
    }
}

impl fmt::Debug for SheetCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetCallbacks")
            .field("on_state_change", &self.on_state_change.is_some())
            .field("on_snap_point_change", &self.on_snap_point_change.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("on_transition", &self.on_transition.is_some())
            .finish()
    }
}

/// Controller for one mounted bottom sheet.
///
/// Single-threaded: every handler runs to completion inside the event that
/// triggered it.
pub struct SheetController {
    pub(crate) config: SheetConfig,
    pub(crate) resolver: SnapResolver,
    pub(crate) offsets: SnapOffsets,
    pub(crate) container_height: f32,

    /// Committed snap state
    pub(crate) state: SnapState,
    /// When false the sheet is not rendered at all
    pub(crate) open: bool,
    pub(crate) interaction: InteractionState,

    /// Last value of the controlled `snap_point` prop
    pub(crate) controlled: Option<SnapState>,
    /// Request deferred until the live drag ends
    pub(crate) pending: Option<PendingRequest>,
    pub(crate) last_transition: Option<TransitionReason>,

    pub(crate) callbacks: SheetCallbacks,
    pub(crate) surface: Box<dyn SheetSurface>,
    pub(crate) disposed: bool,
}

impl fmt::Debug for SheetController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetController")
            .field("state", &self.state)
            .field("open", &self.open)
            .field("offsets", &self.offsets)
            .field("interaction", &self.interaction)
            .field("controlled", &self.controlled)
            .field("pending", &self.pending)
            .field("callbacks", &self.callbacks)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

impl SheetController {
    /// Committed snap state
    pub fn state(&self) -> SnapState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn offsets(&self) -> &SnapOffsets {
        &self.offsets
    }

    pub fn container_height(&self) -> f32 {
        self.container_height
    }

    /// Last value passed to [`SheetController::set_snap_point`]
    pub fn snap_point(&self) -> Option<SnapState> {
        self.controlled
    }

    /// Offset the sheet is drawn at right now (live drag offset while dragging)
    pub fn current_offset(&self) -> f32 {
        match self.interaction.session() {
            Some(session) => session.visual_offset(),
            None => self.offsets.offset_of(self.state),
        }
    }

    // ------------------------------------------------------------------------
    // Callback registration
    // ------------------------------------------------------------------------

    pub fn set_on_state_change(&mut self, callback: impl FnMut(SnapState) + 'static) {
        self.callbacks.on_state_change = Some(Box::new(callback));
    }

    pub fn set_on_snap_point_change(&mut self, callback: impl FnMut(SnapState) + 'static) {
        self.callbacks.on_snap_point_change = Some(Box::new(callback));
    }

    pub fn set_on_close(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.on_close = Some(Box::new(callback));
    }

    pub fn set_on_transition(&mut self, callback: impl FnMut(Transition) + 'static) {
        self.callbacks.on_transition = Some(Box::new(callback));
    }
}
