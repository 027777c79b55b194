//! Interaction state machine - whether a drag is in flight and what it holds.
//!
//! The committed snap state lives on the controller; this enum only tracks
//! the transient gesture, so an in-progress drag can never be mistaken for a
//! resting position.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging      (pointer down on handle, or on content at scroll top)
//! Dragging -> Idle      (pointer up - commit, pointer cancel - revert,
//!                        close/dispose - revert without callbacks)
//! ```

use crate::config::SheetConfig;
use crate::geometry::SnapOffsets;
use crate::input::gesture::GestureTracker;
use crate::types::{DragZone, PointerEvent, SnapState};

/// One pointer-down to pointer-up/cancel gesture.
#[derive(Debug, Clone)]
pub struct DragSession {
    /// Pointer that owns this session; other pointers are ignored
    pub pointer_id: u64,
    /// Zone the drag started in
    pub zone: DragZone,
    /// Committed state when the drag started
    pub start_state: SnapState,
    /// Sheet offset under the pointer at drag start. Equals the resting
    /// offset of `start_state` unless a settle animation was interrupted.
    pub start_offset: f32,
    pub tracker: GestureTracker,
}

impl DragSession {
    pub fn begin(
        event: &PointerEvent,
        zone: DragZone,
        start_state: SnapState,
        start_offset: f32,
        offsets: &SnapOffsets,
        config: &SheetConfig,
    ) -> Self {
        let start_offset = offsets.clamp(start_offset);
        let mut tracker = GestureTracker::new(config);
        tracker.begin(event.y, event.time, start_offset, offsets);
        Self {
            pointer_id: event.pointer_id,
            zone,
            start_state,
            start_offset,
            tracker,
        }
    }

    /// Sheet offset as it should currently be drawn
    pub fn visual_offset(&self) -> f32 {
        self.start_offset + self.tracker.visual_displacement()
    }

    /// Sheet offset used for release decisions (always within travel)
    pub fn offset(&self) -> f32 {
        self.start_offset + self.tracker.displacement()
    }
}

/// Unified gesture state for the sheet
#[derive(Debug, Clone, Default)]
pub enum InteractionState {
    /// No pointer is dragging the sheet
    #[default]
    Idle,

    /// A drag is in flight
    Dragging(DragSession),
}

impl InteractionState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a drag is in flight
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Returns true if the drag in flight belongs to `pointer_id`
    pub fn owns_pointer(&self, pointer_id: u64) -> bool {
        matches!(self, Self::Dragging(session) if session.pointer_id == pointer_id)
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Start dragging
    pub fn start(&mut self, session: DragSession) {
        *self = Self::Dragging(session);
    }

    /// End the drag, returning its session and leaving the state Idle
    pub fn take_session(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
