//! Read-only introspection for debug tooling.
//!
//! Nothing in the controller reads a snapshot back; building one has no side
//! effects.

use super::SheetController;
use crate::types::{SnapState, TransitionReason};
use serde::Serialize;

/// Point-in-time view of a controller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetSnapshot {
    pub state: SnapState,
    pub open: bool,
    pub dragging: bool,
    /// Offset the sheet is drawn at
    pub offset: f32,
    /// Clamped displacement of the live drag (0 when idle)
    pub displacement: f32,
    /// Velocity of the live drag in px/s (0 when idle)
    pub velocity: f32,
    /// Where the live drag would settle if released now
    pub projected_target: Option<SnapState>,
    pub pending: Option<SnapState>,
    pub snap_point: Option<SnapState>,
    pub last_transition: Option<TransitionReason>,
}

impl SheetController {
    pub fn inspect(&self) -> SheetSnapshot {
        let session = self.interaction.session();
        SheetSnapshot {
            state: self.state,
            open: self.open,
            dragging: session.is_some(),
            offset: self.current_offset(),
            displacement: session.map_or(0.0, |s| s.tracker.displacement()),
            velocity: self.velocity(),
            projected_target: self.projected_target(),
            pending: self.pending.map(|p| p.target),
            snap_point: self.controlled,
            last_transition: self.last_transition,
        }
    }

    /// Velocity of the live drag in px/s, 0 when idle
    pub fn velocity(&self) -> f32 {
        self.interaction
            .session()
            .map_or(0.0, |s| s.tracker.velocity())
    }

    /// Resolver output for the live drag if it were released now
    pub fn projected_target(&self) -> Option<SnapState> {
        self.interaction.session().map(|s| {
            self.resolver
                .resolve(s.start_state, s.offset(), s.tracker.velocity(), &self.offsets)
        })
    }
}
