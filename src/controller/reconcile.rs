//! Controlled-prop reconciliation.
//!
//! The parent may drive the sheet through a `snap_point` prop while the user
//! drives it by dragging. Precedence:
//! - no drag in flight: a changed prop transitions immediately, through the
//!   same path as every other trigger (observers fire)
//! - drag in flight: the prop is held in a single pending slot (last write
//!   wins) and applied once the drag's own transition has committed, if it
//!   still differs from the resulting state
//!
//! Only a *change* of the prop is a request; re-rendering with the same value
//! after the user moved the sheet does not pull it back. Clearing the prop
//! withdraws a prop value still queued behind a drag, but not a queued
//! `snap_to`.

use super::SheetController;
use crate::types::{SnapState, TransitionReason};
use tracing::debug;

/// A transition held back by a live drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRequest {
    pub target: SnapState,
    pub reason: TransitionReason,
}

impl SheetController {
    /// Feed the current value of the controlled `snap_point` prop.
    ///
    /// Returns true if this call committed a transition.
    pub fn set_snap_point(&mut self, snap_point: Option<SnapState>) -> bool {
        if !self.accepts_events("snap_point") {
            return false;
        }

        let changed = snap_point != self.controlled;
        self.controlled = snap_point;

        if !changed {
            return false;
        }
        let Some(target) = snap_point else {
            // Uncontrolled again: a prop value queued behind a drag no longer applies
            if self.pending.is_some_and(|p| p.reason == TransitionReason::ControlledProp) {
                debug!("snap_point cleared: dropping queued prop request");
                self.pending = None;
            }
            return false;
        };

        if self.interaction.is_dragging() {
            debug!(%target, "snap_point change queued behind live drag");
            self.pending = Some(PendingRequest {
                target,
                reason: TransitionReason::ControlledProp,
            });
            return false;
        }

        if target == self.state {
            return false;
        }
        self.commit(target, TransitionReason::ControlledProp)
    }

    /// Request currently held back by a drag, if any
    pub fn pending_request(&self) -> Option<PendingRequest> {
        self.pending
    }

    /// Apply the held request after a drag has ended (committed or cancelled)
    pub(crate) fn flush_pending(&mut self) -> bool {
        let Some(request) = self.pending.take() else {
            return false;
        };

        if request.target == self.state {
            debug!(target = %request.target, "pending request already satisfied");
            return false;
        }

        debug!(target = %request.target, reason = ?request.reason, "applying pending request");
        self.commit(request.target, request.reason)
    }
}
