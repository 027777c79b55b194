//! Committed transitions and the triggers that bypass the drag path.
//!
//! ## Transition Table
//!
//! ```text
//! drag release        any  -> resolver output
//! backdrop click      Full -> Half
//! Escape (handle)     Full -> Half, Half -> Collapsed, Collapsed -> on_close
//! Enter/Space         Collapsed -> Half, Half -> Full, Full -> Half
//! snap_point prop     any  -> prop          (deferred while dragging)
//! snap_to             any  -> requested     (deferred while dragging)
//! ```

use super::SheetController;
use crate::controller::reconcile::PendingRequest;
use crate::error::{SheetError, SheetResult};
use crate::types::{SnapState, Transition, TransitionReason};
use tracing::{debug, warn};

impl SheetController {
    /// Move to `target` and notify observers once.
    ///
    /// The surface always animates to the target's offset, so a release that
    /// resolves to the state it started from still settles visually. Returns
    /// true only if the committed state changed.
    pub(crate) fn commit(&mut self, target: SnapState, reason: TransitionReason) -> bool {
        let offset = self.offsets.offset_of(target);
        self.surface.set_offset(offset, Some(self.config.snap_animation()));

        if target == self.state {
            debug!(state = %target, ?reason, "sheet settled without state change");
            return false;
        }

        let from = self.state;
        self.state = target;
        self.last_transition = Some(reason);
        debug!(%from, to = %target, ?reason, "sheet transition");

        self.callbacks.notify_transition(Transition { from, to: target, reason });
        true
    }

    /// Request a programmatic transition.
    ///
    /// While a drag is live the request is held and applied after the drag
    /// ends, the same way a controlled prop change is.
    pub fn snap_to(&mut self, target: SnapState) -> SheetResult<()> {
        if !self.accepts_events("snap_to") {
            return Err(SheetError::Disposed);
        }

        if self.interaction.is_dragging() {
            debug!(%target, "snap_to deferred until drag ends");
            self.pending = Some(PendingRequest {
                target,
                reason: TransitionReason::Imperative,
            });
            return Ok(());
        }

        self.commit(target, TransitionReason::Imperative);
        Ok(())
    }

    /// [`SheetController::snap_to`] by name. Unknown names are rejected and
    /// leave the controller untouched.
    pub fn snap_to_named(&mut self, name: &str) -> SheetResult<()> {
        let target = name.parse::<SnapState>().inspect_err(|err| {
            warn!(%err, "rejected snap_to request");
        })?;
        self.snap_to(target)
    }

    /// Click on the backdrop. Only a full sheet has a backdrop; it drops to half.
    pub fn handle_backdrop_click(&mut self) -> bool {
        if !self.accepts_events("backdrop_click") || !self.open {
            return false;
        }
        if self.interaction.is_dragging() || self.state != SnapState::Full {
            return false;
        }
        self.commit(SnapState::Half, TransitionReason::Backdrop)
    }

    /// Whether the backdrop is shown and clickable
    pub fn backdrop_visible(&self) -> bool {
        self.open && !self.disposed && self.state == SnapState::Full
    }
}
