//! Pointer up / cancel handling - finalize or abandon the drag.

use crate::controller::SheetController;
use crate::types::{PointerEvent, TransitionReason};
use tracing::debug;

impl SheetController {
    /// Release the drag: resolve a target from the final displacement and
    /// velocity, commit it, then apply any request held during the drag.
    ///
    /// Returns true if the event ended the live drag.
    pub fn handle_pointer_up(&mut self, event: &PointerEvent) -> bool {
        if !self.accepts_events("pointer_up") || !self.interaction.owns_pointer(event.pointer_id) {
            return false;
        }
        let Some(mut session) = self.interaction.take_session() else {
            return false;
        };

        let release = session.tracker.end(event.y, event.time);
        let offset = session.start_offset + release.displacement;
        let target = self
            .resolver
            .resolve(session.start_state, offset, release.velocity, &self.offsets);

        debug!(
            pointer = event.pointer_id,
            displacement = release.displacement,
            velocity = release.velocity,
            fling = self.resolver.is_fling(release.velocity),
            %target,
            "drag released"
        );

        self.commit(target, TransitionReason::DragRelease);
        self.flush_pending();
        true
    }

    /// Abandon the drag owned by `pointer_id` (pointer lost).
    ///
    /// The sheet animates back to where the drag started; the committed state
    /// never changed, so no observer fires for the aborted motion.
    pub fn handle_pointer_cancel(&mut self, pointer_id: u64) -> bool {
        if !self.accepts_events("pointer_cancel") || !self.interaction.owns_pointer(pointer_id) {
            return false;
        }
        let Some(session) = self.interaction.take_session() else {
            return false;
        };

        debug!(pointer = pointer_id, start = %session.start_state, "drag cancelled");
        let resting = self.offsets.offset_of(session.start_state);
        self.surface.set_offset(resting, Some(self.config.snap_animation()));
        self.flush_pending();
        true
    }
}
