//! Pointer move handling - live drag.
//!
//! Moves arrive at pointer rate (often 60-120 per second), so this path only
//! records the sample and pushes one offset to the surface.

use crate::controller::SheetController;
use crate::types::PointerEvent;

impl SheetController {
    /// Track a move of the dragging pointer and update the live offset.
    ///
    /// Returns true if the event belonged to the live drag.
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) -> bool {
        if !self.accepts_events("pointer_move") || !self.interaction.owns_pointer(event.pointer_id) {
            return false;
        }

        let Some(session) = self.interaction.session_mut() else {
            return false;
        };
        session.tracker.update(event.y, event.time);
        let offset = session.visual_offset();

        self.surface.set_offset(offset, None);
        true
    }
}
