//! Pointer down handling - drag start.

use crate::controller::SheetController;
use crate::input::DragSession;
use crate::types::{DragZone, PointerEvent};
use tracing::{debug, trace};

impl SheetController {
    /// Start a drag if the pointer landed somewhere draggable.
    ///
    /// Returns true if a drag session started. Ignored when the sheet is
    /// closed, when another pointer already owns a drag, and for content
    /// presses while the content is scrolled away from the top.
    pub fn handle_pointer_down(&mut self, event: &PointerEvent, zone: DragZone) -> bool {
        if !self.accepts_events("pointer_down") || !self.open {
            return false;
        }

        if self.interaction.is_dragging() {
            trace!(pointer = event.pointer_id, "pointer down ignored: drag already in flight");
            return false;
        }

        if !zone.allows_drag() {
            trace!(?zone, "pointer down ignored: content is scrolled");
            return false;
        }

        // Grabbing the sheet stops any settle animation where it is, and the
        // drag continues from there.
        self.surface.cancel_animation();
        let start_offset = self
            .surface
            .position()
            .filter(|p| p.is_finite())
            .unwrap_or_else(|| self.offsets.offset_of(self.state));

        let session = DragSession::begin(event, zone, self.state, start_offset, &self.offsets, &self.config);
        debug!(
            pointer = event.pointer_id,
            ?zone,
            start = %self.state,
            start_offset = session.start_offset,
            y = event.y,
            "drag started"
        );
        self.interaction.start(session);
        true
    }
}
