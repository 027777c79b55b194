//! Keyboard handling on the focused drag handle.
//!
//! Escape walks down like a downward drag and asks the parent to close from
//! collapsed. Enter/Space walk up, with full stepping back to half.

use crate::controller::SheetController;
use crate::types::{SheetKey, SnapState, TransitionReason};
use tracing::debug;

impl SheetController {
    /// Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: SheetKey) -> bool {
        if !self.accepts_events("key") || !self.open {
            return false;
        }
        if self.interaction.is_dragging() {
            return false;
        }

        let target = match (key, self.state) {
            (SheetKey::Escape, SnapState::Collapsed) => {
                debug!("escape on collapsed sheet: requesting close");
                self.callbacks.notify_close();
                return true;
            }
            (SheetKey::Escape, state) => state.step_down(),
            (SheetKey::Enter | SheetKey::Space, SnapState::Full) => SnapState::Half,
            (SheetKey::Enter | SheetKey::Space, state) => state.step_up(),
        };

        self.commit(target, TransitionReason::Keyboard);
        true
    }

    /// [`SheetController::handle_key`] for a raw key name; unknown keys are not consumed
    pub fn handle_key_name(&mut self, name: &str) -> bool {
        SheetKey::from_key_name(name).is_some_and(|key| self.handle_key(key))
    }
}
