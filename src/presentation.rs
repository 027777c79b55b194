//! Headless presentation model.
//!
//! What a shell needs to draw the sheet: offset, backdrop, and the
//! accessibility attributes of the dialog root and the drag handle. A closed
//! sheet has no frame at all, it is absent rather than collapsed.

use crate::constants::BACKDROP_OPACITY;
use crate::controller::SheetController;
use crate::types::SnapState;
use serde::Serialize;

/// Attributes of the drag handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandleAccessibility {
    pub role: &'static str,
    pub aria_expanded: bool,
    pub tab_index: i32,
}

/// Attributes of the sheet root.
///
/// The sheet is a non-blocking, dismissible overlay, so `aria_modal` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DialogAccessibility {
    pub role: &'static str,
    pub aria_modal: bool,
}

impl DialogAccessibility {
    pub const SHEET: Self = Self {
        role: "dialog",
        aria_modal: false,
    };
}

impl HandleAccessibility {
    pub fn for_state(state: SnapState) -> Self {
        Self {
            role: "button",
            aria_expanded: state.is_expanded(),
            tab_index: 0,
        }
    }
}

/// Everything needed to draw one frame of the sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetFrame {
    pub state: SnapState,
    /// Sheet top, in px below the container top
    pub offset: f32,
    /// 0.0 at collapsed, 1.0 at full
    pub expansion: f32,
    pub dragging: bool,
    /// Backdrop opacity; `None` when no backdrop is rendered
    pub backdrop_opacity: Option<f32>,
    pub dialog: DialogAccessibility,
    pub handle: HandleAccessibility,
}

impl SheetController {
    /// Frame for the current state, or `None` when the sheet is closed
    pub fn frame(&self) -> Option<SheetFrame> {
        if !self.is_open() || self.is_disposed() {
            return None;
        }

        let offset = self.current_offset();
        Some(SheetFrame {
            state: self.state(),
            offset,
            expansion: self.offsets().expansion(offset),
            dragging: self.is_dragging(),
            backdrop_opacity: self.backdrop_visible().then_some(BACKDROP_OPACITY),
            dialog: DialogAccessibility::SHEET,
            handle: HandleAccessibility::for_state(self.state()),
        })
    }
}
