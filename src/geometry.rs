//! Snap offset geometry.
//!
//! Offsets are the distance from the container top to the sheet top, so a
//! larger offset means a lower sheet: `full < half < collapsed`.

use crate::config::SheetConfig;
use crate::error::{SheetError, SheetResult};
use crate::types::SnapState;

/// Resting offsets for the three snap states within one container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapOffsets {
    pub full: f32,
    pub half: f32,
    pub collapsed: f32,
}

impl SnapOffsets {
    /// Build offsets directly, rejecting any ordering other than `full < half < collapsed`
    pub fn new(full: f32, half: f32, collapsed: f32) -> SheetResult<Self> {
        if !(full.is_finite() && half.is_finite() && collapsed.is_finite()) {
            return Err(SheetError::InvalidGeometry {
                height: collapsed,
                reason: "offsets must be finite",
            });
        }
        if !(full < half && half < collapsed) {
            return Err(SheetError::InvalidGeometry {
                height: collapsed,
                reason: "offsets must satisfy full < half < collapsed",
            });
        }
        Ok(Self { full, half, collapsed })
    }

    /// Derive offsets for a container of the given height
    pub fn from_container(height: f32, config: &SheetConfig) -> SheetResult<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(SheetError::InvalidGeometry {
                height,
                reason: "container height must be positive",
            });
        }

        let full = config.full_top_inset;
        let half = height * (1.0 - config.half_fraction);
        let collapsed = height - config.collapsed_peek;

        Self::new(full, half, collapsed).map_err(|_| SheetError::InvalidGeometry {
            height,
            reason: "container too small for the configured inset, half fraction and peek",
        })
    }

    /// Resting offset of a snap state
    #[inline]
    pub fn offset_of(&self, state: SnapState) -> f32 {
        match state {
            SnapState::Full => self.full,
            SnapState::Half => self.half,
            SnapState::Collapsed => self.collapsed,
        }
    }

    /// Total travel between the full and collapsed offsets
    #[inline]
    pub fn travel(&self) -> f32 {
        self.collapsed - self.full
    }

    /// Hard-clamp an offset into the travel range
    #[inline]
    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(self.full, self.collapsed)
    }

    /// Allowed displacement range for a drag starting at `start_offset`.
    ///
    /// Returns `(min, max)`; `min <= 0 <= max` whenever the start offset lies
    /// within the travel range.
    pub fn displacement_bounds(&self, start_offset: f32) -> (f32, f32) {
        (self.full - start_offset, self.collapsed - start_offset)
    }

    /// How far the sheet is expanded, 0.0 at collapsed and 1.0 at full
    pub fn expansion(&self, offset: f32) -> f32 {
        let travel = self.travel();
        if travel <= f32::EPSILON {
            return 0.0;
        }
        ((self.collapsed - self.clamp(offset)) / travel).clamp(0.0, 1.0)
    }
}
