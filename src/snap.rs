//! Release resolution - where the sheet settles when a drag ends.
//!
//! ## Rule
//!
//! ```text
//! |velocity| > fling threshold  -> one step from the drag's start state,
//!                                  in the direction of travel (saturating)
//! otherwise                     -> nearest snap offset to the release offset,
//!                                  ties toward Full
//! ```
//!
//! Positive velocity is downward (toward `Collapsed`).

use crate::constants::DEFAULT_FLING_VELOCITY;
use crate::geometry::SnapOffsets;
use crate::types::SnapState;

/// Maps a released gesture onto one of the three snap states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResolver {
    fling_velocity: f32,
}

impl Default for SnapResolver {
    fn default() -> Self {
        Self::new(DEFAULT_FLING_VELOCITY)
    }
}

impl SnapResolver {
    pub fn new(fling_velocity: f32) -> Self {
        Self {
            fling_velocity: fling_velocity.abs(),
        }
    }

    pub fn fling_velocity(&self) -> f32 {
        self.fling_velocity
    }

    /// True if a release at this velocity ignores position
    pub fn is_fling(&self, velocity: f32) -> bool {
        !velocity.is_nan() && velocity.abs() > self.fling_velocity
    }

    /// Resolve a release.
    ///
    /// `origin` is the committed state when the drag began, `offset` the
    /// sheet offset at release and `velocity` the release velocity in px/s.
    /// Total over all inputs: NaN velocity counts as zero and a NaN offset
    /// settles back on `origin`.
    pub fn resolve(&self, origin: SnapState, offset: f32, velocity: f32, offsets: &SnapOffsets) -> SnapState {
        if self.is_fling(velocity) {
            return if velocity > 0.0 {
                origin.step_down()
            } else {
                origin.step_up()
            };
        }

        if offset.is_nan() {
            return origin;
        }

        Self::nearest(offset, offsets)
    }

    /// Snap state whose offset is closest to `offset`; exact ties go toward `Full`.
    pub fn nearest(offset: f32, offsets: &SnapOffsets) -> SnapState {
        let offset = offsets.clamp(offset);
        // Iterate from Full downward so a strict `<` keeps the higher state on ties.
        let mut best = SnapState::Full;
        let mut best_distance = (offsets.full - offset).abs();
        for state in [SnapState::Half, SnapState::Collapsed] {
            let distance = (offsets.offset_of(state) - offset).abs();
            if distance < best_distance {
                best = state;
                best_distance = distance;
            }
        }
        best
    }
}
