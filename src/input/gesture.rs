//! Gesture tracker - turns a raw vertical drag into displacement and velocity.
//!
//! ## Sample window
//!
//! Samples are kept in arrival order. On every update:
//! - samples older than `window` relative to the newest are evicted
//!   (the newest is always kept)
//! - past `max_samples` the second-oldest sample is dropped, so the oldest
//!   in-window sample and the newest survive subsampling
//! - a sample older than the newest one is discarded
//!
//! Velocity is `(newest.y - oldest.y) / (newest.t - oldest.t)` in px/s, or
//! zero when the span is shorter than `MIN_VELOCITY_DT_SECS`.
//!
//! ## Edges
//!
//! `displacement()` is always hard-clamped to the travel range of the drag.
//! `visual_displacement()` follows the configured `EdgePolicy` and is what
//! the surface should show while dragging.

use crate::config::{EdgePolicy, SheetConfig};
use crate::constants::MIN_VELOCITY_DT_SECS;
use crate::geometry::SnapOffsets;
use crate::types::GestureSample;
use std::collections::VecDeque;
use std::time::Duration;
use tracing::trace;

/// Final measurements of a released gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureRelease {
    /// Clamped displacement in px (positive is downward)
    pub displacement: f32,
    /// Release velocity in px/s (positive is downward)
    pub velocity: f32,
}

/// Rolling-window tracker for one drag at a time
#[derive(Debug, Clone)]
pub struct GestureTracker {
    window: Duration,
    max_samples: usize,
    edge_policy: EdgePolicy,
    rubber_band_coefficient: f32,

    origin_y: f32,
    origin_t: Duration,
    /// Allowed displacement range `(min, max)` for the current drag
    bounds: (f32, f32),
    /// Full-to-collapsed travel, used to scale rubber-band resistance
    travel: f32,
    samples: VecDeque<GestureSample>,
    displacement: f32,
    visual_displacement: f32,
    active: bool,
}

impl GestureTracker {
    pub fn new(config: &SheetConfig) -> Self {
        Self {
            window: config.velocity_window(),
            max_samples: config.max_samples.max(2),
            edge_policy: config.edge_policy,
            rubber_band_coefficient: config.rubber_band_coefficient,
            origin_y: 0.0,
            origin_t: Duration::ZERO,
            bounds: (0.0, 0.0),
            travel: 0.0,
            samples: VecDeque::with_capacity(config.max_samples.max(2)),
            displacement: 0.0,
            visual_displacement: 0.0,
            active: false,
        }
    }

    /// Start a drag at `origin_y`. `start_offset` is the sheet offset of the
    /// committed state when the drag began.
    pub fn begin(&mut self, origin_y: f32, origin_t: Duration, start_offset: f32, offsets: &SnapOffsets) {
        self.samples.clear();
        self.origin_y = origin_y;
        self.origin_t = origin_t;
        self.bounds = offsets.displacement_bounds(start_offset);
        self.travel = offsets.travel();
        self.displacement = 0.0;
        self.visual_displacement = 0.0;
        self.active = true;
        self.samples.push_back(GestureSample::new(origin_t, origin_y));
    }

    /// Record a pointer position and return the live (clamped) displacement
    pub fn update(&mut self, y: f32, t: Duration) -> f32 {
        if !self.active {
            return 0.0;
        }

        if let Some(last) = self.samples.back() {
            if t < last.t {
                trace!(?t, last = ?last.t, "discarding out-of-order gesture sample");
                return self.displacement;
            }
        }

        self.samples.push_back(GestureSample::new(t, y));
        self.evict(t);

        let raw = y - self.origin_y;
        let (min, max) = self.bounds;
        self.displacement = raw.clamp(min, max);
        self.visual_displacement = match self.edge_policy {
            EdgePolicy::Clamp => self.displacement,
            EdgePolicy::RubberBand => self.rubber_band(raw),
        };

        trace!(y, ?t, displacement = self.displacement, samples = self.samples.len(), "gesture sample");
        self.displacement
    }

    /// Record the release position and return the final measurements.
    ///
    /// The tracker becomes inactive; a release without any prior move yields
    /// zero displacement and zero velocity.
    pub fn end(&mut self, y: f32, t: Duration) -> GestureRelease {
        if !self.active {
            return GestureRelease {
                displacement: 0.0,
                velocity: 0.0,
            };
        }

        self.update(y, t);
        let release = GestureRelease {
            displacement: self.displacement,
            velocity: self.velocity(),
        };
        self.active = false;
        release
    }

    /// Abandon the current drag without producing a release
    pub fn reset(&mut self) {
        self.samples.clear();
        self.displacement = 0.0;
        self.visual_displacement = 0.0;
        self.active = false;
    }

    /// Velocity over the current sample window in px/s
    pub fn velocity(&self) -> f32 {
        let (Some(first), Some(last)) = (self.samples.front(), self.samples.back()) else {
            return 0.0;
        };

        let dt = last.t.saturating_sub(first.t).as_secs_f32();
        if dt < MIN_VELOCITY_DT_SECS {
            return 0.0;
        }

        let velocity = (last.y - first.y) / dt;
        if velocity.is_finite() { velocity } else { 0.0 }
    }

    /// Live displacement, hard-clamped to the drag's travel range
    pub fn displacement(&self) -> f32 {
        self.displacement
    }

    /// Live displacement as it should be drawn (may overshoot under rubber band)
    pub fn visual_displacement(&self) -> f32 {
        self.visual_displacement
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Time since the drag began, as of the newest sample
    pub fn elapsed(&self) -> Duration {
        self.samples
            .back()
            .map(|s| s.t.saturating_sub(self.origin_t))
            .unwrap_or_default()
    }

    fn evict(&mut self, now: Duration) {
        while self.samples.len() > 1 {
            match self.samples.front() {
                Some(front) if now.saturating_sub(front.t) > self.window => {
                    self.samples.pop_front();
                }
                _ => break,
            }
        }

        while self.samples.len() > self.max_samples {
            self.samples.remove(1);
        }
    }

    fn rubber_band(&self, raw: f32) -> f32 {
        let (min, max) = self.bounds;
        let resist = |excess: f32| {
            if self.travel <= f32::EPSILON {
                return 0.0;
            }
            excess * self.rubber_band_coefficient / (1.0 + excess / self.travel)
        };

        if raw > max {
            max + resist(raw - max)
        } else if raw < min {
            min - resist(min - raw)
        } else {
            raw
        }
    }
}
