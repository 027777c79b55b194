//! Sheet-wide constants.
//!
//! Centralizes thresholds and layout values so the gesture tracker, resolver
//! and config defaults agree on them.

// ============================================================================
// Gesture & Fling
// ============================================================================

/// Release velocity (px/s) above which position is ignored and the sheet
/// steps one state in the direction of travel
pub const DEFAULT_FLING_VELOCITY: f32 = 300.0;

/// Samples older than this (relative to the newest) are evicted
pub const DEFAULT_VELOCITY_WINDOW_MS: u64 = 100;

/// Upper bound on retained samples; high-rate input is subsampled past this
pub const DEFAULT_MAX_SAMPLES: usize = 32;

/// Smallest sample span used for a velocity estimate, in seconds.
/// Anything shorter yields zero velocity.
pub const MIN_VELOCITY_DT_SECS: f32 = 0.001;

/// Resistance applied to overshoot when the edge policy is rubber band
pub const DEFAULT_RUBBER_BAND_COEFFICIENT: f32 = 0.55;

// ============================================================================
// Layout
// ============================================================================

/// Space kept above a fully expanded sheet, in pixels
pub const DEFAULT_FULL_TOP_INSET: f32 = 48.0;

/// Fraction of the container height the half state occupies
pub const DEFAULT_HALF_FRACTION: f32 = 0.5;

/// Height of the sheet left visible when collapsed, in pixels
pub const DEFAULT_COLLAPSED_PEEK: f32 = 96.0;

/// Height of the drag handle strip, in pixels
pub const HANDLE_HEIGHT: f32 = 28.0;

/// Width of the drag handle grip bar, in pixels
pub const HANDLE_GRIP_WIDTH: f32 = 40.0;

// ============================================================================
// Animation
// ============================================================================

/// Duration of the settle animation after a committed transition
pub const DEFAULT_SNAP_ANIMATION_MS: u64 = 300;

/// Backdrop opacity while the sheet is full
pub const BACKDROP_OPACITY: f32 = 0.4;
