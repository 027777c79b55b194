//! Sheet configuration and construction options.
//!
//! `SheetConfig` is plain data loaded from JSON (every field optional, with
//! defaults from `constants`). `SheetOptions` is the embedding surface: the
//! initial state and the state-change observer.

use crate::constants::{
    DEFAULT_COLLAPSED_PEEK, DEFAULT_FLING_VELOCITY, DEFAULT_FULL_TOP_INSET, DEFAULT_HALF_FRACTION,
    DEFAULT_MAX_SAMPLES, DEFAULT_RUBBER_BAND_COEFFICIENT, DEFAULT_SNAP_ANIMATION_MS,
    DEFAULT_VELOCITY_WINDOW_MS,
};
use crate::error::{SheetError, SheetResult};
use crate::types::SnapState;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// What happens when a drag would push the sheet past full or collapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// The live offset stops exactly at the edge
    #[default]
    Clamp,
    /// The live offset overshoots with increasing resistance.
    /// Decisions still use the clamped displacement.
    RubberBand,
}

/// Tunable controller parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub initial_state: SnapState,
    /// px/s
    pub fling_velocity: f32,
    pub velocity_window_ms: u64,
    pub max_samples: usize,
    pub edge_policy: EdgePolicy,
    pub rubber_band_coefficient: f32,
    pub full_top_inset: f32,
    pub half_fraction: f32,
    pub collapsed_peek: f32,
    pub snap_animation_ms: u64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            initial_state: SnapState::Half,
            fling_velocity: DEFAULT_FLING_VELOCITY,
            velocity_window_ms: DEFAULT_VELOCITY_WINDOW_MS,
            max_samples: DEFAULT_MAX_SAMPLES,
            edge_policy: EdgePolicy::Clamp,
            rubber_band_coefficient: DEFAULT_RUBBER_BAND_COEFFICIENT,
            full_top_inset: DEFAULT_FULL_TOP_INSET,
            half_fraction: DEFAULT_HALF_FRACTION,
            collapsed_peek: DEFAULT_COLLAPSED_PEEK,
            snap_animation_ms: DEFAULT_SNAP_ANIMATION_MS,
        }
    }
}

impl SheetConfig {
    /// Parse and validate a config from a JSON string
    pub fn from_json_str(json: &str) -> SheetResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> SheetResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        debug!(path = %path.display(), "loaded sheet config");
        Ok(config)
    }

    /// Reject values that would make the gesture math or offsets meaningless
    pub fn validate(&self) -> SheetResult<()> {
        if !self.fling_velocity.is_finite() || self.fling_velocity <= 0.0 {
            return Err(invalid("fling_velocity must be a positive number"));
        }
        if self.velocity_window_ms == 0 {
            return Err(invalid("velocity_window_ms must be at least 1"));
        }
        if self.max_samples < 2 {
            return Err(invalid("max_samples must be at least 2"));
        }
        if !self.rubber_band_coefficient.is_finite()
            || !(0.0..=1.0).contains(&self.rubber_band_coefficient)
        {
            return Err(invalid("rubber_band_coefficient must be within 0.0..=1.0"));
        }
        if !self.full_top_inset.is_finite() || self.full_top_inset < 0.0 {
            return Err(invalid("full_top_inset must be non-negative"));
        }
        if !self.half_fraction.is_finite() || self.half_fraction <= 0.0 || self.half_fraction >= 1.0 {
            return Err(invalid("half_fraction must be strictly between 0 and 1"));
        }
        if !self.collapsed_peek.is_finite() || self.collapsed_peek < 0.0 {
            return Err(invalid("collapsed_peek must be non-negative"));
        }
        Ok(())
    }

    pub fn velocity_window(&self) -> Duration {
        Duration::from_millis(self.velocity_window_ms)
    }

    pub fn snap_animation(&self) -> Duration {
        Duration::from_millis(self.snap_animation_ms)
    }
}

fn invalid(msg: &str) -> SheetError {
    SheetError::InvalidConfig(msg.to_string())
}

// ============================================================================
// Construction Options
// ============================================================================

/// Observer invoked once per committed transition
pub type StateCallback = Box<dyn FnMut(SnapState)>;

/// Options supplied when the widget mounts.
///
/// Layered over a `SheetConfig`: an unset `initial_state` falls back to the
/// config's.
pub struct SheetOptions {
    pub initial_state: Option<SnapState>,
    pub on_state_change: Option<StateCallback>,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            initial_state: None,
            on_state_change: None,
        }
    }
}

impl fmt::Debug for SheetOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetOptions")
            .field("initial_state", &self.initial_state)
            .field("on_state_change", &self.on_state_change.is_some())
            .finish()
    }
}

impl SheetOptions {
    /// Options that override the config's initial state
    pub fn new(initial_state: SnapState) -> Self {
        Self {
            initial_state: Some(initial_state),
            on_state_change: None,
        }
    }

    /// Options seeded from a config's initial state
    pub fn from_config(config: &SheetConfig) -> Self {
        Self::new(config.initial_state)
    }

    /// Initial state after layering over `config`
    pub fn resolve_initial_state(&self, config: &SheetConfig) -> SnapState {
        self.initial_state.unwrap_or(config.initial_state)
    }

    pub fn on_state_change(mut self, callback: impl FnMut(SnapState) + 'static) -> Self {
        self.on_state_change = Some(Box::new(callback));
        self
    }
}
