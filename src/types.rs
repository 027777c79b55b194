//! Core types for the sheet controller.
//!
//! This module defines the committed snap model (`SnapState`) and the raw
//! inputs the controller consumes: pointer events, keys and drag zones.

use crate::error::SheetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

// ============================================================================
// Snap State
// ============================================================================

/// Resting vertical position of the sheet.
///
/// Ordered from lowest (`Collapsed`) to highest (`Full`). Exactly one state is
/// committed at any time; an in-progress drag is not a state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapState {
    Collapsed,
    #[default]
    Half,
    Full,
}

impl SnapState {
    /// All states, from collapsed to full
    pub const ALL: [SnapState; 3] = [SnapState::Collapsed, SnapState::Half, SnapState::Full];

    /// Next state toward `Full`, saturating at `Full`
    pub fn step_up(self) -> Self {
        match self {
            Self::Collapsed => Self::Half,
            Self::Half | Self::Full => Self::Full,
        }
    }

    /// Next state toward `Collapsed`, saturating at `Collapsed`
    pub fn step_down(self) -> Self {
        match self {
            Self::Full => Self::Half,
            Self::Half | Self::Collapsed => Self::Collapsed,
        }
    }

    /// Lowercase name as used in props and config files
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::Half => "half",
            Self::Full => "full",
        }
    }

    /// True for every state except `Collapsed` (drives `aria-expanded`)
    pub fn is_expanded(self) -> bool {
        self != Self::Collapsed
    }
}

impl fmt::Display for SnapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnapState {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "collapsed" => Ok(Self::Collapsed),
            "half" => Ok(Self::Half),
            "full" => Ok(Self::Full),
            other => Err(SheetError::InvalidSnapState(other.to_string())),
        }
    }
}

// ============================================================================
// Input Types
// ============================================================================

/// Where a pointer-down landed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "zone", rename_all = "snake_case")]
pub enum DragZone {
    /// The drag handle - always draggable
    Handle,
    /// The content root - draggable only while its scroll offset is at the top
    Content {
        /// Current scroll offset of the content region, in pixels
        scroll_top: f32,
    },
}

impl DragZone {
    /// Whether a drag may start in this zone
    pub fn allows_drag(&self) -> bool {
        match self {
            Self::Handle => true,
            Self::Content { scroll_top } => *scroll_top <= 0.0,
        }
    }
}

/// A pointer event in sheet-container coordinates.
///
/// `y` grows downward. `time` is measured from any fixed origin, as long as
/// every event of one gesture uses the same origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub pointer_id: u64,
    pub y: f32,
    #[serde(with = "duration_ms")]
    pub time: Duration,
}

impl PointerEvent {
    pub fn new(pointer_id: u64, y: f32, time: Duration) -> Self {
        Self { pointer_id, y, time }
    }

    /// Convenience constructor with a millisecond timestamp
    pub fn at_ms(pointer_id: u64, y: f32, ms: u64) -> Self {
        Self::new(pointer_id, y, Duration::from_millis(ms))
    }
}

/// Keys the drag handle responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetKey {
    Escape,
    Enter,
    Space,
}

impl SheetKey {
    /// Map a key name from a windowing layer (`"escape"`, `"Escape"`, `" "`, ...)
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "escape" | "Escape" | "Esc" => Some(Self::Escape),
            "enter" | "Enter" => Some(Self::Enter),
            "space" | "Space" | " " | "Spacebar" => Some(Self::Space),
            _ => None,
        }
    }
}

/// What caused a committed transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionReason {
    DragRelease,
    Backdrop,
    Keyboard,
    ControlledProp,
    Imperative,
}

/// One committed transition, as reported to transition observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: SnapState,
    pub to: SnapState,
    pub reason: TransitionReason,
}

// ============================================================================
// Gesture Sample
// ============================================================================

/// A timestamped pointer position captured during an active drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub t: Duration,
    pub y: f32,
}

impl GestureSample {
    pub fn new(t: Duration, y: f32) -> Self {
        Self { t, y }
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
