//! Frame-driven surface for the GPUI shell.
//!
//! The controller writes target offsets here; the view samples the eased
//! offset on every render and keeps requesting frames while it moves.

use crate::surface::SheetSurface;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Ease from one offset to another over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetAnimation {
    pub from: f32,
    pub to: f32,
    pub started: Instant,
    pub duration: Duration,
}

impl OffsetAnimation {
    /// A resting offset (no motion)
    pub fn rest(offset: f32) -> Self {
        Self {
            from: offset,
            to: offset,
            started: Instant::now(),
            duration: Duration::ZERO,
        }
    }

    /// Eased offset at `now` (ease-out cubic)
    pub fn value_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = (now.saturating_duration_since(self.started).as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_running(&self, now: Instant) -> bool {
        !self.duration.is_zero() && now.saturating_duration_since(self.started) < self.duration
    }
}

/// Shared offset state between the controller and the view
#[derive(Debug, Clone)]
pub struct ShellSurface {
    animation: Rc<RefCell<OffsetAnimation>>,
}

impl ShellSurface {
    pub fn new(offset: f32) -> Self {
        Self {
            animation: Rc::new(RefCell::new(OffsetAnimation::rest(offset))),
        }
    }

    /// Offset to draw at `now`
    pub fn offset_at(&self, now: Instant) -> f32 {
        self.animation.borrow().value_at(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation.borrow().is_running(now)
    }
}

impl SheetSurface for ShellSurface {
    fn set_offset(&mut self, offset: f32, animation: Option<Duration>) {
        let now = Instant::now();
        let mut current = self.animation.borrow_mut();
        *current = match animation {
            None => OffsetAnimation::rest(offset),
            Some(duration) => OffsetAnimation {
                from: current.value_at(now),
                to: offset,
                started: now,
                duration,
            },
        };
    }

    fn cancel_animation(&mut self) {
        let now = Instant::now();
        let mut current = self.animation.borrow_mut();
        *current = OffsetAnimation::rest(current.value_at(now));
    }

    fn position(&self) -> Option<f32> {
        Some(self.offset_at(Instant::now()))
    }
}
