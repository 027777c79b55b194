//! The render node a controller positions.
//!
//! A controller exclusively owns its surface for as long as it is mounted:
//! it is the only writer of the sheet offset. Animation itself belongs to
//! the rendering layer; the controller only says where to go and whether to
//! animate there.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Receiver of sheet offsets
pub trait SheetSurface {
    /// Move the sheet top to `offset` px below the container top.
    /// `None` applies immediately (live drag); `Some` animates over the duration.
    fn set_offset(&mut self, offset: f32, animation: Option<Duration>);

    /// Stop any running settle animation at its current position
    fn cancel_animation(&mut self) {}

    /// Where the sheet is drawn right now, if the surface tracks it.
    /// A drag that interrupts a settle animation starts from here.
    fn position(&self) -> Option<f32> {
        None
    }
}

/// Surface for headless use; discards every request
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl SheetSurface for NullSurface {
    fn set_offset(&mut self, _offset: f32, _animation: Option<Duration>) {}
}

/// A request received by a [`RecordingSurface`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceOp {
    Offset { offset: f32, animated: bool },
    CancelAnimation,
}

/// Surface that records requests into a shared log.
///
/// Clones share the same log, so a caller can keep one clone and hand the
/// other to the controller.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Rc<RefCell<Vec<SurfaceOp>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every request so far
    pub fn ops(&self) -> Vec<SurfaceOp> {
        self.ops.borrow().clone()
    }

    /// Most recent offset request, if any
    pub fn last_offset(&self) -> Option<(f32, bool)> {
        self.ops.borrow().iter().rev().find_map(|op| match op {
            SurfaceOp::Offset { offset, animated } => Some((*offset, *animated)),
            SurfaceOp::CancelAnimation => None,
        })
    }

    pub fn clear(&self) {
        self.ops.borrow_mut().clear();
    }
}

impl SheetSurface for RecordingSurface {
    fn set_offset(&mut self, offset: f32, animation: Option<Duration>) {
        self.ops.borrow_mut().push(SurfaceOp::Offset {
            offset,
            animated: animation.is_some(),
        });
    }

    fn cancel_animation(&mut self) {
        self.ops.borrow_mut().push(SurfaceOp::CancelAnimation);
    }
}
