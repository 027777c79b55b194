//! Imperative handle shared with the embedding component.
//!
//! The widget keeps the controller behind `Rc<RefCell<..>>` so the parent can
//! hold a handle and call `snap_to` from outside the event handlers. A call
//! made from inside one of the controller's own callbacks would re-borrow the
//! controller; it is reported as `SheetError::Busy` instead of panicking.

use super::{SheetController, SheetSnapshot};
use crate::error::{SheetError, SheetResult};
use crate::types::SnapState;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Cloneable, single-threaded handle to a controller
#[derive(Debug, Clone)]
pub struct SheetHandle {
    inner: Rc<RefCell<SheetController>>,
}

impl SheetHandle {
    pub fn new(controller: SheetController) -> Self {
        Self {
            inner: Rc::new(RefCell::new(controller)),
        }
    }

    /// Programmatic transition, under the same rules as any other trigger
    pub fn snap_to(&self, target: SnapState) -> SheetResult<()> {
        self.borrow_mut()?.snap_to(target)
    }

    /// Programmatic transition by name; unknown names are rejected
    pub fn snap_to_named(&self, name: &str) -> SheetResult<()> {
        self.borrow_mut()?.snap_to_named(name)
    }

    /// Committed state
    pub fn state(&self) -> SheetResult<SnapState> {
        Ok(self.borrow()?.state())
    }

    /// Read-only introspection snapshot
    pub fn inspect(&self) -> SheetResult<SheetSnapshot> {
        Ok(self.borrow()?.inspect())
    }

    /// Run `f` with exclusive access to the controller (event dispatch)
    pub fn with<R>(&self, f: impl FnOnce(&mut SheetController) -> R) -> SheetResult<R> {
        Ok(f(&mut *self.borrow_mut()?))
    }

    fn borrow(&self) -> SheetResult<Ref<'_, SheetController>> {
        self.inner.try_borrow().map_err(|_| SheetError::Busy)
    }

    fn borrow_mut(&self) -> SheetResult<RefMut<'_, SheetController>> {
        self.inner.try_borrow_mut().map_err(|_| SheetError::Busy)
    }
}

impl From<SheetController> for SheetHandle {
    fn from(controller: SheetController) -> Self {
        Self::new(controller)
    }
}
