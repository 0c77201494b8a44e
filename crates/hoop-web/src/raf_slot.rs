//! Shared slot for a self-rescheduling animation-frame callback.
//!
//! The callback keeps a clone of the slot so it can request the next frame,
//! which makes slot and callback own each other. [`CallbackSlot::release`]
//! is the only way out of that cycle.

use std::cell::RefCell;
use std::rc::Rc;

pub struct CallbackSlot<C> {
    inner: Rc<RefCell<Option<C>>>,
}

impl<C> Clone for CallbackSlot<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C> Default for CallbackSlot<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> CallbackSlot<C> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(None)),
        }
    }

    pub fn install(&self, callback: C) {
        *self.inner.borrow_mut() = Some(callback);
    }

    /// Run `f` against the installed callback, if any.
    pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> Option<R> {
        self.inner.borrow().as_ref().map(f)
    }

    /// Take the callback out of the slot. The caller decides when to drop
    /// it; a callback must not be dropped while it is still running.
    pub fn release(&self) -> Option<C> {
        self.inner.borrow_mut().take()
    }

    pub fn is_installed(&self) -> bool {
        self.inner.borrow().is_some()
    }
}
