//! # Scroll Lock
//!
//! Reference-counted lock over a [`ScrollTarget`]. Each visible modal holds a
//! [`ScrollLockGuard`]; the target is locked while at least one guard is alive
//! and unlocked when the last one drops. Release happens in `Drop`, so a modal
//! torn down without its hide path still unlocks the page.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::capability::ScrollTarget;

struct LockInner<T: ?Sized> {
    holders: Cell<usize>,
    target: T,
}

/// Shared handle to one scroll target's lock.
#[derive(Clone)]
pub struct ScrollLock {
    inner: Rc<LockInner<dyn ScrollTarget>>,
}

impl ScrollLock {
    pub fn new<T: ScrollTarget + 'static>(target: T) -> Self {
        let inner: Rc<LockInner<dyn ScrollTarget>> = Rc::new(LockInner {
            holders: Cell::new(0),
            target,
        });
        Self { inner }
    }

    /// Take a hold on the lock, locking the target on the first hold.
    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.inner.holders.get();
        self.inner.holders.set(holders + 1);
        if holders == 0 {
            log::debug!("Scroll lock engaged");
            self.inner.target.set_scroll_locked(true);
        }
        ScrollLockGuard {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    pub fn holders(&self) -> usize {
        self.inner.holders.get()
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock").field("holders", &self.holders()).finish()
    }
}

/// One hold on a [`ScrollLock`]; released on drop.
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    inner: Rc<LockInner<dyn ScrollTarget>>,
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard")
            .field("holders", &self.inner.holders.get())
            .finish()
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.inner.holders.get().saturating_sub(1);
        self.inner.holders.set(holders);
        if holders == 0 {
            log::debug!("Scroll lock released");
            self.inner.target.set_scroll_locked(false);
        }
    }
}
