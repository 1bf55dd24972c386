//! Trailing coalescer for change notifications.
//!
//! Any number of notifications before the next tick collapse into a single
//! pending recompute.

use std::cell::Cell;
use std::rc::Rc;

/// Shared "a recompute is pending" flag.
///
/// Clones share the same flag, so listeners handed to a host can schedule
/// work that the owning watcher flushes later.
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    inner: Rc<Pending>,
}

#[derive(Debug, Default)]
struct Pending {
    scheduled: Cell<bool>,
    coalesced: Cell<u32>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a recompute.
    ///
    /// Returns true if this call made the scheduler pending, false if the
    /// request was merged into one already waiting.
    pub fn schedule(&self) -> bool {
        let count = self.inner.coalesced.get().saturating_add(1);
        self.inner.coalesced.set(count);
        !self.inner.scheduled.replace(true)
    }

    pub fn is_pending(&self) -> bool {
        self.inner.scheduled.get()
    }

    /// Consume the pending request.
    ///
    /// Returns how many notifications were merged into it, or `None` if
    /// nothing was pending.
    pub fn take(&self) -> Option<u32> {
        if self.inner.scheduled.replace(false) {
            Some(self.inner.coalesced.replace(0))
        } else {
            None
        }
    }

    /// Drop a pending request without running it.
    ///
    /// Returns true if something was cancelled.
    pub fn cancel(&self) -> bool {
        self.inner.coalesced.set(0);
        self.inner.scheduled.replace(false)
    }
}
