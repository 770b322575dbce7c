#![forbid(unsafe_code)]

//! Single-slot pending-frame handle.
//!
//! The backup reset pass needs "at most one outstanding deferred callback,
//! always for the latest navigation". [`BackupSlot`] is an arena of size
//! one, not a queue: arming it unconditionally issues a best-effort cancel
//! for the previously stored handle (whether or not that callback already
//! fired) before requesting a new frame. Dropping the slot cancels
//! whatever is still stored.

use std::cell::Cell;
use std::rc::Rc;

use scrollpin_core::{FrameCallback, FrameHandle, HostEnv};

/// What happened during one [`BackupSlot::arm`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmOutcome {
    /// A previously stored callback was still pending and was removed.
    pub cancelled_stale: bool,
    /// A new frame callback was scheduled. `false` means the host has no
    /// frame scheduler.
    pub scheduled: bool,
}

/// Holds at most one pending frame handle for the backup reset pass.
pub struct BackupSlot {
    host: Rc<dyn HostEnv>,
    last: Cell<Option<FrameHandle>>,
}

impl BackupSlot {
    /// Create an empty slot bound to a host.
    #[must_use]
    pub fn new(host: Rc<dyn HostEnv>) -> Self {
        Self {
            host,
            last: Cell::new(None),
        }
    }

    /// Best-effort cancellation of the stored handle.
    ///
    /// Returns `true` only when a callback that had not yet fired was
    /// actually removed. Safe to call when nothing was ever armed.
    pub fn cancel_pending(&self) -> bool {
        match self.last.take() {
            Some(handle) => self.host.cancel_frame(handle),
            None => false,
        }
    }

    /// Cancel any stale pending callback, then schedule `cb` for the next
    /// frame.
    ///
    /// The cancel is issued unconditionally on every call; a stored handle
    /// whose callback already fired cancels as a no-op.
    pub fn arm(&self, cb: FrameCallback) -> ArmOutcome {
        let cancelled_stale = self.cancel_pending();
        let handle = self.host.request_frame(cb);
        self.last.set(handle);
        ArmOutcome {
            cancelled_stale,
            scheduled: handle.is_some(),
        }
    }

    /// Whether a handle is currently stored. The callback behind it may
    /// already have fired; only the host knows.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.last.get().is_some()
    }
}

impl Drop for BackupSlot {
    fn drop(&mut self) {
        // A reset must never fire against a torn-down context.
        self.cancel_pending();
    }
}
