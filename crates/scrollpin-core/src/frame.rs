#![forbid(unsafe_code)]

//! Frame-callback scheduling types.
//!
//! Hosts expose a "run once before the next repaint" scheduler. A request
//! yields a [`FrameHandle`]; the handle is the cancellation token. The
//! pairing mirrors the rest of the crate's capability model: both the
//! request and the cancel are best-effort.

/// Timestamp delivered to a frame callback when it fires.
///
/// Uses `web-time` so hosts compiled to wasm get a working monotonic clock.
pub type FrameStamp = web_time::Instant;

/// A deferred callback scheduled to run on the host's next frame.
///
/// Callbacks run at most once, on the thread that pumps the host's frame
/// queue. A cancelled callback never runs.
pub type FrameCallback = Box<dyn FnOnce(FrameStamp)>;

/// Opaque handle to a scheduled frame callback.
///
/// Obtained from [`HostEnv::request_frame`](crate::HostEnv::request_frame)
/// and passed to [`HostEnv::cancel_frame`](crate::HostEnv::cancel_frame).
/// Handles are never reused within a host's lifetime, so cancelling a
/// handle whose callback already fired is a well-defined no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    /// Construct a handle from a host-assigned raw id.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The host-assigned raw id.
    #[inline]
    #[must_use]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}
