#![forbid(unsafe_code)]

//! Deterministic in-memory host for tests.
//!
//! [`FakeHost`] records every scroll write per surface, queues frame
//! callbacks until the test pumps them, and counts fired and cancelled
//! callbacks so cancellation semantics can be asserted exactly. Capability
//! toggles (`without_*`) build the degraded hosts the probe model demands.
//!
//! Cloning a `FakeHost` shares state: keep one clone for inspection and
//! hand another to the code under test.

use std::cell::RefCell;
use std::rc::Rc;

use crate::frame::{FrameCallback, FrameHandle, FrameStamp};
use crate::geometry::ScrollPosition;
use crate::host::{HostEnv, ScrollRestoration, SurfaceKind};

#[derive(Debug, Clone, Copy)]
struct SurfaceState {
    pos: ScrollPosition,
    writes: u64,
}

struct FakeState {
    /// `None` means the surface capability is absent.
    surfaces: [Option<SurfaceState>; 3],
    /// `None` means the restoration setting is absent.
    restoration: Option<ScrollRestoration>,
    restoration_writes: u64,
    frames_supported: bool,
    next_handle: u64,
    pending: Vec<(FrameHandle, FrameCallback)>,
    fired: u64,
    cancelled: u64,
}

/// A fully deterministic [`HostEnv`] double.
///
/// Starts with every capability present, all surfaces at the origin, and
/// restoration mode [`ScrollRestoration::Auto`].
#[derive(Clone)]
pub struct FakeHost {
    inner: Rc<RefCell<FakeState>>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeHost {
    /// Create a host with all capabilities present.
    #[must_use]
    pub fn new() -> Self {
        let surface = SurfaceState {
            pos: ScrollPosition::default(),
            writes: 0,
        };
        Self {
            inner: Rc::new(RefCell::new(FakeState {
                surfaces: [Some(surface); 3],
                restoration: Some(ScrollRestoration::Auto),
                restoration_writes: 0,
                frames_supported: true,
                next_handle: 1,
                pending: Vec::new(),
                fired: 0,
                cancelled: 0,
            })),
        }
    }

    /// Remove one scroll surface.
    #[must_use]
    pub fn without_surface(self, kind: SurfaceKind) -> Self {
        self.inner.borrow_mut().surfaces[kind.index()] = None;
        self
    }

    /// Remove the restoration setting.
    #[must_use]
    pub fn without_restoration(self) -> Self {
        self.inner.borrow_mut().restoration = None;
        self
    }

    /// Remove the frame scheduler.
    #[must_use]
    pub fn without_frames(self) -> Self {
        self.inner.borrow_mut().frames_supported = false;
        self
    }

    /// Scroll a surface as an external writer would (an anchor jump, a
    /// user drag). Does not count as a write by the code under test.
    pub fn simulate_user_scroll(&self, kind: SurfaceKind, pos: ScrollPosition) {
        if let Some(surface) = self.inner.borrow_mut().surfaces[kind.index()].as_mut() {
            surface.pos = pos;
        }
    }

    /// Current offset of a surface, or `None` if the surface is absent.
    #[must_use]
    pub fn scroll(&self, kind: SurfaceKind) -> Option<ScrollPosition> {
        self.inner.borrow().surfaces[kind.index()].map(|s| s.pos)
    }

    /// Number of `set_scroll` writes applied to a surface.
    #[must_use]
    pub fn write_count(&self, kind: SurfaceKind) -> u64 {
        self.inner.borrow().surfaces[kind.index()]
            .map(|s| s.writes)
            .unwrap_or(0)
    }

    /// Number of `set_restoration_mode` writes applied.
    #[must_use]
    pub fn restoration_write_count(&self) -> u64 {
        self.inner.borrow().restoration_writes
    }

    /// Frame callbacks queued but not yet fired or cancelled.
    #[must_use]
    pub fn pending_frame_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Total frame callbacks that ran.
    #[must_use]
    pub fn fired_frame_count(&self) -> u64 {
        self.inner.borrow().fired
    }

    /// Total frame callbacks removed by `cancel_frame` before firing.
    #[must_use]
    pub fn cancelled_frame_count(&self) -> u64 {
        self.inner.borrow().cancelled
    }

    /// Run the oldest pending frame callback. Returns `false` if the queue
    /// was empty.
    pub fn run_next_frame(&self) -> bool {
        let cb = {
            let mut state = self.inner.borrow_mut();
            if state.pending.is_empty() {
                return false;
            }
            let (_, cb) = state.pending.remove(0);
            state.fired += 1;
            cb
        };
        // Borrow released: the callback is free to call back into the host.
        cb(FrameStamp::now());
        true
    }

    /// Run every pending frame callback in order, including callbacks
    /// queued by earlier ones. Returns how many ran.
    pub fn run_all_frames(&self) -> usize {
        let mut ran = 0;
        while self.run_next_frame() {
            ran += 1;
        }
        ran
    }
}

impl HostEnv for FakeHost {
    fn has_surface(&self, kind: SurfaceKind) -> bool {
        self.inner.borrow().surfaces[kind.index()].is_some()
    }

    fn set_scroll(&self, kind: SurfaceKind, pos: ScrollPosition) -> bool {
        match self.inner.borrow_mut().surfaces[kind.index()].as_mut() {
            Some(surface) => {
                surface.pos = pos;
                surface.writes += 1;
                true
            }
            None => false,
        }
    }

    fn has_frame_scheduler(&self) -> bool {
        self.inner.borrow().frames_supported
    }

    fn request_frame(&self, cb: FrameCallback) -> Option<FrameHandle> {
        let mut state = self.inner.borrow_mut();
        if !state.frames_supported {
            return None;
        }
        let handle = FrameHandle::from_raw(state.next_handle);
        state.next_handle += 1;
        state.pending.push((handle, cb));
        Some(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) -> bool {
        let mut state = self.inner.borrow_mut();
        let before = state.pending.len();
        state.pending.retain(|(h, _)| *h != handle);
        if state.pending.len() < before {
            state.cancelled += 1;
            true
        } else {
            false
        }
    }

    fn restoration_mode(&self) -> Option<ScrollRestoration> {
        self.inner.borrow().restoration
    }

    fn set_restoration_mode(&self, mode: ScrollRestoration) -> bool {
        let mut state = self.inner.borrow_mut();
        match state.restoration.as_mut() {
            Some(current) => {
                *current = mode;
                state.restoration_writes += 1;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ORIGIN;
    use std::cell::Cell;

    #[test]
    fn writes_are_recorded_per_surface() {
        let host = FakeHost::new();
        assert!(host.set_scroll(SurfaceKind::Window, ScrollPosition::new(0, 10)));
        assert!(host.set_scroll(SurfaceKind::Window, ORIGIN));
        assert_eq!(host.write_count(SurfaceKind::Window), 2);
        assert_eq!(host.write_count(SurfaceKind::RootElement), 0);
        assert_eq!(host.scroll(SurfaceKind::Window), Some(ORIGIN));
    }

    #[test]
    fn absent_surface_rejects_writes() {
        let host = FakeHost::new().without_surface(SurfaceKind::RootElement);
        assert!(!host.has_surface(SurfaceKind::RootElement));
        assert!(!host.set_scroll(SurfaceKind::RootElement, ORIGIN));
        assert_eq!(host.scroll(SurfaceKind::RootElement), None);
    }

    #[test]
    fn user_scroll_does_not_count_as_write() {
        let host = FakeHost::new();
        host.simulate_user_scroll(SurfaceKind::ContentElement, ScrollPosition::new(0, 600));
        assert_eq!(
            host.scroll(SurfaceKind::ContentElement),
            Some(ScrollPosition::new(0, 600))
        );
        assert_eq!(host.write_count(SurfaceKind::ContentElement), 0);
    }

    #[test]
    fn frames_fire_in_request_order() {
        let host = FakeHost::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["a", "b"] {
            let order = Rc::clone(&order);
            host.request_frame(Box::new(move |_| order.borrow_mut().push(tag)))
                .unwrap();
        }

        assert_eq!(host.run_all_frames(), 2);
        assert_eq!(*order.borrow(), vec!["a", "b"]);
        assert_eq!(host.fired_frame_count(), 2);
    }

    #[test]
    fn cancel_removes_pending_callback() {
        let host = FakeHost::new();
        let fired = Rc::new(Cell::new(false));
        let fired_in_cb = Rc::clone(&fired);

        let handle = host
            .request_frame(Box::new(move |_| fired_in_cb.set(true)))
            .unwrap();
        assert!(host.cancel_frame(handle));
        assert_eq!(host.run_all_frames(), 0);
        assert!(!fired.get());
        assert_eq!(host.cancelled_frame_count(), 1);
    }

    #[test]
    fn cancel_of_fired_or_unknown_handle_is_noop() {
        let host = FakeHost::new();
        let handle = host.request_frame(Box::new(|_| {})).unwrap();
        assert!(host.run_next_frame());
        assert!(!host.cancel_frame(handle));
        assert!(!host.cancel_frame(FrameHandle::from_raw(9999)));
        assert_eq!(host.cancelled_frame_count(), 0);
    }

    #[test]
    fn host_without_frames_drops_callbacks() {
        let host = FakeHost::new().without_frames();
        assert!(!host.has_frame_scheduler());
        assert!(host.request_frame(Box::new(|_| {})).is_none());
        assert_eq!(host.pending_frame_count(), 0);
    }

    #[test]
    fn restoration_writes_are_counted() {
        let host = FakeHost::new();
        assert_eq!(host.restoration_mode(), Some(ScrollRestoration::Auto));
        assert!(host.set_restoration_mode(ScrollRestoration::Manual));
        assert_eq!(host.restoration_mode(), Some(ScrollRestoration::Manual));
        assert_eq!(host.restoration_write_count(), 1);
    }

    #[test]
    fn absent_restoration_rejects_writes() {
        let host = FakeHost::new().without_restoration();
        assert_eq!(host.restoration_mode(), None);
        assert!(!host.set_restoration_mode(ScrollRestoration::Manual));
        assert_eq!(host.restoration_write_count(), 0);
    }

    #[test]
    fn callbacks_queued_during_pump_also_run() {
        let host = FakeHost::new();
        let count = Rc::new(Cell::new(0u32));

        let inner_count = Rc::clone(&count);
        let reentrant_host = host.clone();
        host.request_frame(Box::new(move |_| {
            inner_count.set(inner_count.get() + 1);
            let inner_count = Rc::clone(&inner_count);
            reentrant_host
                .request_frame(Box::new(move |_| inner_count.set(inner_count.get() + 1)))
                .unwrap();
        }))
        .unwrap();

        assert_eq!(host.run_all_frames(), 2);
        assert_eq!(count.get(), 2);
    }
}
