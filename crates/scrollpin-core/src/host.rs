#![forbid(unsafe_code)]

//! The capability-probing host facade.
//!
//! Different host versions and quirks modes honor different scroll
//! surfaces, and some hosts lack a frame scheduler or a configurable
//! restoration setting entirely. The trait therefore never errors: every
//! operation either succeeds or reports the capability absent, and callers
//! skip absent capabilities silently.

use crate::frame::{FrameCallback, FrameHandle};
use crate::geometry::ScrollPosition;

/// The scroll surfaces a host may expose.
///
/// A single viewport can carry its offset on more than one surface, and
/// which one the host actually honors varies. Writers that want the reset
/// to stick apply it to every present surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// The primary window-level scroll position.
    Window,
    /// The root document scrolling element.
    RootElement,
    /// The page-content scrolling element.
    ContentElement,
}

impl SurfaceKind {
    /// Every surface kind, in application order.
    pub const ALL: [SurfaceKind; 3] = [
        SurfaceKind::Window,
        SurfaceKind::RootElement,
        SurfaceKind::ContentElement,
    ];

    /// Stable label for logs and metrics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SurfaceKind::Window => "window",
            SurfaceKind::RootElement => "root_element",
            SurfaceKind::ContentElement => "content_element",
        }
    }

    /// Dense index for table-backed hosts.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            SurfaceKind::Window => 0,
            SurfaceKind::RootElement => 1,
            SurfaceKind::ContentElement => 2,
        }
    }
}

/// The host's scroll-restoration setting.
///
/// Under [`Auto`](ScrollRestoration::Auto) the host reapplies a remembered
/// scroll offset on history navigation; under
/// [`Manual`](ScrollRestoration::Manual) it leaves the offset alone and the
/// application owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRestoration {
    /// Host restores remembered offsets on back/forward navigation.
    Auto,
    /// Application controls the offset; the host never restores.
    Manual,
}

bitflags::bitflags! {
    /// Summary of what a host advertises, for diagnostics.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u8 {
        /// Window-level scroll surface present.
        const WINDOW_SURFACE = 1 << 0;
        /// Root-element scroll surface present.
        const ROOT_SURFACE = 1 << 1;
        /// Content-element scroll surface present.
        const CONTENT_SURFACE = 1 << 2;
        /// Next-frame callback scheduler present.
        const FRAME_SCHEDULER = 1 << 3;
        /// Configurable scroll-restoration setting present.
        const SCROLL_RESTORATION = 1 << 4;
    }
}

/// A host viewport environment.
///
/// Implementations adapt a real viewport (or a test double) to the
/// capability model above. All methods are infallible in the domain sense:
/// `bool` returns report whether the capability was present and the write
/// applied, never an error.
///
/// # Contract
///
/// - `set_scroll` on an absent surface returns `false` and changes nothing.
/// - `request_frame` returns `None` when no scheduler is present; the
///   callback is dropped without running.
/// - `cancel_frame` returns `true` only when it removed a callback that had
///   not yet fired. Cancelling a fired or unknown handle is a no-op
///   returning `false`.
/// - `set_restoration_mode` to the current mode is permitted and counts as
///   an applied write.
pub trait HostEnv {
    /// Whether the given scroll surface is present.
    fn has_surface(&self, kind: SurfaceKind) -> bool;

    /// Set the scroll offset of one surface. Returns `false` if the
    /// surface is absent.
    fn set_scroll(&self, kind: SurfaceKind, pos: ScrollPosition) -> bool;

    /// Whether a next-frame scheduler is present.
    fn has_frame_scheduler(&self) -> bool;

    /// Schedule `cb` to run once before the next repaint. Returns `None`
    /// if the host has no frame scheduler.
    fn request_frame(&self, cb: FrameCallback) -> Option<FrameHandle>;

    /// Best-effort cancellation of a scheduled frame callback.
    fn cancel_frame(&self, handle: FrameHandle) -> bool;

    /// Current restoration mode, or `None` if the setting is absent.
    fn restoration_mode(&self) -> Option<ScrollRestoration>;

    /// Set the restoration mode. Returns `false` if the setting is absent.
    fn set_restoration_mode(&self, mode: ScrollRestoration) -> bool;

    /// Advertised capability summary, derived by probing.
    fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::empty();
        if self.has_surface(SurfaceKind::Window) {
            caps |= Capabilities::WINDOW_SURFACE;
        }
        if self.has_surface(SurfaceKind::RootElement) {
            caps |= Capabilities::ROOT_SURFACE;
        }
        if self.has_surface(SurfaceKind::ContentElement) {
            caps |= Capabilities::CONTENT_SURFACE;
        }
        if self.has_frame_scheduler() {
            caps |= Capabilities::FRAME_SCHEDULER;
        }
        if self.restoration_mode().is_some() {
            caps |= Capabilities::SCROLL_RESTORATION;
        }
        caps
    }
}
