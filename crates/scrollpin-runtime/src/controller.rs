#![forbid(unsafe_code)]

//! The route-change scroll reset controller.
//!
//! [`ScrollReset`] is a passive behavior unit: it renders nothing, returns
//! nothing, and exposes no operations the host is required to call. Once
//! mounted on a [`PathSignal`] it keeps the viewport pinned to the origin:
//!
//! 1. **First activation**: immediate reset of every present surface, plus
//!    a one-time switch of the host's scroll restoration to manual so
//!    history navigation stops re-applying remembered offsets.
//! 2. **Every path change**: the same multi-surface reset, performed
//!    synchronously inside the signal notification turn — before the host
//!    presents the next frame, so the user never sees the stale offset.
//! 3. **Backup pass**: one deferred reset on the next frame, re-asserting
//!    the origin against writers that restore scroll asynchronously after
//!    the synchronous pass. A newer navigation cancels the stale backup.
//!
//! Missing capabilities are skipped silently; nothing here can fail.

use std::cell::RefCell;
use std::rc::Rc;

use scrollpin_core::{HostEnv, ORIGIN, ScrollRestoration, SurfaceKind};

use crate::metrics;
use crate::route::NavigationPath;
use crate::signal::{PathSignal, PathSubscription};
use crate::slot::BackupSlot;

/// Reset every present surface to the origin. Returns how many surfaces
/// accepted the write.
fn reset_surfaces(host: &dyn HostEnv) -> u32 {
    let mut applied = 0;
    for kind in SurfaceKind::ALL {
        if host.set_scroll(kind, ORIGIN) {
            applied += 1;
        }
    }
    applied
}

struct ResetState {
    host: Rc<dyn HostEnv>,
    slot: BackupSlot,
    current: NavigationPath,
    /// True until the first reset has executed, never set again.
    first_render: bool,
    /// The restoration override is applied at most once per controller.
    restoration_overridden: bool,
}

impl ResetState {
    fn new(host: Rc<dyn HostEnv>, initial: NavigationPath) -> Self {
        Self {
            slot: BackupSlot::new(Rc::clone(&host)),
            host,
            current: initial,
            first_render: true,
            restoration_overridden: false,
        }
    }

    /// First activation: restoration override, then the mount reset.
    fn activate(&mut self) {
        if !self.first_render {
            return;
        }
        self.override_restoration();
        self.reset_and_arm(None);
        self.first_render = false;
    }

    fn on_navigate(&mut self, path: &NavigationPath) {
        let superseded = std::mem::replace(&mut self.current, path.clone());
        self.reset_and_arm(Some(&superseded));
    }

    /// Synchronous multi-surface reset, then cancel-and-rearm the backup
    /// frame. `superseded` names the navigation whose backup a successful
    /// cancel removed.
    fn reset_and_arm(&mut self, superseded: Option<&NavigationPath>) {
        let applied = reset_surfaces(self.host.as_ref());
        metrics::record_sync_reset(self.current.as_str(), applied);

        let host = Rc::clone(&self.host);
        let path = self.current.clone();
        let outcome = self.slot.arm(Box::new(move |_stamp| {
            let applied = reset_surfaces(host.as_ref());
            metrics::record_backup_reset(path.as_str(), applied);
        }));
        if outcome.cancelled_stale {
            let stale = superseded.unwrap_or(&self.current);
            metrics::record_backup_cancelled(stale.as_str());
        }
    }

    /// Switch the host's scroll restoration to manual, once.
    ///
    /// Skipped silently when the setting is absent, and skipped without a
    /// write when the host is already manual.
    fn override_restoration(&mut self) {
        if self.restoration_overridden {
            return;
        }
        self.restoration_overridden = true;
        if self.host.restoration_mode() == Some(ScrollRestoration::Auto)
            && self.host.set_restoration_mode(ScrollRestoration::Manual)
        {
            metrics::record_restoration_override();
        }
    }
}

/// A mounted scroll reset controller.
///
/// Created by [`ScrollReset::mount`]; expected to be mounted once, near
/// the application root, and to live for the application's lifetime.
/// Dropping it unsubscribes from the path signal and cancels any pending
/// backup frame.
pub struct ScrollReset {
    state: Rc<RefCell<ResetState>>,
    _path_guard: PathSubscription,
}

impl ScrollReset {
    /// Mount the controller on a host and a navigation signal.
    ///
    /// Performs the first-activation work immediately: restoration
    /// override, synchronous reset for the signal's current path, and the
    /// first backup pass.
    pub fn mount(host: Rc<dyn HostEnv>, paths: &PathSignal) -> Self {
        let initial = paths.get();
        tracing::debug!(
            target: "scrollpin.reset",
            path = %initial,
            caps = ?host.capabilities(),
            "scroll reset mounted"
        );

        let state = Rc::new(RefCell::new(ResetState::new(host, initial)));
        state.borrow_mut().activate();

        let weak = Rc::downgrade(&state);
        let guard = paths.subscribe(move |path| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().on_navigate(path);
            }
        });

        Self {
            state,
            _path_guard: guard,
        }
    }

    /// The path the controller last reset for.
    #[must_use]
    pub fn current_path(&self) -> NavigationPath {
        self.state.borrow().current.clone()
    }

    /// Re-assert the origin for the current path.
    ///
    /// The same sync-plus-backup sequence a navigation triggers; useful
    /// when a caller knows an external writer has scrolled the viewport.
    pub fn reset_now(&self) {
        let mut state = self.state.borrow_mut();
        let current = state.current.clone();
        state.reset_and_arm(Some(&current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollpin_core::{FakeHost, ScrollPosition};

    fn mounted(host: &FakeHost, initial: &str) -> (ScrollReset, PathSignal) {
        let paths = PathSignal::new(initial);
        let reset = ScrollReset::mount(Rc::new(host.clone()), &paths);
        (reset, paths)
    }

    fn assert_all_at_origin(host: &FakeHost) {
        for kind in SurfaceKind::ALL {
            assert_eq!(host.scroll(kind), Some(ORIGIN), "surface {}", kind.label());
        }
    }

    #[test]
    fn mount_resets_every_surface_and_overrides_restoration() {
        let host = FakeHost::new();
        host.simulate_user_scroll(SurfaceKind::Window, ScrollPosition::new(0, 900));
        host.simulate_user_scroll(SurfaceKind::RootElement, ScrollPosition::new(4, 120));

        let (_reset, _paths) = mounted(&host, "/home");

        assert_all_at_origin(&host);
        assert_eq!(host.restoration_mode(), Some(ScrollRestoration::Manual));
        assert_eq!(host.restoration_write_count(), 1);
        assert_eq!(host.pending_frame_count(), 1);
    }

    #[test]
    fn navigation_resets_synchronously_before_frame_pump() {
        let host = FakeHost::new();
        let (_reset, paths) = mounted(&host, "/home");

        host.simulate_user_scroll(SurfaceKind::Window, ScrollPosition::new(0, 2400));
        paths.navigate("/about");

        // No frame has been pumped yet: the sync pass alone restored the
        // origin.
        assert_all_at_origin(&host);
    }

    #[test]
    fn backup_pass_reasserts_origin_after_async_writer() {
        let host = FakeHost::new();
        let (_reset, paths) = mounted(&host, "/home");
        host.run_all_frames();

        paths.navigate("/about");
        // An async writer restores its own offset after the sync pass.
        host.simulate_user_scroll(SurfaceKind::ContentElement, ScrollPosition::new(0, 333));

        assert_eq!(host.run_all_frames(), 1);
        assert_all_at_origin(&host);
    }

    #[test]
    fn restoration_written_at_most_once_across_navigations() {
        let host = FakeHost::new();
        let (_reset, paths) = mounted(&host, "/");

        for path in ["/a", "/b", "/c", "/d"] {
            paths.navigate(path);
            host.run_all_frames();
        }

        assert_eq!(host.restoration_write_count(), 1);
        assert_eq!(host.restoration_mode(), Some(ScrollRestoration::Manual));
    }

    #[test]
    fn already_manual_host_is_not_written() {
        let host = FakeHost::new();
        host.set_restoration_mode(ScrollRestoration::Manual);
        let writes_before = host.restoration_write_count();

        let (_reset, paths) = mounted(&host, "/");
        paths.navigate("/a");

        assert_eq!(host.restoration_write_count(), writes_before);
        assert_eq!(host.restoration_mode(), Some(ScrollRestoration::Manual));
    }

    #[test]
    fn rapid_navigation_cancels_stale_backup() {
        let host = FakeHost::new();
        let (_reset, paths) = mounted(&host, "/home");
        host.run_all_frames();

        paths.navigate("/about");
        paths.navigate("/contact");

        // The /about backup never fired; only /contact's is pending.
        assert_eq!(host.cancelled_frame_count(), 1);
        assert_eq!(host.pending_frame_count(), 1);
        assert_eq!(host.run_all_frames(), 1);
    }

    #[test]
    fn repeated_reset_is_idempotent() {
        let host = FakeHost::new();
        let (reset, _paths) = mounted(&host, "/home");

        reset.reset_now();
        reset.reset_now();
        host.run_all_frames();

        assert_all_at_origin(&host);
    }

    #[test]
    fn equal_path_navigation_is_ignored() {
        let host = FakeHost::new();
        let (_reset, paths) = mounted(&host, "/home");
        let writes_before = host.write_count(SurfaceKind::Window);

        paths.navigate("/home");

        assert_eq!(host.write_count(SurfaceKind::Window), writes_before);
    }

    #[test]
    fn drop_cancels_pending_backup_and_unsubscribes() {
        let host = FakeHost::new();
        let paths = PathSignal::new("/home");
        let reset = ScrollReset::mount(Rc::new(host.clone()), &paths);
        assert_eq!(host.pending_frame_count(), 1);

        drop(reset);

        assert_eq!(host.pending_frame_count(), 0);
        assert_eq!(host.cancelled_frame_count(), 1);

        // Navigating after teardown must not touch the host.
        let writes_before = host.write_count(SurfaceKind::Window);
        paths.navigate("/after-teardown");
        assert_eq!(host.write_count(SurfaceKind::Window), writes_before);
    }

    #[test]
    fn current_path_tracks_navigation() {
        let host = FakeHost::new();
        let (reset, paths) = mounted(&host, "/home");
        assert_eq!(reset.current_path(), NavigationPath::from("/home"));

        paths.navigate("/about");
        assert_eq!(reset.current_path(), NavigationPath::from("/about"));
    }
}
