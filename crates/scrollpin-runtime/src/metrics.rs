#![forbid(unsafe_code)]

//! Reset observability: monotonic counters and structured events.
//!
//! Counters are process-wide and only ever increase; dashboards and tests
//! consume them as deltas. Every recording function also emits a
//! structured `tracing` event under the `scrollpin.reset` target.

use std::sync::atomic::{AtomicU64, Ordering};

static RESETS_SYNC_TOTAL: AtomicU64 = AtomicU64::new(0);
static RESETS_BACKUP_TOTAL: AtomicU64 = AtomicU64::new(0);
static BACKUPS_CANCELLED_TOTAL: AtomicU64 = AtomicU64::new(0);
static RESTORATION_OVERRIDES_TOTAL: AtomicU64 = AtomicU64::new(0);

/// Total synchronous (pre-paint) resets performed.
#[must_use]
pub fn resets_sync_total() -> u64 {
    RESETS_SYNC_TOTAL.load(Ordering::Relaxed)
}

/// Total backup-frame resets that fired.
#[must_use]
pub fn resets_backup_total() -> u64 {
    RESETS_BACKUP_TOTAL.load(Ordering::Relaxed)
}

/// Total stale backup callbacks cancelled before firing.
#[must_use]
pub fn backups_cancelled_total() -> u64 {
    BACKUPS_CANCELLED_TOTAL.load(Ordering::Relaxed)
}

/// Total restoration-mode overrides applied to a host.
#[must_use]
pub fn restoration_overrides_total() -> u64 {
    RESTORATION_OVERRIDES_TOTAL.load(Ordering::Relaxed)
}

/// Record a synchronous reset pass.
pub(crate) fn record_sync_reset(path: &str, surfaces_reset: u32) {
    RESETS_SYNC_TOTAL.fetch_add(1, Ordering::Relaxed);
    tracing::trace!(
        target: "scrollpin.reset",
        path = %path,
        surfaces_reset = surfaces_reset,
        pass = "sync",
        "viewport reset"
    );
}

/// Record a backup-frame reset pass.
pub(crate) fn record_backup_reset(path: &str, surfaces_reset: u32) {
    RESETS_BACKUP_TOTAL.fetch_add(1, Ordering::Relaxed);
    tracing::trace!(
        target: "scrollpin.reset",
        path = %path,
        surfaces_reset = surfaces_reset,
        pass = "backup",
        "viewport reset"
    );
}

/// Record the cancellation of a superseded backup callback.
pub(crate) fn record_backup_cancelled(path: &str) {
    BACKUPS_CANCELLED_TOTAL.fetch_add(1, Ordering::Relaxed);
    tracing::debug!(
        target: "scrollpin.reset",
        path = %path,
        "stale backup frame cancelled"
    );
}

/// Record a restoration-mode override.
pub(crate) fn record_restoration_override() {
    RESTORATION_OVERRIDES_TOTAL.fetch_add(1, Ordering::Relaxed);
    tracing::debug!(
        target: "scrollpin.reset",
        "native scroll restoration switched to manual"
    );
}
