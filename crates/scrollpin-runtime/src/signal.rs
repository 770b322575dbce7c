#![forbid(unsafe_code)]

//! Observable navigation-path signal with change-only notification.
//!
//! # Design
//!
//! [`PathSignal`] wraps the current [`NavigationPath`] in shared,
//! reference-counted storage (`Rc<RefCell<..>>`). When the value changes
//! (determined by equality), all live subscribers are notified in
//! registration order. The hosting router is the writer; the scroll reset
//! controller is a reader.
//!
//! # Invariants
//!
//! 1. `version` increments by exactly 1 on each value-changing navigation.
//! 2. `navigate(p)` where `p == current` is a no-op: no version bump, no
//!    notification.
//! 3. Subscribers are notified in registration order.
//! 4. Dead subscribers (dropped [`PathSubscription`] guards) are pruned
//!    lazily during notification.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::route::NavigationPath;

type CallbackRc = Rc<dyn Fn(&NavigationPath)>;
type CallbackWeak = Weak<dyn Fn(&NavigationPath)>;

struct SignalInner {
    value: NavigationPath,
    version: u64,
    /// Subscribers stored as weak references. Dead entries are pruned on
    /// notify.
    subscribers: Vec<CallbackWeak>,
}

/// A shared, version-tracked navigation path with change notification.
///
/// Cloning a `PathSignal` creates a new handle to the **same** inner state.
pub struct PathSignal {
    inner: Rc<RefCell<SignalInner>>,
}

impl Clone for PathSignal {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for PathSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("PathSignal")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

/// RAII guard for a [`PathSignal`] subscription.
///
/// Dropping the guard unsubscribes the callback: it will not be called
/// after drop, though its slot may linger in the subscriber list until the
/// next notification prunes it.
pub struct PathSubscription {
    _guard: CallbackRc,
}

impl PathSignal {
    /// Create a signal holding the given initial path.
    ///
    /// The initial version is 0 and no subscribers are registered.
    #[must_use]
    pub fn new(initial: impl Into<NavigationPath>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SignalInner {
                value: initial.into(),
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Get a clone of the current path.
    #[must_use]
    pub fn get(&self) -> NavigationPath {
        self.inner.borrow().value.clone()
    }

    /// Publish a new path. If it differs from the current value, the
    /// version is incremented and all live subscribers are notified.
    pub fn navigate(&self, path: impl Into<NavigationPath>) {
        let path = path.into();
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == path {
                return;
            }
            inner.value = path;
            inner.version += 1;
        }
        self.notify();
    }

    /// Subscribe to path changes. The callback is invoked with the new
    /// path each time it changes.
    pub fn subscribe(&self, callback: impl Fn(&NavigationPath) + 'static) -> PathSubscription {
        let strong: CallbackRc = Rc::new(callback);
        self.inner.borrow_mut().subscribers.push(Rc::downgrade(&strong));
        PathSubscription { _guard: strong }
    }

    /// Current version number. Increments by 1 on each value-changing
    /// navigation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of registered subscriber slots (including dead ones not yet
    /// pruned).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Notify live subscribers and prune dead ones.
    fn notify(&self) {
        // Collect live callbacks first so no borrow is held during calls.
        let (value, callbacks): (NavigationPath, Vec<CallbackRc>) = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            let live = inner.subscribers.iter().filter_map(|w| w.upgrade()).collect();
            (inner.value.clone(), live)
        };
        for cb in callbacks {
            cb(&value);
        }
    }
}
