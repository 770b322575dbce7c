#![forbid(unsafe_code)]

//! Scrollpin Runtime
//!
//! This crate provides the route-change scroll reset controller on top of
//! the host abstraction in `scrollpin-core`.
//!
//! # Key Components
//!
//! - [`ScrollReset`] - The controller: mount once near the application
//!   root, forget about it
//! - [`PathSignal`] - Observable navigation path with change-only
//!   notification
//! - [`NavigationPath`] - Opaque route identifier supplied by the router
//! - [`BackupSlot`] - Single-slot pending-frame handle with
//!   cancel-then-rearm semantics
//! - [`metrics`] - Process-wide reset counters
//!
//! # How it fits in the system
//! The hosting application's router publishes path changes through a
//! [`PathSignal`]; the controller reacts by re-asserting the viewport
//! origin on a [`scrollpin_core::HostEnv`]. It produces no output and has
//! no return channel — its only effect is on shared viewport state.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use scrollpin_core::FakeHost;
//! use scrollpin_runtime::{PathSignal, ScrollReset};
//!
//! let host = FakeHost::new();
//! let paths = PathSignal::new("/home");
//! let _reset = ScrollReset::mount(Rc::new(host.clone()), &paths);
//!
//! paths.navigate("/about");
//! host.run_all_frames();
//! ```

pub mod controller;
pub mod metrics;
pub mod route;
pub mod signal;
pub mod slot;

pub use controller::ScrollReset;
pub use route::NavigationPath;
pub use signal::{PathSignal, PathSubscription};
pub use slot::{ArmOutcome, BackupSlot};
