#![forbid(unsafe_code)]

//! Core: host-environment capabilities for viewport scroll control.
//!
//! # Role in scrollpin
//! `scrollpin-core` is the environment layer. It owns the capability-probing
//! host trait and the value types the runtime consumes; it has no behavior
//! of its own.
//!
//! # Primary responsibilities
//! - **HostEnv**: probe-don't-assume facade over the host's scroll surfaces,
//!   frame scheduler, and scroll-restoration setting.
//! - **ScrollPosition**: viewport offset value type.
//! - **FrameHandle**: opaque handle pairing a scheduled frame callback with
//!   its cancellation.
//! - **FakeHost** (feature `test-helpers`): deterministic in-memory host
//!   with recorded writes and a manually pumped frame queue.
//!
//! # How it fits in the system
//! The runtime (`scrollpin-runtime`) drives a `HostEnv` in response to
//! navigation events. Production hosts adapt a real viewport; tests use
//! `FakeHost`. Every capability may be absent, and absence is never an
//! error: operations report it and callers skip silently.

pub mod frame;
pub mod geometry;
pub mod host;

#[cfg(any(test, feature = "test-helpers"))]
pub mod fake;

#[cfg(any(test, feature = "test-helpers"))]
pub use fake::FakeHost;
pub use frame::{FrameCallback, FrameHandle, FrameStamp};
pub use geometry::{ORIGIN, ScrollPosition};
pub use host::{Capabilities, HostEnv, ScrollRestoration, SurfaceKind};
