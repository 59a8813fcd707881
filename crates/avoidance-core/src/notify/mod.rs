//! Notification feed infrastructure: an explicit observer registry.
//!
//! Platform toolkits deliver keyboard lifecycle events through a global
//! notification center. This crate replaces that with an injectable
//! [`NotificationHub`]: callers register a callback per notification name and
//! get back an opaque handle; posting a name synchronously invokes every
//! registered callback with the post's untyped payload.
//!
//! # Testability
//!
//! Because the hub is a value the caller constructs and clones, tests build
//! their own hub and post synthetic notifications: no global state, no
//! platform loop.

pub mod hub;

pub use hub::{NotificationHub, ObserverHandle};
