//! Keyboard lifecycle events, subscription, and inset avoidance.
//!
//! This module owns the full path from a raw keyboard notification to an
//! adjusted container inset:
//!
//! - [`events`] names the six lifecycle notifications and normalizes their
//!   untyped payloads into typed [`KeyboardEventInfo`] records.
//! - [`subscriber`] registers observers on a [`NotificationHub`] for a chosen
//!   set of event kinds and owns their lifetime.
//! - [`avoider`] listens for frame changes and resizes a [`Container`]'s
//!   bottom inset to match the keyboard overlap.
//!
//! # How the pieces fit (for beginners)
//!
//! A platform layer posts notifications into a hub. A
//! [`KeyboardSubscriber`] turns each one into a `KeyboardEventInfo` and hands
//! it to a handler. The [`KeyboardAvoider`] is one such handler wired to a
//! container: it converts the keyboard's end frame into container
//! coordinates, intersects it with the container bounds, and animates the
//! bottom inset to the overlap height. Everything runs synchronously on the
//! caller's thread.
//!
//! [`NotificationHub`]: crate::notify::NotificationHub

pub mod avoider;
pub mod events;
pub mod mock;
pub mod subscriber;

pub use avoider::{Container, ContainerRef, KeyboardAvoider};
pub use events::{notifications, payload_keys, KeyboardEventInfo, KeyboardEventKind};
pub use subscriber::{EventHandler, KeyboardSubscriber};
