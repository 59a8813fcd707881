//! # avoidance-core
//!
//! Core library for keyboard avoidance: it turns the host platform's keyboard
//! lifecycle notifications into typed events and keeps a container's bottom
//! inset in sync with the portion of the keyboard that overlaps it.
//!
//! This crate has zero dependencies on OS APIs, UI frameworks, or a rendering
//! loop. The host application supplies the notification feed and hands the
//! avoider a container; everything else is pure, single-threaded logic.
//!
//! # How avoidance works (for beginners)
//!
//! When an on-screen keyboard slides up it covers the lower part of the
//! screen, hiding whatever content lives there. A scrollable view fixes that
//! by growing its bottom *inset* (the padding between its content and its
//! bottom edge) by exactly the height of the covered region, so the content
//! can scroll clear of the keyboard.
//!
//! The pipeline in this crate:
//!
//! - **`notify`** – An explicit observer registry. The platform (or a
//!   simulator, or a test) posts named notifications carrying an untyped
//!   key/value payload; registered callbacks receive them synchronously.
//!
//! - **`keyboard`** – The two core components. The `KeyboardSubscriber`
//!   registers one observer per requested event kind and normalizes each
//!   untyped payload into a `KeyboardEventInfo`. The `KeyboardAvoider`
//!   listens for frame changes, intersects the keyboard frame with its
//!   container's bounds, and applies the overlap height to the container's
//!   bottom inset without ever accumulating previous adjustments.
//!
//! - **`geometry`** – Rectangles and edge insets in f64 coordinates, with the
//!   intersection and offset operations the avoider needs.
//!
//! - **`animation`** – Curve identifiers, the platform-style options word,
//!   and a small transition model standing in for the host's render-loop
//!   interpolation.

// Declare the four top-level modules.  Rust will look for each in a
// subdirectory with the same name (e.g., src/keyboard/mod.rs).
pub mod animation;
pub mod geometry;
pub mod keyboard;
pub mod notify;

// Re-export the most-used types at the crate root so callers can write
// `avoidance_core::KeyboardAvoider` instead of
// `avoidance_core::keyboard::avoider::KeyboardAvoider`.
pub use animation::{AnimationCurve, AnimationOptions, Animator, ImmediateAnimator, Transition};
pub use geometry::{EdgeInsets, Rect};
pub use keyboard::{
    Container, ContainerRef, EventHandler, KeyboardAvoider, KeyboardEventInfo, KeyboardEventKind,
    KeyboardSubscriber,
};
pub use notify::{NotificationHub, ObserverHandle};
