//! Simulated platform services.
//!
//! On a real device the OS posts keyboard notifications; here a
//! [`SoftKeyboard`] drives the same notification names and payload shape
//! through an injectable hub, so the whole avoidance stack runs headless.

pub mod soft_keyboard;

pub use soft_keyboard::SoftKeyboard;
