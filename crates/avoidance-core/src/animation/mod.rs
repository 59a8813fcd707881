//! Animation vocabulary: curve identifiers, the platform-style options word,
//! and the transition model the avoider hands to its [`Animator`].
//!
//! The inset *state change* is always applied immediately and exactly once;
//! what animates is presentation. The host's render loop interpolates between
//! the old and new inset over the keyboard's own animation duration, which
//! [`Transition`] models as a pure `value_at(elapsed)` function so headless
//! hosts and tests can sample it.

pub mod curve;
pub mod mock;
pub mod transition;

pub use curve::{AnimationCurve, AnimationOptions};
pub use transition::{Animator, ImmediateAnimator, Transition};
