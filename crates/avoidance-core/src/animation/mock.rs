//! Recording animator for unit testing.
//!
//! Applies every change immediately (like [`ImmediateAnimator`]) while
//! recording the duration and options of each call, so tests can assert on
//! what a component asked the animation layer to do.

use std::cell::RefCell;

use super::curve::AnimationOptions;
use super::transition::{Animator, ImmediateAnimator};

/// Animator double that records each scheduling request.
#[derive(Debug, Default)]
pub struct RecordingAnimator {
    calls: RefCell<Vec<(f64, AnimationOptions)>>,
}

impl RecordingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(duration, options)` pair passed to [`Animator::animate`],
    /// oldest first.
    pub fn calls(&self) -> Vec<(f64, AnimationOptions)> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_call(&self) -> Option<(f64, AnimationOptions)> {
        self.calls.borrow().last().copied()
    }
}

impl Animator for RecordingAnimator {
    fn animate(&self, duration: f64, options: AnimationOptions, changes: &mut dyn FnMut()) {
        self.calls.borrow_mut().push((duration, options));
        ImmediateAnimator.animate(duration, options, changes);
    }
}
