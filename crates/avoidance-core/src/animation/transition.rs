//! The animator seam and the pure transition model behind it.

use super::curve::{AnimationCurve, AnimationOptions};

/// Schedules the visual transition around an inset change.
///
/// Implementations must invoke `changes` exactly once, synchronously, before
/// returning; the state change is never deferred. `duration` and `options`
/// describe only the presentation: how the host should interpolate between
/// the inset value before the call and the one after it.
pub trait Animator {
    fn animate(&self, duration: f64, options: AnimationOptions, changes: &mut dyn FnMut());
}

/// Animator that applies changes with no visual transition.
///
/// This is the default: correct everywhere, just not animated. Headless
/// hosts and tests rarely want anything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateAnimator;

impl Animator for ImmediateAnimator {
    fn animate(&self, _duration: f64, _options: AnimationOptions, changes: &mut dyn FnMut()) {
        changes();
    }
}

// ── Transition ────────────────────────────────────────────────────────────────

/// A timed interpolation between two values.
///
/// Pure description, no clock: hosts sample `value_at` from their own render
/// loop. A zero (or negative) duration jumps straight to the target, which is
/// exactly what a keyboard notification with a missing duration degrades to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: f64,
    pub to: f64,
    /// Seconds.
    pub duration: f64,
    pub curve: AnimationCurve,
}

impl Transition {
    pub fn new(from: f64, to: f64, duration: f64, curve: AnimationCurve) -> Self {
        Self {
            from,
            to,
            duration,
            curve,
        }
    }

    /// Interpolated value after `elapsed` seconds.
    pub fn value_at(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 || elapsed >= self.duration {
            return self.to;
        }
        if elapsed <= 0.0 {
            return self.from;
        }
        let progress = self.curve.progress(elapsed / self.duration);
        self.from + (self.to - self.from) * progress
    }

    /// Returns `true` once `elapsed` has reached the duration.
    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.duration
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
