//! Animation curve identifiers and the options word derived from them.

use serde::{Deserialize, Serialize};

/// Enumerated easing identifier, raw-value compatible with the platform's
/// curve ids as they appear in notification payloads.
///
/// Payloads have been observed to carry raw values outside this range (7 in
/// the wild); normalization maps those to [`AnimationCurve::Linear`] rather
/// than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum AnimationCurve {
    EaseInOut = 0,
    EaseIn = 1,
    EaseOut = 2,
    Linear = 3,
}

impl AnimationCurve {
    /// Eased progress for normalized time `t`.
    ///
    /// `t` is clamped to `[0, 1]`; the result is `0` at the start and `1` at
    /// the end for every curve. Cubic easing matches the usual UI toolkit
    /// shapes.
    pub fn progress(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            AnimationCurve::Linear => t,
            AnimationCurve::EaseIn => t * t * t,
            AnimationCurve::EaseOut => 1.0 - (1.0 - t).powi(3),
            AnimationCurve::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

impl TryFrom<i64> for AnimationCurve {
    type Error = ();

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AnimationCurve::EaseInOut),
            1 => Ok(AnimationCurve::EaseIn),
            2 => Ok(AnimationCurve::EaseOut),
            3 => Ok(AnimationCurve::Linear),
            _ => Err(()),
        }
    }
}

// ── Animation options word ────────────────────────────────────────────────────

/// Platform-style animation options bitmask.
///
/// The curve identifier occupies bits 16..20 of the word, matching how UI
/// toolkits pack a curve into their animation-options type. The avoider
/// derives one of these per event and passes it to the [`Animator`]
/// unchanged.
///
/// [`Animator`]: super::transition::Animator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationOptions(pub u32);

impl AnimationOptions {
    /// Bit offset of the curve identifier within the options word.
    pub const CURVE_SHIFT: u32 = 16;
    /// Mask covering the curve bits.
    pub const CURVE_MASK: u32 = 0xF << Self::CURVE_SHIFT;

    /// Packs `curve` into an otherwise-empty options word.
    pub fn from_curve(curve: AnimationCurve) -> Self {
        Self((curve as u32) << Self::CURVE_SHIFT)
    }

    /// Extracts the curve from the options word.
    ///
    /// Unmappable raw values fall back to [`AnimationCurve::Linear`], the
    /// same degradation event normalization uses.
    pub fn curve(self) -> AnimationCurve {
        let raw = ((self.0 & Self::CURVE_MASK) >> Self::CURVE_SHIFT) as i64;
        AnimationCurve::try_from(raw).unwrap_or(AnimationCurve::Linear)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
