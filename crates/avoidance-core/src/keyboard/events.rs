//! Keyboard event kinds and typed event payloads.
//!
//! The platform layer posts keyboard notifications with loosely structured
//! JSON payloads. This module names those notifications, provides the bitmask
//! used to select which ones to observe, and normalizes a raw payload into a
//! [`KeyboardEventInfo`] with every field defaulted when absent or malformed.

use std::ops::{BitOr, BitOrAssign};

use serde_json::Value;

use crate::animation::AnimationCurve;
use crate::geometry::Rect;

// ── Notification names ────────────────────────────────────────────────────────

/// Well-known notification names posted by the platform keyboard.
pub mod notifications {
    pub const WILL_SHOW: &str = "keyboard.will_show";
    pub const DID_SHOW: &str = "keyboard.did_show";
    pub const WILL_HIDE: &str = "keyboard.will_hide";
    pub const DID_HIDE: &str = "keyboard.did_hide";
    pub const WILL_CHANGE_FRAME: &str = "keyboard.will_change_frame";
    pub const DID_CHANGE_FRAME: &str = "keyboard.did_change_frame";
}

/// Keys looked up in a keyboard notification payload.
pub mod payload_keys {
    /// Keyboard frame before the transition, in window coordinates.
    pub const FRAME_BEGIN: &str = "frame_begin";
    /// Keyboard frame after the transition, in window coordinates.
    pub const FRAME_END: &str = "frame_end";
    /// Transition duration in seconds.
    pub const ANIMATION_DURATION: &str = "animation_duration";
    /// Raw animation curve value, see [`AnimationCurve`](crate::AnimationCurve).
    pub const ANIMATION_CURVE: &str = "animation_curve";
}

// ── Event kinds ───────────────────────────────────────────────────────────────

/// Bitmask of keyboard lifecycle events.
///
/// Combine flags with `|` to subscribe to several events at once:
///
/// ```
/// use avoidance_core::KeyboardEventKind;
///
/// let kinds = KeyboardEventKind::WILL_SHOW | KeyboardEventKind::WILL_HIDE;
/// assert!(kinds.contains(KeyboardEventKind::WILL_SHOW));
/// assert!(!kinds.contains(KeyboardEventKind::DID_SHOW));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardEventKind(pub u8);

impl KeyboardEventKind {
    pub const WILL_CHANGE_FRAME: Self = Self(1 << 0);
    pub const DID_CHANGE_FRAME: Self = Self(1 << 1);
    pub const WILL_SHOW: Self = Self(1 << 2);
    pub const DID_SHOW: Self = Self(1 << 3);
    pub const WILL_HIDE: Self = Self(1 << 4);
    pub const DID_HIDE: Self = Self(1 << 5);

    /// All six lifecycle events.
    pub const ALL: Self = Self(0b0011_1111);

    /// Each single-flag kind paired with its notification name, in flag order.
    const FLAG_NAMES: [(Self, &'static str); 6] = [
        (Self::WILL_CHANGE_FRAME, notifications::WILL_CHANGE_FRAME),
        (Self::DID_CHANGE_FRAME, notifications::DID_CHANGE_FRAME),
        (Self::WILL_SHOW, notifications::WILL_SHOW),
        (Self::DID_SHOW, notifications::DID_SHOW),
        (Self::WILL_HIDE, notifications::WILL_HIDE),
        (Self::DID_HIDE, notifications::DID_HIDE),
    ];

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The single-flag kinds selected by this mask, each with its
    /// notification name.
    pub fn selected(self) -> Vec<(Self, &'static str)> {
        Self::FLAG_NAMES
            .iter()
            .copied()
            .filter(|(kind, _)| self.contains(*kind))
            .collect()
    }

    /// Notification name for a single-flag kind, `None` for empty or
    /// combined masks.
    pub fn notification_name(self) -> Option<&'static str> {
        Self::FLAG_NAMES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, name)| *name)
    }
}

impl BitOr for KeyboardEventKind {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for KeyboardEventKind {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

// ── Event info ────────────────────────────────────────────────────────────────

/// Typed view of one keyboard notification.
///
/// Built from the raw payload by [`KeyboardEventInfo::from_payload`]. Every
/// field degrades to a safe default when the payload is missing or malformed:
/// zero rects, zero duration, linear curve. There is no error path; a bad
/// payload yields an event that moves nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardEventInfo {
    /// Which lifecycle event produced this record (always a single flag).
    pub kind: KeyboardEventKind,
    /// Keyboard frame before the transition, in window coordinates.
    pub initial_frame: Rect,
    /// Keyboard frame after the transition, in window coordinates.
    pub final_frame: Rect,
    /// Transition duration in seconds, `0.0` when absent.
    pub animation_duration: f64,
    /// Animation curve, [`AnimationCurve::Linear`] when absent or unknown.
    pub animation_curve: AnimationCurve,
}

impl KeyboardEventInfo {
    /// Normalizes a raw notification payload.
    ///
    /// `payload` is the JSON object attached to the notification, or `None`
    /// when the notification carried no payload at all.
    pub fn from_payload(payload: Option<&Value>, kind: KeyboardEventKind) -> Self {
        Self {
            kind,
            initial_frame: rect_field(payload, payload_keys::FRAME_BEGIN),
            final_frame: rect_field(payload, payload_keys::FRAME_END),
            animation_duration: duration_field(payload),
            animation_curve: curve_field(payload),
        }
    }
}

fn rect_field(payload: Option<&Value>, key: &str) -> Rect {
    payload
        .and_then(|p| p.get(key))
        .and_then(|v| serde_json::from_value::<Rect>(v.clone()).ok())
        .unwrap_or(Rect::ZERO)
}

fn duration_field(payload: Option<&Value>) -> f64 {
    payload
        .and_then(|p| p.get(payload_keys::ANIMATION_DURATION))
        .and_then(Value::as_f64)
        .filter(|d| *d >= 0.0)
        .unwrap_or(0.0)
}

fn curve_field(payload: Option<&Value>) -> AnimationCurve {
    payload
        .and_then(|p| p.get(payload_keys::ANIMATION_CURVE))
        .and_then(Value::as_i64)
        .and_then(|raw| AnimationCurve::try_from(raw).ok())
        .unwrap_or(AnimationCurve::Linear)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
