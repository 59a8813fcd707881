//! Edge insets: the mutable padding record the avoider adjusts.

use serde::{Deserialize, Serialize};

/// Padding applied inside each edge of a container.
///
/// The avoider only ever touches `bottom`; the other three edges belong to
/// whoever configured the container and are carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    /// No padding on any edge.
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same padding on all four edges.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
