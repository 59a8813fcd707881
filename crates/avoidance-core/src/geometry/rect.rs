//! Axis-aligned rectangles in f64 coordinates.
//!
//! The coordinate convention follows the usual UI layout one: the origin is
//! the top-left corner, `x` grows rightward and `y` grows downward, so the
//! keyboard sits at large `y` values near the bottom of the window.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: origin at (`x`, `y`) with non-negative extent.
///
/// Rectangles arrive from notification payloads, so construction never
/// validates; a malformed payload simply fails to deserialize and the caller
/// falls back to [`Rect::ZERO`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// The zero rectangle: origin (0, 0), no extent.
    ///
    /// Doubles as the "empty" value: a disjoint intersection and a missing
    /// payload frame both map to it.
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns `true` if the rectangle encloses no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Returns this rectangle translated by (`dx`, `dy`).
    ///
    /// This is the whole of coordinate conversion between parallel (unscaled,
    /// unrotated) coordinate spaces: converting a window-space rectangle into
    /// a view's local space offsets it by the negated view origin.
    pub fn offset_by(&self, dx: f64, dy: f64) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// Intersection of two rectangles.
    ///
    /// The result always has non-negative extent. Disjoint or merely
    /// edge-touching rectangles produce [`Rect::ZERO`]; there is no "null"
    /// rectangle value to propagate.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= x || bottom <= y {
            return Rect::ZERO;
        }

        Rect {
            x,
            y,
            width: right - x,
            height: bottom - y,
        }
    }
}

impl Default for Rect {
    fn default() -> Self {
        Rect::ZERO
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
