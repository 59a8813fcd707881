//! Recording container for unit testing.
//!
//! A minimal [`Container`] backed by a window-space frame. Coordinate
//! conversion is a plain translation by the frame origin, and every inset
//! write is recorded so tests can assert on the exact sequence of
//! adjustments a component produced.

use super::avoider::Container;
use crate::geometry::{EdgeInsets, Rect};

/// Container double with a fixed frame and an inset write history.
#[derive(Debug, Default)]
pub struct RecordingContainer {
    frame: Rect,
    insets: EdgeInsets,
    inset_writes: Vec<EdgeInsets>,
}

impl RecordingContainer {
    /// Container occupying `frame` (window coordinates) with zero insets.
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    /// Container occupying `frame` with pre-existing base insets.
    pub fn with_insets(frame: Rect, insets: EdgeInsets) -> Self {
        Self {
            frame,
            insets,
            inset_writes: Vec::new(),
        }
    }

    /// Every inset value written through [`Container::set_insets`], oldest
    /// first.
    pub fn inset_writes(&self) -> Vec<EdgeInsets> {
        self.inset_writes.clone()
    }

    pub fn write_count(&self) -> usize {
        self.inset_writes.len()
    }

    pub fn last_write(&self) -> Option<EdgeInsets> {
        self.inset_writes.last().copied()
    }
}

impl Container for RecordingContainer {
    fn convert_from_window(&self, rect: Rect) -> Rect {
        rect.offset_by(-self.frame.x, -self.frame.y)
    }

    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.frame.width, self.frame.height)
    }

    fn insets(&self) -> EdgeInsets {
        self.insets
    }

    fn set_insets(&mut self, insets: EdgeInsets) {
        self.insets = insets;
        self.inset_writes.push(insets);
    }
}
