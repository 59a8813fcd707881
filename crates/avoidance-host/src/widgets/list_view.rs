//! A fixed-row-height list whose viewport shrinks above the keyboard.

use std::cell::RefCell;
use std::rc::Rc;

use avoidance_core::{
    Container, ContainerRef, EdgeInsets, KeyboardAvoider, NotificationHub, Rect,
};

use super::AvoidingWidget;

/// Mutable state of a [`ListView`].
#[derive(Debug)]
pub struct ListState {
    frame: Rect,
    content_insets: EdgeInsets,
    indicator_insets: EdgeInsets,
    row_height: f64,
    row_count: usize,
}

impl Container for ListState {
    fn convert_from_window(&self, rect: Rect) -> Rect {
        rect.offset_by(-self.frame.x, -self.frame.y)
    }

    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.frame.width, self.frame.height)
    }

    fn insets(&self) -> EdgeInsets {
        self.content_insets
    }

    // A list is a scrollable surface, so the scroll indicator tracks the
    // content inset just like it does on a plain scroll view.
    fn set_insets(&mut self, insets: EdgeInsets) {
        self.content_insets = insets;
        self.indicator_insets = insets;
    }
}

/// List of fixed-height rows that avoids the keyboard via its content inset.
///
/// [`visible_rows`](Self::visible_rows) reports how many rows fit in the part
/// of the viewport the keyboard leaves uncovered, which is what a host would
/// use to decide what to render.
pub struct ListView {
    state: Rc<RefCell<ListState>>,
    avoider: KeyboardAvoider,
}

impl ListView {
    pub fn new(hub: NotificationHub, frame: Rect, row_height: f64, row_count: usize) -> Self {
        let state = Rc::new(RefCell::new(ListState {
            frame,
            content_insets: EdgeInsets::ZERO,
            indicator_insets: EdgeInsets::ZERO,
            row_height,
            row_count,
        }));
        let avoider = KeyboardAvoider::new(hub, Rc::clone(&state) as ContainerRef);
        Self { state, avoider }
    }

    pub fn frame(&self) -> Rect {
        self.state.borrow().frame
    }

    pub fn content_insets(&self) -> EdgeInsets {
        self.state.borrow().content_insets
    }

    pub fn indicator_insets(&self) -> EdgeInsets {
        self.state.borrow().indicator_insets
    }

    pub fn row_count(&self) -> usize {
        self.state.borrow().row_count
    }

    /// Rows fully visible in the viewport after insets, capped at the row
    /// count. A non-positive row height yields zero.
    pub fn visible_rows(&self) -> usize {
        let state = self.state.borrow();
        if state.row_height <= 0.0 {
            return 0;
        }
        let viewport =
            state.frame.height - state.content_insets.top - state.content_insets.bottom;
        if viewport <= 0.0 {
            return 0;
        }
        let fitting = (viewport / state.row_height).floor() as usize;
        fitting.min(state.row_count)
    }
}

impl AvoidingWidget for ListView {
    fn avoider(&self) -> &KeyboardAvoider {
        &self.avoider
    }

    fn avoider_mut(&mut self) -> &mut KeyboardAvoider {
        &mut self.avoider
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
