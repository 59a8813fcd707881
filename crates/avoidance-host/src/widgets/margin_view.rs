//! A plain view whose layout margins dodge the keyboard.

use std::cell::RefCell;
use std::rc::Rc;

use avoidance_core::{
    Animator, Container, ContainerRef, EdgeInsets, KeyboardAvoider, NotificationHub, Rect,
};

use super::AvoidingWidget;

/// Mutable layout state of a [`MarginView`].
#[derive(Debug)]
pub struct MarginState {
    frame: Rect,
    margins: EdgeInsets,
    layout_passes: u32,
}

impl Container for MarginState {
    fn convert_from_window(&self, rect: Rect) -> Rect {
        rect.offset_by(-self.frame.x, -self.frame.y)
    }

    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.frame.width, self.frame.height)
    }

    fn insets(&self) -> EdgeInsets {
        self.margins
    }

    fn set_insets(&mut self, insets: EdgeInsets) {
        self.margins = insets;
        self.layout_passes += 1;
    }
}

/// View that keeps its content above the keyboard by growing its bottom
/// layout margin.
pub struct MarginView {
    state: Rc<RefCell<MarginState>>,
    avoider: KeyboardAvoider,
}

impl MarginView {
    /// View at `frame` (window coordinates) with base `margins`.
    pub fn new(hub: NotificationHub, frame: Rect, margins: EdgeInsets) -> Self {
        let state = Rc::new(RefCell::new(MarginState {
            frame,
            margins,
            layout_passes: 0,
        }));
        let avoider = KeyboardAvoider::new(hub, Rc::clone(&state) as ContainerRef);
        Self { state, avoider }
    }

    /// Same as [`new`](Self::new), routing adjustments through `animator`.
    pub fn with_animator(
        hub: NotificationHub,
        frame: Rect,
        margins: EdgeInsets,
        animator: Rc<dyn Animator>,
    ) -> Self {
        let state = Rc::new(RefCell::new(MarginState {
            frame,
            margins,
            layout_passes: 0,
        }));
        let avoider =
            KeyboardAvoider::with_animator(hub, Rc::clone(&state) as ContainerRef, animator);
        Self { state, avoider }
    }

    pub fn frame(&self) -> Rect {
        self.state.borrow().frame
    }

    /// Current layout margins, including any keyboard adjustment.
    pub fn margins(&self) -> EdgeInsets {
        self.state.borrow().margins
    }

    /// Number of layout passes triggered by margin writes.
    pub fn layout_passes(&self) -> u32 {
        self.state.borrow().layout_passes
    }
}

impl AvoidingWidget for MarginView {
    fn avoider(&self) -> &KeyboardAvoider {
        &self.avoider
    }

    fn avoider_mut(&mut self) -> &mut KeyboardAvoider {
        &mut self.avoider
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
