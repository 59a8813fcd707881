//! A scrollable view whose content insets dodge the keyboard.

use std::cell::RefCell;
use std::rc::Rc;

use avoidance_core::{
    Animator, Container, ContainerRef, EdgeInsets, KeyboardAvoider, NotificationHub, Rect,
};

use super::AvoidingWidget;

/// Mutable state of a [`ScrollView`].
///
/// The scroll indicators track the content insets: whatever the avoider
/// writes is mirrored to both, so the indicator never disappears behind the
/// keyboard either.
#[derive(Debug)]
pub struct ScrollState {
    frame: Rect,
    content_insets: EdgeInsets,
    indicator_insets: EdgeInsets,
}

impl Container for ScrollState {
    fn convert_from_window(&self, rect: Rect) -> Rect {
        rect.offset_by(-self.frame.x, -self.frame.y)
    }

    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.frame.width, self.frame.height)
    }

    fn insets(&self) -> EdgeInsets {
        self.content_insets
    }

    fn set_insets(&mut self, insets: EdgeInsets) {
        self.content_insets = insets;
        self.indicator_insets = insets;
    }
}

/// Scrollable view that grows its bottom content inset to keep content
/// reachable above the keyboard.
pub struct ScrollView {
    state: Rc<RefCell<ScrollState>>,
    avoider: KeyboardAvoider,
}

impl ScrollView {
    pub fn new(hub: NotificationHub, frame: Rect) -> Self {
        let state = Rc::new(RefCell::new(ScrollState {
            frame,
            content_insets: EdgeInsets::ZERO,
            indicator_insets: EdgeInsets::ZERO,
        }));
        let avoider = KeyboardAvoider::new(hub, Rc::clone(&state) as ContainerRef);
        Self { state, avoider }
    }

    /// Same as [`new`](Self::new), routing adjustments through `animator`.
    pub fn with_animator(
        hub: NotificationHub,
        frame: Rect,
        animator: Rc<dyn Animator>,
    ) -> Self {
        let state = Rc::new(RefCell::new(ScrollState {
            frame,
            content_insets: EdgeInsets::ZERO,
            indicator_insets: EdgeInsets::ZERO,
        }));
        let avoider =
            KeyboardAvoider::with_animator(hub, Rc::clone(&state) as ContainerRef, animator);
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
}

impl AvoidingWidget for ScrollView {
    fn avoider(&self) -> &KeyboardAvoider {
        &self.avoider
    }

    fn avoider_mut(&mut self) -> &mut KeyboardAvoider {
        &mut self.avoider
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
