//! Inset avoidance: resizing a container's bottom inset to dodge the keyboard.
//!
//! The [`KeyboardAvoider`] sits between a [`KeyboardSubscriber`] and a
//! [`Container`]. While active it observes frame-change events, converts the
//! keyboard's end frame into the container's coordinate space, intersects it
//! with the container bounds, and animates the bottom inset to the overlap
//! height. Starting and stopping only toggles the subscription; the inset
//! adjustment itself persists until the next frame-change event rewrites it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;

use super::events::KeyboardEventKind;
use super::subscriber::{EventHandler, KeyboardSubscriber};
use crate::animation::{AnimationOptions, Animator, ImmediateAnimator};
use crate::geometry::{EdgeInsets, Rect};
use crate::notify::NotificationHub;

/// Capabilities the avoider needs from a host container.
///
/// Implemented by widget state types; the avoider holds a shared handle and
/// never owns the widget itself.
#[cfg_attr(test, mockall::automock)]
pub trait Container {
    /// Converts a rect from window coordinates into this container's
    /// coordinate space.
    fn convert_from_window(&self, rect: Rect) -> Rect;

    /// This container's bounds in its own coordinate space.
    fn bounds(&self) -> Rect;

    /// Current edge insets.
    fn insets(&self) -> EdgeInsets;

    /// Replaces the edge insets.
    fn set_insets(&mut self, insets: EdgeInsets);
}

/// Shared handle to a container's state.
pub type ContainerRef = Rc<RefCell<dyn Container>>;

/// Container handle plus the overlap currently folded into its bottom inset.
///
/// Shared between the avoider and its event handler.
struct AdjustmentState {
    container: ContainerRef,
    overlap_height: Cell<f64>,
}

impl AdjustmentState {
    /// Replaces the tracked overlap and rewrites the container's bottom
    /// inset in a single write: the previous overlap is subtracted before
    /// the new one is added, so consecutive keyboard frames never stack and
    /// the base inset underneath is preserved.
    fn set_overlap_height(&self, height: f64) {
        let mut container = self.container.borrow_mut();
        let mut insets = container.insets();
        insets.bottom -= self.overlap_height.get();
        self.overlap_height.set(height);
        insets.bottom += height;
        container.set_insets(insets);
    }
}

/// Adjusts a container's bottom inset to track keyboard overlap.
pub struct KeyboardAvoider {
    subscriber: KeyboardSubscriber,
    animator: Rc<dyn Animator>,
    state: Rc<AdjustmentState>,
}

impl KeyboardAvoider {
    /// Avoider applying adjustments immediately, with no visual transition.
    pub fn new(hub: NotificationHub, container: ContainerRef) -> Self {
        Self::with_animator(hub, container, Rc::new(ImmediateAnimator))
    }

    /// Avoider scheduling each adjustment through the given animator.
    pub fn with_animator(
        hub: NotificationHub,
        container: ContainerRef,
        animator: Rc<dyn Animator>,
    ) -> Self {
        Self {
            subscriber: KeyboardSubscriber::new(hub),
            animator,
            state: Rc::new(AdjustmentState {
                container,
                overlap_height: Cell::new(0.0),
            }),
        }
    }

    /// Overlap currently folded into the container's bottom inset.
    pub fn overlap_height(&self) -> f64 {
        self.state.overlap_height.get()
    }

    /// Directly rewrites the adjustment, bypassing the event path.
    pub fn set_overlap_height(&self, height: f64) {
        self.state.set_overlap_height(height);
    }

    /// The subscriber driving this avoider.
    pub fn subscriber(&self) -> &KeyboardSubscriber {
        &self.subscriber
    }

    /// Begins observing frame-change events and adjusting the container.
    ///
    /// Safe to call while already active: the subscription is replaced, not
    /// doubled.
    pub fn start_subscribing(&mut self) {
        let handler: EventHandler = {
            let state = Rc::clone(&self.state);
            let animator = Rc::clone(&self.animator);
            Rc::new(move |info| {
                // Read-phase borrow ends before the inset write begins.
                let overlap = {
                    let container = state.container.borrow();
                    let converted = container.convert_from_window(info.final_frame);
                    container.bounds().intersection(&converted)
                };
                let options = AnimationOptions::from_curve(info.animation_curve);
                debug!(
                    overlap_height = overlap.height,
                    duration = info.animation_duration,
                    "avoiding keyboard"
                );
                animator.animate(info.animation_duration, options, &mut || {
                    state.set_overlap_height(overlap.height);
                });
            })
        };
        self.subscriber
            .subscribe(KeyboardEventKind::WILL_CHANGE_FRAME, Some(handler));
        debug!("avoider active");
    }

    /// Stops observing keyboard events.
    ///
    /// The current adjustment stays in place: a container that stops
    /// avoiding mid-show keeps its inset until something rewrites it.
    pub fn stop_subscribing(&mut self) {
        self.subscriber.unsubscribe();
        debug!("avoider idle");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::mock::RecordingAnimator;
    use crate::animation::AnimationCurve;
    use crate::keyboard::events::notifications;
    use crate::keyboard::mock::RecordingContainer;
    use serde_json::{json, Value};

    /// Container occupying the lower half of a 320x800 window, with a base
    /// bottom inset of 10.
    fn lower_half_container() -> Rc<RefCell<RecordingContainer>> {
        Rc::new(RefCell::new(RecordingContainer::with_insets(
            Rect::new(0.0, 400.0, 320.0, 400.0),
            EdgeInsets::new(0.0, 0.0, 10.0, 0.0),
        )))
    }

    fn will_change_payload(frame_end_y: f64, height: f64) -> Value {
        json!({
            "frame_end": { "x": 0.0, "y": frame_end_y, "width": 320.0, "height": height },
            "animation_duration": 0.25,
            "animation_curve": 3,
        })
    }

    #[test]
    fn test_keyboard_overlap_raises_the_bottom_inset() {
        // Arrange
        let hub = NotificationHub::new();
        let container = lower_half_container();
        let container_ref: ContainerRef = Rc::clone(&container) as ContainerRef;
        let mut avoider = KeyboardAvoider::new(hub.clone(), container_ref);
        avoider.start_subscribing();

        // Act: keyboard rises to cover the container's lower 300 points
        hub.post(
            notifications::WILL_CHANGE_FRAME,
            Some(&will_change_payload(500.0, 300.0)),
        );

        // Assert: bottom = 10 base + 300 overlap, other edges untouched
        let insets = container.borrow().insets();
        assert_eq!(insets.bottom, 310.0);
        assert_eq!(insets.top, 0.0);
        assert_eq!(insets.left, 0.0);
        assert_eq!(insets.right, 0.0);
        assert_eq!(avoider.overlap_height(), 300.0);
    }

    #[test]
    fn test_consecutive_frames_do_not_accumulate() {
        // Arrange
        let hub = NotificationHub::new();
        let container = lower_half_container();
        let mut avoider =
            KeyboardAvoider::new(hub.clone(), Rc::clone(&container) as ContainerRef);
        avoider.start_subscribing();

        // Act: three frame changes in a row
        hub.post(
            notifications::WILL_CHANGE_FRAME,
            Some(&will_change_payload(500.0, 300.0)),
        );
        hub.post(
            notifications::WILL_CHANGE_FRAME,
            Some(&will_change_payload(560.0, 240.0)),
        );
        hub.post(
            notifications::WILL_CHANGE_FRAME,
            Some(&will_change_payload(500.0, 300.0)),
        );

        // Assert: bottom reflects only the latest overlap
        assert_eq!(container.borrow().insets().bottom, 310.0);
        assert_eq!(avoider.overlap_height(), 300.0);
    }

    #[test]
    fn test_offscreen_keyboard_restores_the_base_inset() {
        // Arrange: keyboard shown first
        let hub = NotificationHub::new();
        let container = lower_half_container();
        let mut avoider =
            KeyboardAvoider::new(hub.clone(), Rc::clone(&container) as ContainerRef);
        avoider.start_subscribing();
        hub.post(
            notifications::WILL_CHANGE_FRAME,
            Some(&will_change_payload(500.0, 300.0)),
        );

        // Act: keyboard slides below the window (y == window height)
        hub.post(
            notifications::WILL_CHANGE_FRAME,
            Some(&will_change_payload(800.0, 300.0)),
        );

        // Assert: converted frame only touches the bounds edge, overlap is zero
        assert_eq!(container.borrow().insets().bottom, 10.0);
        assert_eq!(avoider.overlap_height(), 0.0);
    }

    #[test]
    fn test_keyboard_over_another_view_leaves_insets_alone() {
        // Arrange: container in the upper half, keyboard stays below it
        let hub = NotificationHub::new();
        let container = Rc::new(RefCell::new(RecordingContainer::new(Rect::new(
            0.0, 0.0, 320.0, 400.0,
        ))));
        let mut avoider =
            KeyboardAvoider::new(hub.clone(), Rc::clone(&container) as ContainerRef);
        avoider.start_subscribing();

        // Act
        hub.post(
            notifications::WILL_CHANGE_FRAME,
            Some(&will_change_payload(500.0, 300.0)),
        );

        // Assert: adjustment ran but the overlap was zero
        assert_eq!(container.borrow().insets().bottom, 0.0);
        assert_eq!(avoider.overlap_height(), 0.0);
    }

    #[test]
    fn test_stop_subscribing_keeps_the_last_adjustment() {
        // Arrange: keyboard shown, inset raised
        let hub = NotificationHub::new();
        let container = lower_half_container();
        let mut avoider =
            KeyboardAvoider::new(hub.clone(), Rc::clone(&container) as ContainerRef);
        avoider.start_subscribing();
        hub.post(
            notifications::WILL_CHANGE_FRAME,
            Some(&will_change_payload(500.0, 300.0)),
        );

        // Act
        avoider.stop_subscribing();

        // Assert: the adjustment is still there
        assert_eq!(container.borrow().insets().bottom, 310.0);
        assert_eq!(avoider.overlap_height(), 300.0);
    }

    #[test]
    fn test_events_after_stop_do_not_move_insets() {
        // Arrange
        let hub = NotificationHub::new();
        let container = lower_half_container();
        let mut avoider =
            KeyboardAvoider::new(hub.clone(), Rc::clone(&container) as ContainerRef);
        avoider.start_subscribing();
        hub.post(
            notifications::WILL_CHANGE_FRAME,
            Some(&will_change_payload(500.0, 300.0)),
        );
        avoider.stop_subscribing();
        let writes_before = container.borrow().write_count();

        // Act
        hub.post(
            notifications::WILL_CHANGE_FRAME,
            Some(&will_change_payload(800.0, 300.0)),
        );

        // Assert: no further writes reached the container
        assert_eq!(container.borrow().write_count(), writes_before);
        assert_eq!(container.borrow().insets().bottom, 310.0);
    }

    #[test]
    fn test_restart_does_not_double_deliver() {
        // Arrange
        let hub = NotificationHub::new();
        let container = lower_half_container();
        let mut avoider =
            KeyboardAvoider::new(hub.clone(), Rc::clone(&container) as ContainerRef);

        // Act: start twice, then one event
        avoider.start_subscribing();
        avoider.start_subscribing();
        hub.post(
            notifications::WILL_CHANGE_FRAME,
            Some(&will_change_payload(500.0, 300.0)),
        );

        // Assert: exactly one inset write
        assert_eq!(container.borrow().write_count(), 1);
        assert_eq!(container.borrow().insets().bottom, 310.0);
    }

    #[test]
    fn test_only_frame_change_events_drive_the_avoider() {
        // Arrange
        let hub = NotificationHub::new();
        let container = lower_half_container();
        let mut avoider =
            KeyboardAvoider::new(hub.clone(), Rc::clone(&container) as ContainerRef);
        avoider.start_subscribing();

        // Act: show/hide notifications without a frame change
        hub.post(
            notifications::WILL_SHOW,
            Some(&will_change_payload(500.0, 300.0)),
        );
        hub.post(notifications::DID_SHOW, None);
        hub.post(notifications::WILL_HIDE, None);

        // Assert
        assert_eq!(container.borrow().write_count(), 0);
    }

    #[test]
    fn test_animator_receives_duration_and_curve() {
        // Arrange
        let hub = NotificationHub::new();
        let container = lower_half_container();
        let animator = Rc::new(RecordingAnimator::new());
        let mut avoider = KeyboardAvoider::with_animator(
            hub.clone(),
            Rc::clone(&container) as ContainerRef,
            Rc::clone(&animator) as Rc<dyn Animator>,
        );
        avoider.start_subscribing();

        // Act
        hub.post(
            notifications::WILL_CHANGE_FRAME,
            Some(&will_change_payload(500.0, 300.0)),
        );

        // Assert: payload carried duration 0.25 and raw curve 3 (linear)
        assert_eq!(
            animator.last_call(),
            Some((0.25, AnimationOptions::from_curve(AnimationCurve::Linear)))
        );
        // The change itself was applied synchronously.
        assert_eq!(container.borrow().insets().bottom, 310.0);
    }

    #[test]
    fn test_missing_payload_animates_to_zero_overlap() {
        // Arrange: adjustment in place, then a payload-less event arrives
        let hub = NotificationHub::new();
        let container = lower_half_container();
        let animator = Rc::new(RecordingAnimator::new());
        let mut avoider = KeyboardAvoider::with_animator(
            hub.clone(),
            Rc::clone(&container) as ContainerRef,
            Rc::clone(&animator) as Rc<dyn Animator>,
        );
        avoider.start_subscribing();
        hub.post(
            notifications::WILL_CHANGE_FRAME,
            Some(&will_change_payload(500.0, 300.0)),
        );

        // Act
        hub.post(notifications::WILL_CHANGE_FRAME, None);

        // Assert: zero rect, zero duration, linear curve
        assert_eq!(container.borrow().insets().bottom, 10.0);
        assert_eq!(
            animator.last_call(),
            Some((0.0, AnimationOptions::from_curve(AnimationCurve::Linear)))
        );
    }

    #[test]
    fn test_set_overlap_height_preserves_the_base_inset() {
        // Arrange
        let hub = NotificationHub::new();
        let container = lower_half_container();
        let avoider = KeyboardAvoider::new(hub, Rc::clone(&container) as ContainerRef);

        // Act: rewrite the adjustment twice, directly
        avoider.set_overlap_height(300.0);
        avoider.set_overlap_height(200.0);

        // Assert: each write replaced the previous overlap above the base 10
        let writes = container.borrow().inset_writes();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].bottom, 310.0);
        assert_eq!(writes[1].bottom, 210.0);
    }

    #[test]
    fn test_adjustment_writes_insets_exactly_once_per_event() {
        // Arrange: a strict double checks the single write-back
        let mut mock = MockContainer::new();
        mock.expect_convert_from_window()
            .returning(|rect| rect.offset_by(0.0, -400.0));
        mock.expect_bounds()
            .return_const(Rect::new(0.0, 0.0, 320.0, 400.0));
        mock.expect_insets().return_const(EdgeInsets::ZERO);
        mock.expect_set_insets()
            .with(mockall::predicate::eq(EdgeInsets::new(
                0.0, 0.0, 300.0, 0.0,
            )))
            .times(1)
            .return_const(());

        let hub = NotificationHub::new();
        let container = Rc::new(RefCell::new(mock));
        let mut avoider =
            KeyboardAvoider::new(hub.clone(), Rc::clone(&container) as ContainerRef);
        avoider.start_subscribing();

        // Act
        hub.post(
            notifications::WILL_CHANGE_FRAME,
            Some(&will_change_payload(500.0, 300.0)),
        );

        // Assert: expectations verified on drop
    }
}
