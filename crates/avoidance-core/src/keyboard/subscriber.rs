//! Subscription lifetime management for keyboard events.
//!
//! A [`KeyboardSubscriber`] registers one observer per selected event kind on
//! a [`NotificationHub`] and owns the resulting handles. Re-subscribing
//! replaces the previous registrations, and dropping the subscriber removes
//! them from the hub, so observers never outlive the component that created
//! them.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, trace};

use super::events::{KeyboardEventInfo, KeyboardEventKind};
use crate::geometry::Rect;
use crate::notify::{NotificationHub, ObserverHandle};

/// Handler invoked with the normalized record of each observed event.
pub type EventHandler = Rc<dyn Fn(&KeyboardEventInfo)>;

/// Owns hub registrations for a set of keyboard event kinds.
///
/// Also tracks the keyboard's most recent end frame across every event it
/// observes, available from [`keyboard_frame`](Self::keyboard_frame) between
/// notifications.
pub struct KeyboardSubscriber {
    hub: NotificationHub,
    observers: Vec<ObserverHandle>,
    keyboard_frame: Rc<Cell<Rect>>,
}

impl KeyboardSubscriber {
    pub fn new(hub: NotificationHub) -> Self {
        Self {
            hub,
            observers: Vec::new(),
            keyboard_frame: Rc::new(Cell::new(Rect::ZERO)),
        }
    }

    /// The keyboard's end frame from the most recent observed event,
    /// `Rect::ZERO` before any event arrives.
    pub fn keyboard_frame(&self) -> Rect {
        self.keyboard_frame.get()
    }

    /// Registers observers for every kind selected in `kinds`.
    ///
    /// Any previous registrations are removed first, so calling this twice
    /// never double-delivers. An empty mask just clears the subscription.
    /// Passing `None` for the handler still tracks the keyboard frame.
    pub fn subscribe(&mut self, kinds: KeyboardEventKind, handler: Option<EventHandler>) {
        self.unsubscribe();

        let mut observers = Vec::new();
        for (kind, name) in kinds.selected() {
            let handler = handler.clone();
            let frame = Rc::clone(&self.keyboard_frame);
            let handle = self.hub.add_observer(name, move |payload| {
                let info = KeyboardEventInfo::from_payload(payload, kind);
                frame.set(info.final_frame);
                trace!(notification = name, ?info.final_frame, "keyboard event");
                if let Some(handler) = &handler {
                    handler(&info);
                }
            });
            observers.push(handle);
        }

        debug!(kinds = kinds.0, observers = observers.len(), "subscribed");
        self.observers = observers;
    }

    /// Removes every registration owned by this subscriber. Idempotent.
    pub fn unsubscribe(&mut self) {
        for handle in self.observers.drain(..) {
            self.hub.remove_observer(handle);
        }
    }
}

impl Drop for KeyboardSubscriber {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::events::notifications;
    use serde_json::json;
    use std::cell::RefCell;

    /// Handler that appends each received event to a shared log.
    fn recording_handler(log: &Rc<RefCell<Vec<KeyboardEventInfo>>>) -> EventHandler {
        let log = Rc::clone(log);
        Rc::new(move |info| log.borrow_mut().push(info.clone()))
    }

    fn frame_payload(y: f64) -> serde_json::Value {
        json!({
            "frame_end": { "x": 0.0, "y": y, "width": 320.0, "height": 300.0 },
        })
    }

    #[test]
    fn test_subscribed_kind_delivers_exactly_once_per_post() {
        // Arrange
        let hub = NotificationHub::new();
        let mut subscriber = KeyboardSubscriber::new(hub.clone());
        let log = Rc::new(RefCell::new(Vec::new()));
        subscriber.subscribe(
            KeyboardEventKind::WILL_SHOW,
            Some(recording_handler(&log)),
        );

        // Act
        hub.post(notifications::WILL_SHOW, Some(&frame_payload(500.0)));

        // Assert
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0].kind, KeyboardEventKind::WILL_SHOW);
    }

    #[test]
    fn test_unselected_kinds_are_not_observed() {
        // Arrange
        let hub = NotificationHub::new();
        let mut subscriber = KeyboardSubscriber::new(hub.clone());
        let log = Rc::new(RefCell::new(Vec::new()));
        subscriber.subscribe(
            KeyboardEventKind::WILL_SHOW,
            Some(recording_handler(&log)),
        );

        // Act
        hub.post(notifications::DID_SHOW, None);
        hub.post(notifications::WILL_HIDE, None);

        // Assert
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_multi_kind_mask_tags_each_event_with_its_kind() {
        // Arrange
        let hub = NotificationHub::new();
        let mut subscriber = KeyboardSubscriber::new(hub.clone());
        let log = Rc::new(RefCell::new(Vec::new()));
        subscriber.subscribe(
            KeyboardEventKind::WILL_SHOW | KeyboardEventKind::WILL_HIDE,
            Some(recording_handler(&log)),
        );

        // Act
        hub.post(notifications::WILL_SHOW, None);
        hub.post(notifications::WILL_HIDE, None);

        // Assert
        let kinds: Vec<_> = log.borrow().iter().map(|info| info.kind).collect();
        assert_eq!(
            kinds,
            vec![KeyboardEventKind::WILL_SHOW, KeyboardEventKind::WILL_HIDE]
        );
    }

    #[test]
    fn test_resubscribe_replaces_previous_registrations() {
        // Arrange
        let hub = NotificationHub::new();
        let mut subscriber = KeyboardSubscriber::new(hub.clone());
        let log = Rc::new(RefCell::new(Vec::new()));
        subscriber.subscribe(
            KeyboardEventKind::WILL_SHOW,
            Some(recording_handler(&log)),
        );

        // Act: subscribe again with the same mask, then post once
        subscriber.subscribe(
            KeyboardEventKind::WILL_SHOW,
            Some(recording_handler(&log)),
        );
        hub.post(notifications::WILL_SHOW, None);

        // Assert: no double delivery from the stale registration
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(hub.observer_count(notifications::WILL_SHOW), 1);
    }

    #[test]
    fn test_empty_mask_clears_subscription() {
        // Arrange
        let hub = NotificationHub::new();
        let mut subscriber = KeyboardSubscriber::new(hub.clone());
        let log = Rc::new(RefCell::new(Vec::new()));
        subscriber.subscribe(KeyboardEventKind::ALL, Some(recording_handler(&log)));

        // Act
        subscriber.subscribe(KeyboardEventKind::default(), None);
        hub.post(notifications::WILL_SHOW, None);

        // Assert
        assert!(log.borrow().is_empty());
        assert_eq!(hub.observer_count(notifications::WILL_SHOW), 0);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        // Arrange
        let hub = NotificationHub::new();
        let mut subscriber = KeyboardSubscriber::new(hub.clone());
        subscriber.subscribe(KeyboardEventKind::ALL, None);

        // Act
        subscriber.unsubscribe();
        subscriber.unsubscribe();

        // Assert
        assert_eq!(hub.observer_count(notifications::WILL_SHOW), 0);
        assert_eq!(hub.observer_count(notifications::WILL_CHANGE_FRAME), 0);
    }

    #[test]
    fn test_none_handler_still_tracks_keyboard_frame() {
        // Arrange
        let hub = NotificationHub::new();
        let mut subscriber = KeyboardSubscriber::new(hub.clone());
        subscriber.subscribe(KeyboardEventKind::DID_CHANGE_FRAME, None);

        // Act
        hub.post(notifications::DID_CHANGE_FRAME, Some(&frame_payload(420.0)));

        // Assert
        assert_eq!(
            subscriber.keyboard_frame(),
            Rect::new(0.0, 420.0, 320.0, 300.0)
        );
    }

    #[test]
    fn test_keyboard_frame_follows_the_latest_event() {
        // Arrange
        let hub = NotificationHub::new();
        let mut subscriber = KeyboardSubscriber::new(hub.clone());
        subscriber.subscribe(KeyboardEventKind::WILL_CHANGE_FRAME, None);
        assert_eq!(subscriber.keyboard_frame(), Rect::ZERO);

        // Act
        hub.post(
            notifications::WILL_CHANGE_FRAME,
            Some(&frame_payload(500.0)),
        );
        hub.post(
            notifications::WILL_CHANGE_FRAME,
            Some(&frame_payload(560.0)),
        );

        // Assert
        assert_eq!(
            subscriber.keyboard_frame(),
            Rect::new(0.0, 560.0, 320.0, 300.0)
        );
    }

    #[test]
    fn test_drop_removes_observers_from_the_hub() {
        // Arrange
        let hub = NotificationHub::new();
        {
            let mut subscriber = KeyboardSubscriber::new(hub.clone());
            subscriber.subscribe(KeyboardEventKind::ALL, None);
            assert_eq!(hub.observer_count(notifications::WILL_SHOW), 1);
        }

        // Assert: subscriber went out of scope, registrations are gone
        assert_eq!(hub.observer_count(notifications::WILL_SHOW), 0);
        assert_eq!(hub.observer_count(notifications::DID_HIDE), 0);
    }
}
