//! Scripted soft keyboard posting lifecycle notifications.
//!
//! Mimics the platform keyboard's behavior: every geometry change posts a
//! `will_change_frame`/`did_change_frame` pair, and show/hide additionally
//! post their own will/did notifications, in the order a real platform
//! does:
//!
//! ```text
//! show:        will_change_frame, will_show, did_change_frame, did_show
//! hide:        will_change_frame, will_hide, did_change_frame, did_hide
//! set_height:  will_change_frame, did_change_frame          (while shown)
//! ```
//!
//! Payloads carry the begin/end frames in window coordinates plus the
//! animation duration and raw curve value, under the same keys the avoider
//! reads.

use serde_json::{json, Map, Value};
use tracing::info;

use avoidance_core::keyboard::{notifications, payload_keys};
use avoidance_core::{AnimationCurve, NotificationHub, Rect};

/// Simulated on-screen keyboard docked to the bottom of a screen.
pub struct SoftKeyboard {
    hub: NotificationHub,
    screen: Rect,
    height: f64,
    duration: f64,
    curve: AnimationCurve,
    frame: Rect,
    visible: bool,
}

impl SoftKeyboard {
    /// Hidden keyboard for a screen of the given bounds.
    ///
    /// `height` is the keyboard height when shown; `duration` and `curve`
    /// describe every transition it posts.
    pub fn new(
        hub: NotificationHub,
        screen: Rect,
        height: f64,
        duration: f64,
        curve: AnimationCurve,
    ) -> Self {
        let frame = offscreen_frame(screen, height);
        Self {
            hub,
            screen,
            height,
            duration,
            curve,
            frame,
            visible: false,
        }
    }

    /// Current keyboard frame in window coordinates.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Slides the keyboard up to its docked position.
    pub fn show(&mut self) {
        info!(height = self.height, "keyboard showing");
        let end = docked_frame(self.screen, self.height);
        self.transition(end, true, Some(notifications::WILL_SHOW), Some(notifications::DID_SHOW));
    }

    /// Slides the keyboard off the bottom of the screen.
    pub fn hide(&mut self) {
        info!("keyboard hiding");
        let end = offscreen_frame(self.screen, self.height);
        self.transition(
            end,
            false,
            Some(notifications::WILL_HIDE),
            Some(notifications::DID_HIDE),
        );
    }

    /// Changes the keyboard height (e.g. an accessory bar appearing or
    /// going away).
    ///
    /// While visible this posts a frame-change pair; while hidden it only
    /// changes what the next [`show`](Self::show) will use.
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
        if self.visible {
            info!(height, "keyboard resizing");
            let end = docked_frame(self.screen, self.height);
            self.transition(end, true, None, None);
        }
    }

    /// Posts one geometry transition: the frame-change pair wrapping the
    /// optional will/did notifications, with the frame updated in between.
    fn transition(&mut self, end: Rect, visible: bool, will: Option<&str>, did: Option<&str>) {
        let payload = self.payload(self.frame, end);

        self.hub
            .post(notifications::WILL_CHANGE_FRAME, Some(&payload));
        if let Some(name) = will {
            self.hub.post(name, Some(&payload));
        }

        self.frame = end;
        self.visible = visible;

        self.hub.post(notifications::DID_CHANGE_FRAME, Some(&payload));
        if let Some(name) = did {
            self.hub.post(name, Some(&payload));
        }
    }

    /// Builds the untyped payload the avoider expects.
    fn payload(&self, begin: Rect, end: Rect) -> Value {
        let mut map = Map::new();
        map.insert(payload_keys::FRAME_BEGIN.to_string(), rect_value(begin));
        map.insert(payload_keys::FRAME_END.to_string(), rect_value(end));
        map.insert(
            payload_keys::ANIMATION_DURATION.to_string(),
            json!(self.duration),
        );
        map.insert(
            payload_keys::ANIMATION_CURVE.to_string(),
            json!(self.curve as u8),
        );
        Value::Object(map)
    }
}

/// Frame of a keyboard docked to the bottom of `screen`.
fn docked_frame(screen: Rect, height: f64) -> Rect {
    Rect::new(screen.x, screen.bottom() - height, screen.width, height)
}

/// Frame of a hidden keyboard, parked just below `screen`.
fn offscreen_frame(screen: Rect, height: f64) -> Rect {
    Rect::new(screen.x, screen.bottom(), screen.width, height)
}

fn rect_value(rect: Rect) -> Value {
    json!({
        "x": rect.x,
        "y": rect.y,
        "width": rect.width,
        "height": rect.height,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
