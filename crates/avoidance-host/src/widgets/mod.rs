//! Widget adapters: host-side views that avoid the keyboard.
//!
//! Each widget pairs a plain state struct (frame, insets, widget-specific
//! fields) with a [`KeyboardAvoider`] from `avoidance-core`. The state struct
//! implements [`Container`](avoidance_core::Container), and the avoider holds
//! a shared handle to it; the widget owns both, so dropping the widget tears
//! everything down.
//!
//! Widgets are headless: "layout" just means mutating the state struct and
//! counting the pass, which is enough to demonstrate and test avoidance
//! without a renderer.

use tracing::debug;
use uuid::Uuid;

use avoidance_core::{KeyboardAvoider, Rect};

pub mod list_view;
pub mod margin_view;
pub mod scroll_view;

pub use list_view::ListView;
pub use margin_view::MarginView;
pub use scroll_view::ScrollView;

/// A top-level window widgets can be attached to.
#[derive(Debug, Clone)]
pub struct Window {
    pub id: Uuid,
    pub bounds: Rect,
}

impl Window {
    pub fn new(bounds: Rect) -> Self {
        Self {
            id: Uuid::new_v4(),
            bounds,
        }
    }
}

/// Lifecycle hooks shared by every avoiding widget.
///
/// The attach/detach contract: a widget avoids the keyboard only while it is
/// in a window. Detaching stops the subscription but leaves the current inset
/// adjustment in place, exactly like stopping the avoider directly.
pub trait AvoidingWidget {
    /// The avoider driving this widget's insets.
    fn avoider(&self) -> &KeyboardAvoider;

    fn avoider_mut(&mut self) -> &mut KeyboardAvoider;

    /// Called when the widget is attached to (`Some`) or detached from
    /// (`None`) a window.
    fn moved_to_window(&mut self, window: Option<&Window>) {
        match window {
            Some(window) => {
                debug!(window = %window.id, "widget attached");
                self.avoider_mut().start_subscribing();
            }
            None => {
                debug!("widget detached");
                self.avoider_mut().stop_subscribing();
            }
        }
    }
}
