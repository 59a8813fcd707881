//! Headless keyboard-avoidance demo entry point.
//!
//! Wires a simulated soft keyboard to three avoiding widgets through a
//! notification hub and runs a scripted session, logging every adjustment.
//!
//! # Session flow
//!
//! ```text
//! main()
//!  └─ load config (avoidance-host.toml, written on first run)
//!  └─ build hub, window, widgets
//!       ├─ MarginView  (top area    – never overlapped)
//!       ├─ ScrollView  (lower half  – mirrors indicator insets)
//!       └─ ListView    (lower half  – reports visible rows)
//!  └─ scripted keyboard session
//!       show → resize → detach one widget → hide → reattach → show → hide
//! ```

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use avoidance_core::{AnimationCurve, EdgeInsets, NotificationHub, Rect, Transition};
use avoidance_host::config::{self, DemoConfig};
use avoidance_host::platform::SoftKeyboard;
use avoidance_host::widgets::{AvoidingWidget, ListView, MarginView, ScrollView, Window};

const CONFIG_PATH: &str = "avoidance-host.toml";

fn main() -> anyhow::Result<()> {
    // Load configuration, writing the defaults on first run so users have a
    // file to edit.
    let config_path = Path::new(CONFIG_PATH);
    let first_run = !config_path.exists();
    let config = config::load_config(config_path)?;
    if first_run {
        config::save_config(config_path, &config)?;
    }

    // Initialise structured logging.  Level comes from the config file and is
    // overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.run.log_level)),
        )
        .init();

    info!("keyboard avoidance demo starting");
    if first_run {
        info!(path = CONFIG_PATH, "wrote default config");
    }

    run_session(&config);

    info!("keyboard avoidance demo finished");
    Ok(())
}

/// Runs the scripted keyboard session against three widgets.
fn run_session(config: &DemoConfig) {
    let screen = Rect::new(0.0, 0.0, config.screen.width, config.screen.height);
    let hub = NotificationHub::new();
    let window = Window::new(screen);

    // Top area: the keyboard never reaches this view, so its margins should
    // never move.
    let mut margin_view = MarginView::new(
        hub.clone(),
        Rect::new(0.0, 40.0, screen.width, 360.0),
        EdgeInsets::uniform(8.0),
    );

    // Lower half: both of these sit exactly where the keyboard lands.
    let lower_half = Rect::new(0.0, screen.height / 2.0, screen.width, screen.height / 2.0);
    let mut scroll_view = ScrollView::new(hub.clone(), lower_half);
    let mut list_view = ListView::new(hub.clone(), lower_half, 44.0, 10);

    margin_view.moved_to_window(Some(&window));
    scroll_view.moved_to_window(Some(&window));
    list_view.moved_to_window(Some(&window));

    let mut keyboard = SoftKeyboard::new(
        hub,
        screen,
        config.keyboard.height,
        config.keyboard.animation_duration,
        config.keyboard.animation_curve,
    );

    // ── Show ──────────────────────────────────────────────────────────────────
    let scroll_bottom_before = scroll_view.content_insets().bottom;
    keyboard.show();
    log_widgets(&margin_view, &scroll_view, &list_view);
    sample_transition(
        scroll_bottom_before,
        scroll_view.content_insets().bottom,
        config.keyboard.animation_duration,
        config.keyboard.animation_curve,
    );

    // ── Resize (accessory bar dismissed) ──────────────────────────────────────
    keyboard.set_height(config.keyboard.resized_height);
    log_widgets(&margin_view, &scroll_view, &list_view);

    // ── Detach the scroll view mid-show ───────────────────────────────────────
    scroll_view.moved_to_window(None);
    keyboard.hide();
    info!(
        scroll_bottom = scroll_view.content_insets().bottom,
        list_bottom = list_view.content_insets().bottom,
        "after hide: the detached scroll view keeps its inset"
    );

    // ── Reattach and show again ───────────────────────────────────────────────
    scroll_view.moved_to_window(Some(&window));
    keyboard.show();
    log_widgets(&margin_view, &scroll_view, &list_view);

    keyboard.hide();
    log_widgets(&margin_view, &scroll_view, &list_view);
}

/// Logs each widget's current adjustment.
fn log_widgets(margin_view: &MarginView, scroll_view: &ScrollView, list_view: &ListView) {
    info!(
        margin_bottom = margin_view.margins().bottom,
        scroll_bottom = scroll_view.content_insets().bottom,
        indicator_bottom = scroll_view.indicator_insets().bottom,
        visible_rows = list_view.visible_rows(),
        overlap = scroll_view.avoider().overlap_height(),
        "widget state"
    );
}

/// Logs how a host render loop would interpolate the inset change.
fn sample_transition(from: f64, to: f64, duration: f64, curve: AnimationCurve) {
    let transition = Transition::new(from, to, duration, curve);
    for step in 0..=4 {
        let elapsed = duration * f64::from(step) / 4.0;
        info!(
            elapsed,
            inset = transition.value_at(elapsed),
            finished = transition.is_finished(elapsed),
            "transition sample"
        );
    }
}
