//! The in-process notification hub.
//!
//! Single-threaded by design: registration state lives behind `Rc<RefCell>`,
//! cloning a hub clones a handle to the same registry, and `post` runs every
//! matching callback synchronously before returning.
//!
//! # Dispatch semantics
//!
//! `post` snapshots the registrations matching the name before invoking any
//! callback. Observers added by a callback therefore first hear the *next*
//! post; observers removed by a callback still receive the in-flight post.
//! This keeps dispatch well-defined when a callback mutates the registry,
//! which is exactly what an avoider re-subscribing from inside a handler does.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;
use tracing::{debug, trace};
use uuid::Uuid;

/// Callback registered for one notification name.
///
/// The payload is whatever the poster supplied: an untyped value tree, or
/// nothing at all. Consumers pull fields out of it defensively.
type ObserverCallback = Rc<RefCell<dyn FnMut(Option<&Value>)>>;

/// Opaque handle identifying one registration.
///
/// Returned by [`NotificationHub::add_observer`] and consumed by
/// [`NotificationHub::remove_observer`]. Handles carry no public state; they
/// exist only to be stored and given back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverHandle {
    id: Uuid,
}

struct Registration {
    handle: ObserverHandle,
    name: String,
    callback: ObserverCallback,
}

#[derive(Default)]
struct HubState {
    registrations: Vec<Registration>,
}

/// Cheap-to-clone handle to a shared observer registry.
#[derive(Clone)]
pub struct NotificationHub {
    state: Rc<RefCell<HubState>>,
}

impl NotificationHub {
    /// Creates an empty hub.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(HubState::default())),
        }
    }

    /// Registers `callback` for every post of `name`.
    ///
    /// Returns the handle that removes this registration again. Nothing
    /// deduplicates: registering the same callback twice delivers twice.
    pub fn add_observer<F>(&self, name: &str, callback: F) -> ObserverHandle
    where
        F: FnMut(Option<&Value>) + 'static,
    {
        let handle = ObserverHandle { id: Uuid::new_v4() };
        let callback: ObserverCallback = Rc::new(RefCell::new(callback));

        self.state.borrow_mut().registrations.push(Registration {
            handle,
            name: name.to_string(),
            callback,
        });

        debug!(name, observer = %handle.id, "observer registered");
        handle
    }

    /// Removes the registration identified by `handle`.
    ///
    /// Unknown or already-removed handles are ignored, so teardown paths can
    /// call this without tracking whether it already ran.
    pub fn remove_observer(&self, handle: ObserverHandle) {
        self.state
            .borrow_mut()
            .registrations
            .retain(|registration| registration.handle != handle);
    }

    /// Synchronously delivers `payload` to every observer of `name`.
    pub fn post(&self, name: &str, payload: Option<&Value>) {
        // Snapshot matching callbacks first so callbacks may freely mutate
        // the registry (see module doc for the resulting semantics).
        let callbacks: Vec<ObserverCallback> = {
            let state = self.state.borrow();
            state
                .registrations
                .iter()
                .filter(|registration| registration.name == name)
                .map(|registration| Rc::clone(&registration.callback))
                .collect()
        };

        trace!(name, observers = callbacks.len(), "posting notification");

        for callback in callbacks {
            (*callback.borrow_mut())(payload);
        }
    }

    /// Number of live registrations for `name`.
    pub fn observer_count(&self, name: &str) -> usize {
        self.state
            .borrow()
            .registrations
            .iter()
            .filter(|registration| registration.name == name)
            .count()
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
