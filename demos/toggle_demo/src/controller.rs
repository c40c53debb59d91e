//! Visibility toggle: a one-way "allow" latch gating a content flag.
//!
//! Reachable states, as `(toggle_enabled, content_visible)`:
//! `(false, false) -> (true, false) <-> (true, true)`. `(false, true)` can't
//! be reached.

use reprise_core::{Callback, Signal, remember, remember_callback, signal};

#[derive(Clone, Debug)]
pub struct ToggleController {
    toggle_enabled: Signal<bool>,
    content_visible: Signal<bool>,
}

impl Default for ToggleController {
    fn default() -> Self {
        Self::new()
    }
}

/// The controller for the current composition slot.
pub fn remember_toggle_controller() -> ToggleController {
    (*remember(ToggleController::new)).clone()
}

impl ToggleController {
    pub fn new() -> Self {
        Self {
            toggle_enabled: signal(false),
            content_visible: signal(false),
        }
    }

    pub fn toggle_enabled(&self) -> bool {
        self.toggle_enabled.get()
    }

    pub fn content_visible(&self) -> bool {
        self.content_visible.get()
    }

    /// Sets the latch. Repeated calls write nothing and wake no one.
    pub fn enable_toggle(&self) {
        if self.toggle_enabled.set_if_changed(true) {
            log::debug!("toggling enabled");
        }
    }

    /// Flips the content flag; ignored until the latch is set.
    pub fn toggle_content(&self) {
        if !self.toggle_enabled.get() {
            log::trace!("toggle ignored: not enabled yet");
            return;
        }
        flip(&self.content_visible);
    }

    /// Handler for the enable action. A new handle on every call.
    pub fn enable_toggle_handler(&self) -> Callback {
        let this = self.clone();
        Callback::new(move || this.enable_toggle())
    }

    /// Handler for the toggle action, memoized on the latch value.
    ///
    /// Call during composition. The handle is the same one across
    /// recompositions until `toggle_enabled` changes. The closure captures
    /// the latch value it was built under; that capture is also the cache key,
    /// so it is never stale.
    pub fn toggle_content_handler(&self) -> Callback {
        let allow = self.toggle_enabled.get();
        let content = self.content_visible.clone();
        remember_callback(allow, move || {
            if allow {
                flip(&content);
            }
        })
    }
}

fn flip(flag: &Signal<bool>) {
    flag.update(|v| *v = !*v);
}
