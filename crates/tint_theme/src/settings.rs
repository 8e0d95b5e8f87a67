//! System theme settings
//!
//! A [`SettingsProvider`] reports whether high contrast is on for a display and
//! raises a single "values changed" notification whenever colors, accent or
//! contrast settings change. The notification may arrive on any thread.

use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use tint_core::{Color, DisplayId};

/// Listener invoked when system theme values change
pub type ChangeListener = Arc<dyn Fn() + Send + Sync>;

pub trait SettingsProvider: Send + Sync {
    /// Whether high contrast is active for `display`
    fn is_high_contrast(&self, display: DisplayId) -> bool;

    /// Attach a listener to the global "values changed" notification
    fn on_values_changed(&self, listener: ChangeListener);
}

/// In-process settings provider
///
/// Platform integrations (or the `watcher` feature) push changes in through
/// the setters; every effective change fires the registered listeners on the
/// calling thread.
#[derive(Default)]
pub struct SystemSettings {
    high_contrast: AtomicBool,
    display_overrides: RwLock<FxHashMap<DisplayId, bool>>,
    accent: RwLock<Option<Color>>,
    listeners: Mutex<Vec<ChangeListener>>,
}

impl SystemSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// System-wide high-contrast flag (ignores per-display overrides)
    pub fn high_contrast(&self) -> bool {
        self.high_contrast.load(Ordering::SeqCst)
    }

    /// Set the system-wide high-contrast flag, notifying on change
    pub fn set_high_contrast(&self, enabled: bool) {
        if self.high_contrast.swap(enabled, Ordering::SeqCst) != enabled {
            tracing::debug!(enabled, "SystemSettings::set_high_contrast");
            self.notify_values_changed();
        }
    }

    /// Override high contrast for one display, notifying on change
    pub fn set_display_high_contrast(&self, display_id: DisplayId, enabled: bool) {
        let previous = self
            .display_overrides
            .write()
            .unwrap()
            .insert(display_id, enabled);
        if previous != Some(enabled) {
            tracing::debug!(display = ?display_id, enabled, "display high contrast override");
            self.notify_values_changed();
        }
    }

    /// Drop a per-display override so the display follows the system flag again
    pub fn clear_display_high_contrast(&self, display: DisplayId) {
        let previous = self.display_overrides.write().unwrap().remove(&display);
        if previous.is_some_and(|enabled| enabled != self.high_contrast()) {
            self.notify_values_changed();
        }
    }

    pub fn accent_color(&self) -> Option<Color> {
        *self.accent.read().unwrap()
    }

    /// Record a new accent color; always notifies
    pub fn set_accent_color(&self, color: Color) {
        *self.accent.write().unwrap() = Some(color);
        tracing::debug!(%color, "SystemSettings::set_accent_color");
        self.notify_values_changed();
    }

    /// Fire every listener on the calling thread
    pub fn notify_values_changed(&self) {
        let listeners = self.listeners.lock().unwrap().clone();
        tracing::trace!(count = listeners.len(), "settings values changed");
        for listener in listeners {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }
}

impl SettingsProvider for SystemSettings {
    fn is_high_contrast(&self, display: DisplayId) -> bool {
        self.display_overrides
            .read()
            .unwrap()
            .get(&display)
            .copied()
            .unwrap_or_else(|| self.high_contrast())
    }

    fn on_values_changed(&self, listener: ChangeListener) {
        self.listeners.lock().unwrap().push(listener);
    }
}

impl std::fmt::Debug for SystemSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemSettings")
            .field("high_contrast", &self.high_contrast())
            .field("accent", &self.accent_color())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
