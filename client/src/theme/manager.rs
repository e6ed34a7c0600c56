//! Theme state manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the single theme flag for the page. Storage, the OS signal, and the
//! root marker are injected through traits so the same state machine runs in
//! the browser (via the context provider) and in native tests.
//!
//! DESIGN
//! ======
//! Two states, `Light` and `Dark`. `toggle_theme` is the only user transition
//! and records a [`ThemeSource::UserOverride`]; OS change notifications only
//! move the state while the source is still [`ThemeSource::SystemDefault`].
//! Storage failures are logged and swallowed: the in-memory state stays
//! authoritative for the rest of the session.

use super::mode::{ThemeMode, ThemePreference, ThemeSource};
use super::root::RootMarker;
use super::storage::PreferenceStore;
use super::system::{ColorSchemeSignal, Subscription};

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

#[derive(Clone, Debug, Default)]
pub struct ThemeManager<S, C, R> {
    store: S,
    scheme: C,
    root: R,
    preference: ThemePreference,
}

impl<S, C, R> ThemeManager<S, C, R>
where
    S: PreferenceStore,
    C: ColorSchemeSignal,
    R: RootMarker,
{
    /// Create an unresolved manager (light, system default). Call
    /// [`ThemeManager::init`] once the environment is available.
    pub fn new(store: S, scheme: C, root: R) -> Self {
        Self { store, scheme, root, preference: ThemePreference::default() }
    }

    /// Read the stored preference, falling back to the OS signal.
    pub fn initial_preference(&self) -> ThemePreference {
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(e) => {
                log::debug!("theme preference not readable, using OS signal: {e}");
                None
            }
        };
        ThemePreference::resolve(stored.as_deref(), self.scheme.prefers_dark())
    }

    /// `true` when the page should start dark.
    pub fn initial_theme(&self) -> bool {
        self.initial_preference().is_dark()
    }

    /// Resolve the initial preference and apply the root marker.
    ///
    /// Idempotent: with unchanged storage and OS state, repeated calls leave
    /// the same state and marker.
    pub fn init(&mut self) -> bool {
        self.preference = self.initial_preference();
        self.root.mark(self.preference.mode);
        log::debug!("theme initialized: {:?}", self.preference);
        self.preference.is_dark()
    }

    pub fn current_theme(&self) -> bool {
        self.preference.is_dark()
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Flip the theme, persist the choice, and re-mark the root.
    pub fn toggle_theme(&mut self) -> bool {
        let mode = self.preference.mode.toggled();
        self.preference = ThemePreference::user(mode);
        if let Err(e) = self.store.save(mode.as_str()) {
            log::warn!("theme preference not persisted: {e}");
        }
        self.root.mark(mode);
        mode.is_dark()
    }

    /// Apply an OS color-scheme change. Returns whether the state moved.
    ///
    /// Ignored once the user has made an explicit choice; re-applying the
    /// current value is a no-op.
    pub fn handle_system_change(&mut self, is_dark: bool) -> bool {
        if self.preference.source == ThemeSource::UserOverride {
            return false;
        }
        let mode = ThemeMode::from_dark(is_dark);
        if mode == self.preference.mode {
            return false;
        }
        self.preference.mode = mode;
        self.root.mark(mode);
        true
    }

    /// Register `callback` for OS color-scheme changes.
    pub fn subscribe_to_system_preference(&self, callback: impl Fn(bool) + 'static) -> Subscription {
        self.scheme.watch(Box::new(callback))
    }
}
