//! Leptos context wrapping the browser theme manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ThemeProvider` owns the page's one theme manager in an `RwSignal` so any
//! component can read the flag reactively through [`use_theme`]. The manager
//! starts unresolved on both server and client so hydrated markup matches the
//! SSR output; the pre-paint script has already marked `<html>`, and a
//! client-only effect then resolves the manager to the same value.

use leptos::prelude::*;

use super::manager::ThemeManager;
use super::mode::ThemePreference;
use super::root::DocumentRoot;
use super::storage::LocalStorageStore;
use super::system::MediaQuerySignal;

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

/// Theme manager bound to `localStorage`, `matchMedia`, and `<html>`.
pub type BrowserThemeManager = ThemeManager<LocalStorageStore, MediaQuerySignal, DocumentRoot>;

/// Reactive handle on the page theme.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    manager: RwSignal<BrowserThemeManager>,
}

impl ThemeContext {
    pub fn new() -> Self {
        Self { manager: RwSignal::new(BrowserThemeManager::default()) }
    }

    /// Tracked read of the current flag.
    pub fn is_dark(&self) -> bool {
        self.manager.with(BrowserThemeManager::current_theme)
    }

    /// Tracked `"dark"` / `"light"` value for `data-theme` attributes.
    pub fn data_theme(&self) -> &'static str {
        self.manager.with(|m| m.preference().mode.as_str())
    }

    pub fn preference(&self) -> ThemePreference {
        self.manager.with(BrowserThemeManager::preference)
    }

    pub fn toggle(&self) {
        self.manager.update(|m| {
            m.toggle_theme();
        });
    }

    /// Resolve from storage/OS and keep following OS changes until the
    /// owning scope is disposed.
    #[cfg(feature = "hydrate")]
    fn attach(&self) {
        use super::system::Subscription;

        let manager = self.manager;
        // Disposed with the provider's owner, which drops the subscription
        // and removes the listener.
        let subscription = StoredValue::new_local(None::<Subscription>);
        Effect::new(move || {
            manager.update(|m| {
                m.init();
            });
            let sub = manager.with_untracked(|m| {
                m.subscribe_to_system_preference(move |dark| {
                    manager.maybe_update(|m| m.handle_system_change(dark));
                })
            });
            subscription.set_value(Some(sub));
        });
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Access the theme provided by [`ThemeProvider`].
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Provides [`ThemeContext`] to `children`.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = ThemeContext::new();
    provide_context(theme);

    #[cfg(feature = "hydrate")]
    theme.attach();

    children()
}
