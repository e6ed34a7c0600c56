//! OS color-scheme signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps `matchMedia("(prefers-color-scheme: dark)")`. Reading is a plain
//! boolean; watching registers a `change` listener and hands back a
//! [`Subscription`] guard that removes the listener when dropped, so a
//! remounted provider never leaves a stale listener behind.

#[cfg(test)]
#[path = "system_test.rs"]
mod system_test;

/// Media query for the OS dark preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Callback receiving the new "prefers dark" value.
pub type SchemeCallback = Box<dyn Fn(bool)>;

/// Live handle on a registered listener. Dropping it unregisters.
#[must_use = "dropping a Subscription unregisters its listener immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// A subscription with nothing to unregister.
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    /// Unregister now rather than at drop.
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}

/// Source of the OS "prefers dark" signal.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> bool;

    /// Invoke `callback` whenever the OS preference changes.
    fn watch(&self, callback: SchemeCallback) -> Subscription;
}

/// `matchMedia` backed signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQuerySignal;

#[cfg(feature = "hydrate")]
fn dark_scheme_query() -> Option<web_sys::MediaQueryList> {
    match web_sys::window()?.match_media(DARK_SCHEME_QUERY) {
        Ok(list) => list,
        Err(e) => {
            log::debug!("matchMedia unavailable: {e:?}");
            None
        }
    }
}

impl ColorSchemeSignal for MediaQuerySignal {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            dark_scheme_query().is_some_and(|list| list.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn watch(&self, callback: SchemeCallback) -> Subscription {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;
            use wasm_bindgen::closure::Closure;

            let Some(list) = dark_scheme_query() else {
                return Subscription::inert();
            };
            let listener = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                move |ev: web_sys::MediaQueryListEvent| callback(ev.matches()),
            );
            if let Err(e) = list.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref()) {
                log::debug!("color scheme listener not registered: {e:?}");
                return Subscription::inert();
            }
            Subscription::new(move || {
                if let Err(e) =
                    list.remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
                {
                    log::debug!("color scheme listener not removed: {e:?}");
                }
                drop(listener);
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            drop(callback);
            Subscription::inert()
        }
    }
}
