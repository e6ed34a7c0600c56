//! Sun/moon button flipping the page theme.
//!
//! DESIGN
//! ======
//! Server markup cannot know the visitor's theme, so both glyphs are rendered
//! and the stylesheet shows one based on the root `dark` class the pre-paint
//! script sets. The accessible label is neutral until hydration, then follows
//! the theme context.

use leptos::prelude::*;

use crate::content::Glyph;
use crate::theme::use_theme;

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

/// `aria-label` for the toggle; `None` before the theme is known.
pub fn toggle_label(dark: Option<bool>) -> &'static str {
    match dark {
        None => "Toggle dark mode",
        Some(true) => "Switch to light mode",
        Some(false) => "Switch to dark mode",
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let hydrated = RwSignal::new(false);
    // Effects only run in the browser.
    Effect::new(move || hydrated.set(true));

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| theme.toggle()
            title="Toggle dark mode"
            aria-label=move || toggle_label(hydrated.get().then(|| theme.is_dark()))
        >
            <span class="theme-toggle__glyph theme-toggle__glyph--sun" aria-hidden="true">
                {Glyph::Sun.symbol()}
            </span>
            <span class="theme-toggle__glyph theme-toggle__glyph--moon" aria-hidden="true">
                {Glyph::Moon.symbol()}
            </span>
        </button>
    }
}
