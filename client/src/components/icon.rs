//! Icon rendering for [`Icon`] slots.

use leptos::prelude::*;

use crate::content::{Glyph, Icon};

/// Renders an image icon as a lazy `<img>` and a glyph as a text span.
#[component]
pub fn IconView(icon: Icon, #[prop(into)] label: String) -> impl IntoView {
    match icon {
        Icon::Image { url } => view! {
            <img class="icon icon--image" src=url alt=format!("{label} icon") loading="lazy"/>
        }
        .into_any(),
        Icon::Glyph(glyph) => view! { <GlyphView glyph=glyph/> }.into_any(),
    }
}

/// Decorative glyph.
#[component]
pub fn GlyphView(glyph: Glyph, #[prop(optional, into)] extra_class: String) -> impl IntoView {
    view! {
        <span class=format!("icon glyph glyph--{} {extra_class}", glyph.id()) aria-hidden="true">
            {glyph.symbol()}
        </span>
    }
}
