//! Titled card used for each profile section.

use leptos::prelude::*;

use crate::components::icon::GlyphView;
use crate::content::Glyph;

#[component]
pub fn SectionCard(
    glyph: Glyph,
    title: &'static str,
    /// Optional trailing link rendered in the card header.
    #[prop(optional)]
    action: Option<(&'static str, &'static str)>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="card">
            <header class="card__header">
                <GlyphView glyph=glyph extra_class="card__glyph"/>
                <h2 class="card__title">{title}</h2>
                {action.map(|(label, href)| view! {
                    <a class="card__action" href=href>
                        {label}
                        <GlyphView glyph=Glyph::ChevronRight/>
                    </a>
                })}
            </header>
            {children()}
        </section>
    }
}
