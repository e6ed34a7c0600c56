use leptos::prelude::*;

use crate::components::icon::GlyphView;
use crate::content::Glyph;

/// "Back to Home" link at the top of secondary pages.
#[component]
pub fn BackLink() -> impl IntoView {
    view! {
        <a class="back-link" href="/">
            <GlyphView glyph=Glyph::ArrowLeft/>
            " Back to Home"
        </a>
    }
}
