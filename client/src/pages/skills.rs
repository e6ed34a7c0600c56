//! Full skill catalogue (`/skills`).

use leptos::prelude::*;

use crate::components::back_link::BackLink;
use crate::components::icon::GlyphView;
use crate::components::skill_chip::SkillChip;
use crate::content::{CATALOGUE, Glyph};
use crate::theme::use_theme;

#[component]
pub fn SkillsPage() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="page skills-page" data-theme=move || theme.data_theme()>
            <div class="page__inner page__inner--narrow animate-fadeup">
                <BackLink/>
                <header class="page__header">
                    <GlyphView glyph=Glyph::Code extra_class="page__glyph"/>
                    <h1 class="page__title">"Skills"</h1>
                </header>
                <div class="skill-categories">
                    {CATALOGUE
                        .iter()
                        .map(|category| view! {
                            <section class="skill-category">
                                <h2 class="skill-category__title">{category.title}</h2>
                                <div class="skill-category__items">
                                    {category.skills.iter().map(|skill| view! { <SkillChip skill=*skill/> }).collect_view()}
                                </div>
                            </section>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
