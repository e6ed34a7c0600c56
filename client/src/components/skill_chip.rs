//! Skill chip with its icon.

use leptos::prelude::*;

use crate::components::icon::IconView;
use crate::content::Skill;

#[component]
pub fn SkillChip(skill: Skill) -> impl IntoView {
    view! {
        <span class="skill-chip">
            <IconView icon=skill.icon label=skill.name/>
            <span class="skill-chip__name">{skill.name}</span>
        </span>
    }
}

/// Icon-less chip used in the profile highlights.
#[component]
pub fn SkillTag(name: &'static str) -> impl IntoView {
    view! { <span class="skill-tag">{name}</span> }
}
