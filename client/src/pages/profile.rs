//! Profile landing page (`/`).
//!
//! SYSTEM CONTEXT
//! ==============
//! The first page visitors see: header with contact actions and the theme
//! toggle, then about/skills on the left and the experience timeline and
//! education on the right.

use leptos::prelude::*;

use crate::components::icon::GlyphView;
use crate::components::section_card::SectionCard;
use crate::components::skill_chip::SkillTag;
use crate::components::theme_toggle::ThemeToggle;
use crate::content::{EDUCATION, EXPERIENCE, Experience, Glyph, HIGHLIGHTS, PROFILE};
use crate::theme::use_theme;

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

/// `mailto:` link for the "Send Email" action.
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

/// Timeline dot classes; the first entry is the current position.
pub fn timeline_dot_class(index: usize) -> &'static str {
    if index == 0 { "timeline__dot timeline__dot--current" } else { "timeline__dot" }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="page profile-page" data-theme=move || theme.data_theme()>
            <div class="page__inner">
                <ProfileHeader/>
                <div class="profile-page__grid">
                    <div class="profile-page__main">
                        <SectionCard glyph=Glyph::User title="About">
                            <p class="card__text">{PROFILE.about}</p>
                        </SectionCard>
                        <SectionCard glyph=Glyph::Code title="Skills" action=("View All", "/skills")>
                            <div class="skill-groups">
                                {HIGHLIGHTS
                                    .iter()
                                    .map(|group| view! {
                                        <div class="skill-group">
                                            <h3 class="skill-group__title">{group.title}</h3>
                                            <div class="skill-group__items">
                                                {group.skills.iter().map(|name| view! { <SkillTag name=*name/> }).collect_view()}
                                            </div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </SectionCard>
                        <SectionCard glyph=Glyph::Briefcase title="Projects" action=("View All", "/projects")>
                            <p class="card__text">"Personal tools and client sites, with live links."</p>
                        </SectionCard>
                    </div>
                    <div class="profile-page__side">
                        <SectionCard glyph=Glyph::Briefcase title="Experience">
                            <ExperienceTimeline entries=EXPERIENCE/>
                        </SectionCard>
                        <SectionCard glyph=Glyph::GraduationCap title="Education">
                            <div class="entry">
                                <h3 class="entry__title">{EDUCATION.degree}</h3>
                                <p class="entry__subtitle">{EDUCATION.school}</p>
                                <p class="entry__meta">{EDUCATION.period}</p>
                            </div>
                        </SectionCard>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProfileHeader() -> impl IntoView {
    let email_action = match PROFILE.email {
        Some(email) => view! {
            <a class="btn btn--primary" href=mailto_href(email)>
                <GlyphView glyph=Glyph::Mail/>
                <span>"Send Email"</span>
            </a>
        }
        .into_any(),
        None => view! {
            <button class="btn btn--primary" disabled=true>
                <GlyphView glyph=Glyph::Mail/>
                <span>"Send Email"</span>
            </button>
        }
        .into_any(),
    };

    view! {
        <header class="profile-header">
            <img class="profile-header__photo" src=PROFILE.photo_src alt=PROFILE.name/>
            <div class="profile-header__info">
                <h1 class="profile-header__name">{PROFILE.name}</h1>
                <p class="profile-header__location">
                    <GlyphView glyph=Glyph::MapPin/>
                    <span>{PROFILE.location}</span>
                </p>
                <p class="profile-header__role">{PROFILE.role}</p>
                <div class="profile-header__actions">
                    {email_action}
                    {PROFILE.cv_href.map(|href| view! {
                        <a class="btn btn--outline" href=href download="">
                            <GlyphView glyph=Glyph::Download/>
                            <span>"Download CV"</span>
                        </a>
                    })}
                </div>
            </div>
            <ThemeToggle/>
        </header>
    }
}

#[component]
fn ExperienceTimeline(entries: &'static [Experience]) -> impl IntoView {
    view! {
        <ol class="timeline">
            {entries
                .iter()
                .enumerate()
                .map(|(index, entry)| view! {
                    <li class="timeline__item">
                        <span class=timeline_dot_class(index) aria-hidden="true"></span>
                        <div class="entry">
                            <h3 class="entry__title">{entry.role}</h3>
                            <p class="entry__subtitle">{entry.company}</p>
                            <p class="entry__meta">{entry.period}</p>
                        </div>
                    </li>
                })
                .collect_view()}
        </ol>
    }
}
