//! Project showcase card with a skeleton-backed thumbnail.
//!
//! DESIGN
//! ======
//! The thumbnail starts hidden behind a pulsing skeleton and fades in on the
//! image `load` event. An image that finished loading before hydration never
//! fires `load` again, so the hydrated component also checks `complete` once
//! the node is mounted.

use leptos::prelude::*;

use crate::content::{Project, ProjectKind};

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

/// Badge modifier class for a project kind.
pub fn badge_class(kind: ProjectKind) -> &'static str {
    match kind {
        ProjectKind::Personal => "project-card__badge project-card__badge--personal",
        ProjectKind::Client => "project-card__badge project-card__badge--client",
    }
}

#[component]
pub fn ProjectThumbnail(src: &'static str, alt: &'static str) -> impl IntoView {
    let loaded = RwSignal::new(false);
    let img_ref = NodeRef::<leptos::html::Img>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(img) = img_ref.get() {
            if img.complete() {
                loaded.set(true);
            }
        }
    });

    view! {
        <div class="project-thumb">
            <Show when=move || !loaded.get()>
                <div class="project-thumb__skeleton" aria-hidden="true"></div>
            </Show>
            <img
                class="project-thumb__img"
                class:project-thumb__img--loaded=move || loaded.get()
                node_ref=img_ref
                src=src
                alt=alt
                on:load=move |_| loaded.set(true)
            />
        </div>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let domain = project.display_domain();

    view! {
        <article class="project-card">
            <span class=badge_class(project.kind)>{project.kind.label()}</span>
            <ProjectThumbnail src=project.thumbnail alt=project.title/>
            <div class="project-card__body">
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
                <a class="project-card__link" href=project.link target="_blank" rel="noopener noreferrer">
                    {domain}
                </a>
            </div>
        </article>
    }
}
