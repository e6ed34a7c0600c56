//! Project showcase (`/projects`).

use leptos::prelude::*;

use crate::components::back_link::BackLink;
use crate::components::page_footer::PageFooter;
use crate::components::project_card::ProjectCard;
use crate::content::PROJECTS;
use crate::theme::use_theme;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="page projects-page" data-theme=move || theme.data_theme()>
            <div class="page__inner animate-fadeup">
                <BackLink/>
                <div class="projects-grid">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project=*project/> }).collect_view()}
                </div>
                <PageFooter/>
            </div>
        </div>
    }
}
