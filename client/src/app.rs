//! Root application component with routing and the theme provider.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::profile::{SITE_DESCRIPTION, site_title};
use crate::pages::{profile::ProfilePage, projects::ProjectsPage, skills::SkillsPage};
use crate::theme::{ThemeProvider, prepaint};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The pre-paint theme script sits first in `<head>` so `<html>` carries the
/// right theme marker before any styled content paints.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <script inner_html=prepaint::script()></script>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=site_title()/>
        <Meta name="description" content=SITE_DESCRIPTION/>

        <ThemeProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=ProfilePage/>
                    <Route path=StaticSegment("skills") view=SkillsPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                </Routes>
            </Router>
        </ThemeProvider>
    }
}
