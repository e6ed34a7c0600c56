use leptos::prelude::*;

use crate::content::PROFILE;
use crate::util::clock::{copyright_line, current_year};

#[component]
pub fn PageFooter() -> impl IntoView {
    view! {
        <footer class="page-footer">
            <p>{copyright_line(current_year(), PROFILE.name)}</p>
        </footer>
    }
}
