//! Navigation Bar Component
//!
//! Plain links between the two pages.

use leptos::prelude::*;

use crate::app::Page;

#[component]
pub fn NavBar(current: Page) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {Page::ALL.iter().map(|&page| view! {
                <a
                    href=page.href()
                    class=if page == current { "nav-link active" } else { "nav-link" }
                >
                    {page.label()}
                </a>
            }).collect_view()}
        </nav>
    }
}
