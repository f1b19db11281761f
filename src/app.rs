//! Forms Client App
//!
//! Picks the page from the URL path and provides the startup config.

use leptos::prelude::*;

use crate::components::{NavBar, RecordsListing, SubmissionForm};
use crate::config::AppConfig;
use crate::context::AppContext;

/// Top-level pages, selected by plain navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Submit,
    Listing,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Submit, Page::Listing];

    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/view" => Page::Listing,
            _ => Page::Submit,
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Page::Submit => "/",
            Page::Listing => "/view",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Submit => "Submit a form",
            Page::Listing => "View submissions",
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(AppContext::new(config));

    let path = window().location().pathname().unwrap_or_default();
    let page = Page::from_path(&path);
    log::debug!("[APP] Path {} -> {:?}", path, page);

    view! {
        <div class="app-layout">
            <NavBar current=page />
            <main class="main-content">
                {match page {
                    Page::Submit => view! { <SubmissionForm /> }.into_any(),
                    Page::Listing => view! { <RecordsListing /> }.into_any(),
                }}
            </main>
        </div>
    }
}
