//! Records Listing Components
//!
//! Fetches stored submissions once on mount and renders them as a table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::guard::ViewGuard;
use crate::models::FormRecord;
use crate::records::{FileCell, ListingState, EMPTY_TEXT, LOADING_TEXT, NO_FILE_TEXT, VIEW_FILE_TEXT};

#[component]
pub fn RecordsListing() -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(ListingState::default());

    let guard = ViewGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.cancel()
    });

    // Load records on mount
    Effect::new(move |_| {
        let config = ctx.config();
        let guard = guard.clone();
        spawn_local(async move {
            let result = commands::list_forms(&config).await;
            match &result {
                Ok(records) => log::debug!("[Listing] Loaded {} records", records.len()),
                Err(e) => log::error!("[Listing] Error fetching data: {}", e),
            }
            guard.apply(|| set_state.set(ListingState::from_result(result)));
        });
    });

    view! {
        <div
            class="page listing-page"
            aria-busy=move || state.with(ListingState::is_loading).to_string()
        >
            {move || state.with(|current| match current {
                ListingState::Loading => view! {
                    <p class="loading">{LOADING_TEXT}</p>
                }.into_any(),
                ListingState::Failed(reason) => view! {
                    <h1>"Submitted Forms"</h1>
                    <p class="error">"Could not load submissions: " {reason.clone()}</p>
                }.into_any(),
                ListingState::Loaded(_) => match current.rows() {
                    Some(rows) => view! {
                        <h1>"Submitted Forms"</h1>
                        <RecordsTable records=rows.to_vec() />
                    }.into_any(),
                    None => view! {
                        <h1>"Submitted Forms"</h1>
                        <p class="empty">{EMPTY_TEXT}</p>
                    }.into_any(),
                },
            })}
        </div>
    }
}

/// One row per record, in the order given
#[component]
pub fn RecordsTable(records: Vec<FormRecord>) -> impl IntoView {
    let config = use_app_context().config();

    view! {
        <table class="records-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Text 1"</th>
                    <th>"Text 2"</th>
                    <th>"Text 3"</th>
                    <th>"File"</th>
                </tr>
            </thead>
            <tbody>
                {records.into_iter().map(|record| {
                    let file_cell = match FileCell::for_record(&record, &config) {
                        FileCell::Link(url) => view! {
                            <a href=url target="_blank" rel="noopener noreferrer" class="file-link">
                                {VIEW_FILE_TEXT}
                            </a>
                        }.into_any(),
                        FileCell::NoFile => view! { <span class="no-file">{NO_FILE_TEXT}</span> }.into_any(),
                    };
                    view! {
                        <tr>
                            <td>{record.id}</td>
                            <td>{record.text1}</td>
                            <td>{record.text2}</td>
                            <td>{record.text3}</td>
                            <td>{file_cell}</td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
