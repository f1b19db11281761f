//! Submission Form Component
//!
//! Three required text inputs plus an optional attachment, posted as one multipart request.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, HtmlInputElement, SubmitEvent};

use crate::commands;
use crate::context::use_app_context;
use crate::draft::{FormDraft, SubmitOutcome, TextField, FILE_FIELD};
use crate::guard::ViewGuard;

/// Advisory filter for the file picker
const ACCEPTED_FILE_TYPES: &str = "image/*,video/*,application/pdf";

#[component]
pub fn SubmissionForm() -> impl IntoView {
    let ctx = use_app_context();

    // File handles are JS objects, so the draft lives in local storage
    let draft = RwSignal::new_local(FormDraft::<File>::default());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let guard = ViewGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.cancel()
    });

    let on_file_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let files: Vec<File> = input
            .files()
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();
        draft.update(|d| d.select_file(files));
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let payload = draft.with_untracked(|d| d.to_payload());
        let config = ctx.config();
        let guard = guard.clone();
        set_submitting.set(true);
        set_error.set(None);

        spawn_local(async move {
            log::debug!("[Submit] Sending fields {:?}", payload.field_names());
            let outcome = SubmitOutcome::from_result(commands::submit_form(&config, &payload).await);

            let applied = guard.apply(|| {
                set_submitting.set(false);
                match outcome {
                    SubmitOutcome::Notify(message) => {
                        log::info!("[Submit] Accepted: {}", message);
                        if let Err(e) = window().alert_with_message(&message) {
                            log::warn!("[Submit] Could not show alert: {:?}", e);
                        }
                    }
                    SubmitOutcome::Failed(reason) => {
                        log::error!("[Submit] Error submitting form: {}", reason);
                        set_error.set(Some(reason));
                    }
                }
            });
            if !applied {
                log::debug!("[Submit] View closed before the response arrived");
            }
        });
    };

    let selected_name = move || draft.with(|d| d.file().map(|f| f.name()));

    view! {
        <div class="page submit-page">
            <h1>"Google Forms Clone"</h1>
            <form class="submission-form" on:submit=submit>
                {TextField::ALL.iter().map(|&field| view! {
                    <input
                        type="text"
                        class="form-input"
                        name=field.name()
                        placeholder=field.placeholder()
                        required=true
                        prop:value=move || draft.with(|d| d.text(field).to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.update_text_field(field, value));
                        }
                    />
                }).collect_view()}

                <input
                    type="file"
                    class="form-input"
                    name=FILE_FIELD
                    accept=ACCEPTED_FILE_TYPES
                    on:change=on_file_change
                />
                {move || selected_name().map(|name| view! {
                    <p class="selected-file">"Selected: " {name}</p>
                })}

                <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                </button>
            </form>

            {move || error.get().map(|msg| view! {
                <p class="error">"Submission failed: " {msg}</p>
            })}
        </div>
    }
}
