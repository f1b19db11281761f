//! UI Components
//!
//! Leptos components for the two pages.

mod nav_bar;
mod submission_form;
mod records_table;

pub use nav_bar::NavBar;
pub use submission_form::SubmissionForm;
pub use records_table::RecordsListing;
