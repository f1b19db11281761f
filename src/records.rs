//! Listing State
//!
//! What the listing view shows for each stage of the retrieval call.

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::FormRecord;

pub const LOADING_TEXT: &str = "Loading data...";
pub const EMPTY_TEXT: &str = "No form submissions found.";
pub const NO_FILE_TEXT: &str = "No file";
pub const VIEW_FILE_TEXT: &str = "View File";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListingState {
    #[default]
    Loading,
    Loaded(Vec<FormRecord>),
    Failed(String),
}

impl ListingState {
    /// State after a retrieval call. Replaces whatever was shown before.
    pub fn from_result(result: Result<Vec<FormRecord>, ApiError>) -> Self {
        match result {
            Ok(records) => ListingState::Loaded(records),
            Err(e) => ListingState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListingState::Loading)
    }

    /// Rows to render as a table; `None` while loading, on failure, or when empty.
    pub fn rows(&self) -> Option<&[FormRecord]> {
        match self {
            ListingState::Loaded(records) if !records.is_empty() => Some(records),
            _ => None,
        }
    }
}

/// Content of a row's File column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileCell {
    Link(String),
    NoFile,
}

impl FileCell {
    pub fn for_record(record: &FormRecord, config: &AppConfig) -> Self {
        match record.attachment() {
            Some(path) => FileCell::Link(config.file_url(path)),
            None => FileCell::NoFile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BACKEND_BASE_URL;

    fn record(id: i64, file_path: &str) -> FormRecord {
        FormRecord {
            id,
            text1: format!("t1-{}", id),
            text2: format!("t2-{}", id),
            text3: format!("t3-{}", id),
            file_path: file_path.to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = ListingState::default();
        assert!(state.is_loading());
        assert_eq!(state.rows(), None);
    }

    #[test]
    fn test_empty_response_has_no_rows() {
        let records: Vec<FormRecord> = serde_json::from_str("[]").unwrap();
        let state = ListingState::from_result(Ok(records));
        assert_eq!(state, ListingState::Loaded(Vec::new()));
        assert!(!state.is_loading());
        assert_eq!(state.rows(), None);
    }

    #[test]
    fn test_failure_is_distinct_from_empty() {
        let state = ListingState::from_result(Err(ApiError::Network("Failed to fetch".to_string())));
        assert_eq!(state, ListingState::Failed("network error: Failed to fetch".to_string()));
        assert!(!state.is_loading());
        assert_ne!(state, ListingState::Loaded(Vec::new()));
    }

    #[test]
    fn test_rows_keep_backend_order() {
        let state = ListingState::from_result(Ok(vec![record(9, ""), record(2, ""), record(5, "")]));
        let ids: Vec<i64> = state.rows().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
    }

    #[test]
    fn test_reload_is_idempotent() {
        let backend = vec![record(1, ""), record(2, "uploads/a.png")];
        let first = ListingState::from_result(Ok(backend.clone()));
        let second = ListingState::from_result(Ok(backend));
        assert_eq!(first, second);
        assert_eq!(second.rows().unwrap().len(), 2);
    }

    #[test]
    fn test_file_cell_without_file() {
        let json = r#"[{"id":1,"text1":"a","text2":"b","text3":"c","file_path":""}]"#;
        let records: Vec<FormRecord> = serde_json::from_str(json).unwrap();
        let cell = FileCell::for_record(&records[0], &AppConfig::new(DEFAULT_BACKEND_BASE_URL));
        assert_eq!(cell, FileCell::NoFile);
    }

    #[test]
    fn test_file_cell_links_to_backend_origin() {
        let json = r#"[{"id":2,"text1":"x","text2":"y","text3":"z","file_path":"uploads/f.pdf"}]"#;
        let records: Vec<FormRecord> = serde_json::from_str(json).unwrap();
        let config = AppConfig::new("http://localhost:8000");
        let cell = FileCell::for_record(&records[0], &config);
        assert_eq!(cell, FileCell::Link("http://localhost:8000/uploads/f.pdf".to_string()));
    }

    #[test]
    fn test_file_cell_whitespace_path_is_not_empty() {
        let json = r#"[{"id":3,"text1":"a","text2":"b","text3":"c","file_path":" "}]"#;
        let records: Vec<FormRecord> = serde_json::from_str(json).unwrap();
        let cell = FileCell::for_record(&records[0], &AppConfig::new(DEFAULT_BACKEND_BASE_URL));
        assert_eq!(cell, FileCell::Link("http://localhost:8000/ ".to_string()));
    }
}
