//! Frontend Models
//!
//! Data structures matching the backend's JSON.

use serde::{Deserialize, Deserializer};

/// A persisted submission (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormRecord {
    pub id: i64,
    pub text1: String,
    pub text2: String,
    pub text3: String,
    /// Relative path of the uploaded file; empty (or missing/null) when none was attached
    #[serde(default, deserialize_with = "null_as_empty")]
    pub file_path: String,
}

impl FormRecord {
    /// The attached file's path, if non-empty. Used as given, no trimming.
    pub fn attachment(&self) -> Option<&str> {
        (!self.file_path.is_empty()).then_some(self.file_path.as_str())
    }
}

/// Creation endpoint response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_file() {
        let json = r#"{"id":1,"text1":"a","text2":"b","text3":"c","file_path":""}"#;
        let record: FormRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.attachment(), None);
    }

    #[test]
    fn test_record_missing_or_null_file_path() {
        let missing: FormRecord = serde_json::from_str(r#"{"id":3,"text1":"a","text2":"b","text3":"c"}"#).unwrap();
        assert_eq!(missing.attachment(), None);

        let null: FormRecord =
            serde_json::from_str(r#"{"id":4,"text1":"a","text2":"b","text3":"c","file_path":null}"#).unwrap();
        assert_eq!(null.attachment(), None);
    }

    #[test]
    fn test_record_with_file() {
        let json = r#"{"id":2,"text1":"x","text2":"y","text3":"z","file_path":"uploads/f.pdf"}"#;
        let record: FormRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.attachment(), Some("uploads/f.pdf"));
    }

    #[test]
    fn test_submit_response_ignores_extra_fields() {
        let json = r#"{"message":"Saved","id":7}"#;
        let response: SubmitResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message, "Saved");
    }
}
