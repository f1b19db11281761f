//! Client Configuration
//!
//! Resolves the backend origin once at startup.

/// Origin used when nothing else is configured.
pub const DEFAULT_BACKEND_BASE_URL: &str = "http://localhost:8000";

/// Name of the `<meta>` tag that overrides the backend origin at runtime.
pub const BACKEND_META_NAME: &str = "backend-base-url";

/// Creation endpoint path
pub const SUBMIT_FORM_PATH: &str = "/submit-form/";
/// Retrieval endpoint path
pub const GET_FORMS_PATH: &str = "/get-forms/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    backend_base_url: String,
}

impl AppConfig {
    /// Build a config from an explicit origin. Trailing slashes are dropped.
    pub fn new(backend_base_url: impl AsRef<str>) -> Self {
        let trimmed = backend_base_url.as_ref().trim().trim_end_matches('/');
        Self {
            backend_base_url: trimmed.to_string(),
        }
    }

    /// Resolve from the page's meta tag, then the build-time
    /// `BACKEND_BASE_URL` variable, then the default.
    pub fn load() -> Self {
        Self::resolve(&[read_meta_override(), option_env!("BACKEND_BASE_URL").map(str::to_string)])
    }

    /// First non-blank candidate wins.
    pub fn resolve(candidates: &[Option<String>]) -> Self {
        candidates
            .iter()
            .flatten()
            .map(|c| c.trim())
            .find(|c| !c.trim_end_matches('/').is_empty())
            .map(Self::new)
            .unwrap_or_else(|| Self::new(DEFAULT_BACKEND_BASE_URL))
    }

    pub fn backend_base_url(&self) -> &str {
        &self.backend_base_url
    }

    /// Absolute URL of an endpoint path such as `/get-forms/`.
    pub fn endpoint(&self, path: &str) -> String {
        self.join(path)
    }

    /// Absolute URL of an uploaded file served by the backend.
    pub fn file_url(&self, file_path: &str) -> String {
        self.join(file_path)
    }

    fn join(&self, path: &str) -> String {
        format!("{}/{}", self.backend_base_url, path.trim_start_matches('/'))
    }
}

fn read_meta_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", BACKEND_META_NAME);
    let meta = document.query_selector(&selector).ok().flatten()?;
    meta.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_dropped() {
        let config = AppConfig::new("http://api.example.com:9000//");
        assert_eq!(config.backend_base_url(), "http://api.example.com:9000");
    }

    #[test]
    fn test_endpoints() {
        let config = AppConfig::new("http://localhost:8000");
        assert_eq!(config.endpoint(SUBMIT_FORM_PATH), "http://localhost:8000/submit-form/");
        assert_eq!(config.endpoint(GET_FORMS_PATH), "http://localhost:8000/get-forms/");
    }

    #[test]
    fn test_file_url() {
        let config = AppConfig::new("http://localhost:8000/");
        assert_eq!(config.file_url("uploads/f.pdf"), "http://localhost:8000/uploads/f.pdf");
        assert_eq!(config.file_url("/uploads/f.pdf"), "http://localhost:8000/uploads/f.pdf");
    }

    #[test]
    fn test_resolve_precedence() {
        let config = AppConfig::resolve(&[
            Some("https://meta.example".to_string()),
            Some("https://env.example".to_string()),
        ]);
        assert_eq!(config.backend_base_url(), "https://meta.example");

        let config = AppConfig::resolve(&[None, Some("https://env.example".to_string())]);
        assert_eq!(config.backend_base_url(), "https://env.example");
    }

    #[test]
    fn test_resolve_skips_blank() {
        let config = AppConfig::resolve(&[Some("  ".to_string()), Some("/".to_string()), None]);
        assert_eq!(config, AppConfig::new(DEFAULT_BACKEND_BASE_URL));
        assert_eq!(config.backend_base_url(), DEFAULT_BACKEND_BASE_URL);
    }
}
