//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkRegistry;

/// Handles shared by all requests.
///
/// Cloning is cheap: the registry sits behind an [`Arc`] and is the only
/// path to the links file.
#[derive(Clone, Debug)]
pub struct AppState {
    pub registry: Arc<LinkRegistry>,
    /// Public origin used to render `shortUrl`, without a trailing slash.
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(registry: Arc<LinkRegistry>, base_url: &str) -> Self {
        Self {
            registry,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    /// Full public URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::JsonFileStore;

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let registry = Arc::new(LinkRegistry::new(Arc::new(JsonFileStore::new(
            "unused.json",
        ))));
        let state = AppState::new(registry, "https://s.example.com/");

        assert_eq!(state.short_url("abc123"), "https://s.example.com/abc123");
    }
}
