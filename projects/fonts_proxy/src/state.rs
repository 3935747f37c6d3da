use std::sync::Arc;

use reqwest::Client;

pub const API_KEY_VAR: &str = "GOOGLE_FONTS_API_KEY";

/// Immutable per-process state shared by every invocation.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: Client,
    pub upstream_endpoint: Arc<str>,
    /// Environment variable holding the upstream key, read per request.
    pub(crate) api_key_var: Arc<str>,
}

impl AppState {
    pub fn new(upstream_endpoint: &str) -> Self {
        Self {
            client: Client::new(),
            upstream_endpoint: Arc::from(upstream_endpoint),
            api_key_var: Arc::from(API_KEY_VAR),
        }
    }

    /// Points the key lookup at a variable private to one test.
    #[cfg(test)]
    pub(crate) fn with_api_key_var(mut self, name: &str) -> Self {
        self.api_key_var = Arc::from(name);
        self
    }

    /// Empty values count as missing.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&*self.api_key_var)
            .ok()
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_google_fonts_key_variable_by_default() {
        let state = AppState::new("http://localhost/webfonts");

        assert_eq!(&*state.api_key_var, "GOOGLE_FONTS_API_KEY");
    }

    #[test]
    fn empty_key_reads_as_missing() {
        std::env::set_var("FONTS_PROXY_STATE_TEST_EMPTY_KEY", "");
        std::env::set_var("FONTS_PROXY_STATE_TEST_SET_KEY", "abc123");

        let empty = AppState::new("http://localhost/webfonts")
            .with_api_key_var("FONTS_PROXY_STATE_TEST_EMPTY_KEY");
        let set = AppState::new("http://localhost/webfonts")
            .with_api_key_var("FONTS_PROXY_STATE_TEST_SET_KEY");
        let unset = AppState::new("http://localhost/webfonts")
            .with_api_key_var("FONTS_PROXY_STATE_TEST_UNSET_KEY");

        assert_eq!(empty.api_key(), None);
        assert_eq!(set.api_key().as_deref(), Some("abc123"));
        assert_eq!(unset.api_key(), None);
    }
}
