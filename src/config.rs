//! API Configuration
//!
//! The bundle runs in the browser, so the base URL is fixed at build time.

/// Base URL used when `FOOD_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read `FOOD_API_URL` from the build environment
    pub fn from_env() -> Self {
        match option_env!("FOOD_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Join the base URL and an endpoint path with a single slash
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
