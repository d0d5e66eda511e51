//! api endpoint configuration

use museum_shared::MuseumId;

/// fallback backend address when none is baked in at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// where the museum collection lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `MUSEUM_API_BASE` at compile time, else [`DEFAULT_API_BASE`]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("MUSEUM_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self) -> String {
        format!("{}/museums", self.base_url)
    }

    pub fn record_url(&self, id: MuseumId) -> String {
        format!("{}/museums/{}", self.base_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
