//! Application Configuration
//!
//! Resolved once at startup from build-time environment overrides.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
const DEFAULT_CHAT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL every endpoint path is appended to (no trailing slash)
    pub api_base_url: String,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Number of chat turns kept in local storage
    pub chat_history_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: "info".to_string(),
            chat_history_limit: DEFAULT_CHAT_HISTORY_LIMIT,
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with `SCHOOL_HEALTH_API_URL` / `SCHOOL_HEALTH_LOG_LEVEL`
    /// captured at compile time.
    pub fn load() -> Self {
        Self::from_overrides(
            option_env!("SCHOOL_HEALTH_API_URL"),
            option_env!("SCHOOL_HEALTH_LOG_LEVEL"),
        )
    }

    fn from_overrides(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_base_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.map(str::trim).filter(|l| !l.is_empty()) {
            config.log_level = level.to_lowercase();
        }
        config
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_overrides(None, None);
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert_eq!(config.level_filter(), LevelFilter::Info);
        assert_eq!(config.chat_history_limit, 50);
    }

    #[test]
    fn test_overrides_strip_trailing_slash() {
        let config = AppConfig::from_overrides(Some("https://api.school.vn/v1/"), Some("DEBUG"));
        assert_eq!(config.api_base_url, "https://api.school.vn/v1");
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_endpoint_join() {
        let config = AppConfig::default();
        assert_eq!(
            config.endpoint("/checkup-campaign/3/start"),
            "http://localhost:3000/api/checkup-campaign/3/start"
        );
        assert_eq!(config.endpoint("blog"), "http://localhost:3000/api/blog");
    }

    #[test]
    fn test_bad_level_defaults_to_info() {
        let config = AppConfig::from_overrides(None, Some("loud"));
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
