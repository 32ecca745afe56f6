//! Application Configuration
//!
//! Values are baked in at build time; a wasm bundle has no process env.

use log::LevelFilter;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST backend, without trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build from `MENU_API_BASE_URL` / `MENU_LOG_LEVEL` captured at compile time
    pub fn from_env() -> Self {
        Self::from_values(option_env!("MENU_API_BASE_URL"), option_env!("MENU_LOG_LEVEL"))
    }

    fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: base_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}
