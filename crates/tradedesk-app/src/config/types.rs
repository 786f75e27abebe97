//! Settings file schema
//!
//! Every section and field is optional in the file; missing values fall
//! back to the defaults below, so a partial config stays valid across
//! releases.

use serde::{Deserialize, Serialize};

/// Top-level settings (`config.toml`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub ui: UiSettings,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the marketplace backend (versioned root)
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.tradedesk.dev/v1".to_string(),
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Rows fetched per table page
    pub page_size: u32,
    /// Theme name resolved by the TUI crate
    pub theme: String,
    /// Tick interval driving countdowns, in milliseconds
    pub tick_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            page_size: 50,
            theme: "dark".to_string(),
            tick_ms: 250,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Days of sales history to request
    pub sales_days: u32,
    /// Rows in the top-products pane
    pub top_products: u32,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            sales_days: 30,
            top_products: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_all_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [api]
            base_url = "http://localhost:8083/api/v1"
            "#,
        )
        .unwrap();
        assert_eq!(settings.api.base_url, "http://localhost:8083/api/v1");
        assert_eq!(settings.api.timeout_secs, 15);
        assert_eq!(settings.ui.page_size, 50);
    }

    #[test]
    fn test_round_trip() {
        let mut settings = Settings::default();
        settings.ui.theme = "light".to_string();
        settings.dashboard.sales_days = 7;
        let text = toml::to_string_pretty(&settings).unwrap();
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(back, settings);
    }
}
