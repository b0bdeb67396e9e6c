use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

/// Site-wide settings shared by every page.
///
/// The defaults are what the published site uses; the browser entry point
/// never reads the environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub site_name: String,
    /// Page assumed when the location path is empty
    pub home_page: String,
    /// Colour given to the navigation link of the current page
    pub accent_color: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Urugano Realty".to_string(),
            home_page: "index.html".to_string(),
            accent_color: "#ff5a5f".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load overrides from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();
        Ok(Self {
            site_name: env::var("SITE_NAME").unwrap_or(defaults.site_name),
            home_page: env::var("SITE_HOME_PAGE").unwrap_or(defaults.home_page),
            accent_color: env::var("SITE_ACCENT_COLOR").unwrap_or(defaults.accent_color),
        })
    }

    pub fn welcome_message(&self) -> String {
        format!("Welcome to {}", self.site_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_site() {
        let config = SiteConfig::default();
        assert_eq!(config.home_page, "index.html");
        assert_eq!(config.accent_color, "#ff5a5f");
        assert_eq!(config.welcome_message(), "Welcome to Urugano Realty");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SiteConfig = serde_json::from_str(r##"{"accentColor": "#000"}"##).unwrap();
        assert_eq!(config.accent_color, "#000");
        assert_eq!(config.site_name, "Urugano Realty");
    }
}
