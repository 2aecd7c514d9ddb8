//! Site configuration embedded from `site.toml`.
//!
//! Every key is optional; missing keys take the built-in defaults. A file that
//! fails to parse is logged and replaced wholesale by the defaults so the page
//! always renders.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::core::locale::Locale;
use crate::core::scroll::DEFAULT_SCROLL_THRESHOLD_PX;
use crate::error::SiteResult;

const SITE_TOML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/site.toml"));

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Short locale code used when the route or a switch request is unsupported.
    pub default_locale: String,
    pub site_url: String,
    pub hero_interval_ms: u64,
    pub carousel_interval_ms: u64,
    pub scroll_threshold_px: f64,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub linkedin: String,
    pub upwork: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::En.code().to_string(),
            site_url: "https://www.devco-solution.online".to_string(),
            hero_interval_ms: 3500,
            carousel_interval_ms: 5000,
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            contact: ContactConfig::default(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "fastwings@gmail.com".to_string(),
            linkedin: "https://www.linkedin.com/in/swolberg".to_string(),
            upwork: "https://upwork.com/freelancers/swolberg".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(src: &str) -> SiteResult<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Parse the embedded `site.toml`, falling back to defaults on error.
    pub fn load() -> Self {
        match Self::from_toml_str(SITE_TOML) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err}; using built-in site defaults");
                Self::default()
            }
        }
    }

    /// The configured default locale. An unsupported code means English.
    pub fn default_locale(&self) -> Locale {
        Locale::resolve_or(&self.default_locale, Locale::En)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact.email)
    }

    /// Absolute URL for a locale landing page, e.g. `https://…/he`.
    pub fn locale_url(&self, locale: Locale) -> String {
        format!("{}/{}", self.site_url.trim_end_matches('/'), locale.code())
    }
}

static CONFIG: Lazy<SiteConfig> = Lazy::new(SiteConfig::load);

/// Process-wide configuration.
pub fn site() -> &'static SiteConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::from_toml_str(SITE_TOML).expect("site.toml must parse");
        assert_eq!(config.hero_interval_ms, 3500);
        assert_eq!(config.carousel_interval_ms, 5000);
        assert_eq!(config.default_locale(), Locale::En);
    }

    #[test]
    fn missing_keys_take_defaults() {
        let config = SiteConfig::from_toml_str("default_locale = \"he\"").unwrap();
        assert_eq!(config.default_locale(), Locale::He);
        assert_eq!(config.scroll_threshold_px, 20.0);
        assert_eq!(config.contact, ContactConfig::default());
    }

    #[test]
    fn unsupported_default_locale_means_english() {
        let config = SiteConfig::from_toml_str("default_locale = \"fr\"").unwrap();
        assert_eq!(config.default_locale(), Locale::En);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = SiteConfig::from_toml_str("hero_interval_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn urls_are_joined_without_double_slashes() {
        let config = SiteConfig {
            site_url: "https://example.test/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.locale_url(Locale::He), "https://example.test/he");
        assert_eq!(config.mailto(), "mailto:fastwings@gmail.com");
    }
}
