//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use thiserror::Error;

use super::settings::{MAX_CONTACT_DELAY_MS, SiteSettings};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SITE_URL must start with http:// or https://, got `{0}`")]
    InvalidSiteUrl(String),

    #[error("CONTACT_DELAY_MS must be a whole number of milliseconds, got `{0}`")]
    InvalidDelay(String),

    #[error("CONTACT_DELAY_MS must be at most {max}, got {value}")]
    DelayTooLong { value: u64, max: u64 },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Canonical base URL used for links in the document head
    /// Example: https://arc.build
    pub site_url: Option<String>,

    /// Override for the simulated contact form delay
    pub contact_delay_ms: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Invalid values are logged and ignored so the site still starts with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let site_url = lookup("SITE_URL").and_then(|raw| match parse_site_url(&raw) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("Ignoring SITE_URL: {}", e);
                None
            }
        });

        let contact_delay_ms =
            lookup("CONTACT_DELAY_MS").and_then(|raw| match parse_delay(&raw) {
                Ok(ms) => Some(ms),
                Err(e) => {
                    tracing::warn!("Ignoring CONTACT_DELAY_MS: {}", e);
                    None
                }
            });

        Self {
            site_url,
            contact_delay_ms,
        }
    }

    /// Check if a canonical site URL is configured
    pub fn has_site_url(&self) -> bool {
        self.site_url.is_some()
    }

    /// Check if the contact delay is overridden
    pub fn has_contact_delay(&self) -> bool {
        self.contact_delay_ms.is_some()
    }

    /// Settings handed to the renderer, with defaults filled in
    pub fn site_settings(&self) -> SiteSettings {
        let defaults = SiteSettings::default();
        SiteSettings {
            site_url: self.site_url.clone().unwrap_or(defaults.site_url),
            contact_delay_ms: self.contact_delay_ms.unwrap_or(defaults.contact_delay_ms),
        }
    }
}

/// Validate a base URL and strip any trailing slash
pub fn parse_site_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let has_host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .is_some_and(|rest| !rest.trim_matches('/').is_empty());
    if !has_host {
        return Err(ConfigError::InvalidSiteUrl(raw.to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

pub fn parse_delay(raw: &str) -> Result<u64, ConfigError> {
    let value: u64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidDelay(raw.to_string()))?;
    if value > MAX_CONTACT_DELAY_MS {
        return Err(ConfigError::DelayTooLong {
            value,
            max: MAX_CONTACT_DELAY_MS,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::SIMULATED_DELAY_MS;
    use crate::core::seo::DEFAULT_SITE_URL;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup_from(&[
            ("SITE_URL", "https://staging.arc.build/"),
            ("CONTACT_DELAY_MS", "200"),
        ]));

        assert_eq!(
            config.site_url,
            Some("https://staging.arc.build".to_string())
        );
        assert_eq!(config.contact_delay_ms, Some(200));
        assert!(config.has_site_url());
        assert!(config.has_contact_delay());
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config, Config::default());
        assert!(!config.has_site_url());
        assert!(!config.has_contact_delay());
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let config = Config::from_lookup(lookup_from(&[
            ("SITE_URL", "arc.build"),
            ("CONTACT_DELAY_MS", "fast"),
        ]));

        assert!(config.site_url.is_none());
        assert!(config.contact_delay_ms.is_none());
    }

    #[test]
    fn test_site_settings_defaults() {
        let settings = Config::default().site_settings();

        assert_eq!(settings.site_url, DEFAULT_SITE_URL);
        assert_eq!(settings.contact_delay_ms, SIMULATED_DELAY_MS);
    }

    #[test]
    fn test_site_settings_overrides() {
        let config = Config {
            site_url: Some("http://localhost:3000".to_string()),
            contact_delay_ms: Some(0),
        };
        let settings = config.site_settings();

        assert_eq!(settings.site_url, "http://localhost:3000");
        assert_eq!(settings.contact_delay_ms, 0);
    }

    // ========================================================================
    // Parsing
    // ========================================================================

    #[test]
    fn test_parse_site_url() {
        assert_eq!(
            parse_site_url(" https://arc.build/ "),
            Ok("https://arc.build".to_string())
        );
        assert!(parse_site_url("https://").is_err());
        assert!(parse_site_url("ftp://arc.build").is_err());
    }

    #[test]
    fn test_parse_delay() {
        assert_eq!(parse_delay("1500"), Ok(1500));
        assert_eq!(
            parse_delay("-5"),
            Err(ConfigError::InvalidDelay("-5".to_string()))
        );
        assert_eq!(
            parse_delay("60000"),
            Err(ConfigError::DelayTooLong {
                value: 60000,
                max: MAX_CONTACT_DELAY_MS
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::InvalidDelay("x".to_string());
        assert!(err.to_string().contains("CONTACT_DELAY_MS"));
    }
}
