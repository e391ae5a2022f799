//! Runtime settings shared by the server render and the hydrated client.
//!
//! The server builds these from [`Config`](super::config) and writes them
//! into `<meta>` tags in the document head; the client reads them back
//! before hydrating so both sides render the same thing.

use super::contact::SIMULATED_DELAY_MS;
use super::seo::DEFAULT_SITE_URL;

pub const META_SITE_URL: &str = "arc:site-url";
pub const META_CONTACT_DELAY: &str = "arc:contact-delay-ms";

/// Longest simulated contact delay either side will accept
pub const MAX_CONTACT_DELAY_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub site_url: String,
    pub contact_delay_ms: u64,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            contact_delay_ms: SIMULATED_DELAY_MS,
        }
    }
}

impl SiteSettings {
    /// Rebuild from meta tag contents; missing or malformed values fall back to defaults
    pub fn from_meta(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            site_url: lookup(META_SITE_URL)
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.site_url),
            contact_delay_ms: lookup(META_CONTACT_DELAY)
                .and_then(|raw| raw.trim().parse().ok())
                .filter(|delay| *delay <= MAX_CONTACT_DELAY_MS)
                .unwrap_or(defaults.contact_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_meta_reads_values() {
        let settings = SiteSettings::from_meta(|name| match name {
            META_SITE_URL => Some("http://localhost:3000".to_string()),
            META_CONTACT_DELAY => Some("250".to_string()),
            _ => None,
        });
        assert_eq!(settings.site_url, "http://localhost:3000");
        assert_eq!(settings.contact_delay_ms, 250);
    }

    #[test]
    fn test_from_meta_falls_back() {
        let settings = SiteSettings::from_meta(|name| match name {
            META_CONTACT_DELAY => Some("soon".to_string()),
            _ => None,
        });
        assert_eq!(settings, SiteSettings::default());
    }

    #[test]
    fn test_from_meta_rejects_delay_over_cap() {
        let at_cap = SiteSettings::from_meta(|name| match name {
            META_CONTACT_DELAY => Some(MAX_CONTACT_DELAY_MS.to_string()),
            _ => None,
        });
        assert_eq!(at_cap.contact_delay_ms, MAX_CONTACT_DELAY_MS);

        let too_long = SiteSettings::from_meta(|name| match name {
            META_CONTACT_DELAY => Some("86400000".to_string()),
            _ => None,
        });
        assert_eq!(too_long.contact_delay_ms, SiteSettings::default().contact_delay_ms);
    }
}
