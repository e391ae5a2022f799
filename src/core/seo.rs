//! Page metadata and JSON-LD structured data.

use serde_json::{Value, json};

use super::content::{BRAND, MODULES, TAGLINE};
use super::routes::Route;

/// Used when `SITE_URL` is not configured
pub const DEFAULT_SITE_URL: &str = "https://arc.build";

pub const OG_IMAGE_PATH: &str = "/arc-app.png";

const KEYWORDS: &str = "construction project management, residential construction software, \
builder software, Southwest Florida builders, Gantt scheduling, change orders, client portal, \
QuickBooks integration";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
}

impl PageMeta {
    pub fn for_route(route: Route) -> Self {
        let description = match route {
            Route::Home => {
                "Comprehensive project management software built for residential builders and trades. \
                 Sales pipeline, scheduling, estimating, documents, client portals and warranty tracking in one platform."
            }
            Route::About => {
                "Arc was built in Southwest Florida by people who grew up in the trade, \
                 for builders who need software as precise as their work."
            }
            Route::Product => {
                "Explore Arc's modules: project lifecycle, financial tools, Gantt scheduling, \
                 document management, mobile field access and client portals."
            }
            Route::Contact => {
                "Schedule a demo or ask a question. The Arc team replies within 24 hours."
            }
            Route::Privacy => "How Arc collects, uses and protects your information.",
            Route::Terms => "The terms that govern your use of the Arc website and platform.",
        };
        Self {
            title: route.title(),
            description,
            keywords: KEYWORDS,
        }
    }
}

/// Join the site base and a route path without doubling slashes
pub fn canonical_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    match path.trim_start_matches('/') {
        "" => format!("{}/", base),
        rest => format!("{}/{}", base, rest),
    }
}

/// Organization and SoftwareApplication graph for the document head
pub fn structured_data(base: &str) -> Value {
    let url = canonical_url(base, "/");
    let features: Vec<&str> = MODULES.iter().map(|m| m.title).collect();

    json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "Organization",
                "name": BRAND,
                "url": url,
                "email": "hello@arc.build",
                "address": {
                    "@type": "PostalAddress",
                    "addressLocality": "Naples",
                    "addressRegion": "FL",
                    "addressCountry": "US"
                }
            },
            {
                "@type": "SoftwareApplication",
                "name": BRAND,
                "applicationCategory": "BusinessApplication",
                "operatingSystem": "Web, iOS, Android",
                "description": format!("{} {}", BRAND, TAGLINE),
                "url": url,
                "image": canonical_url(base, OG_IMAGE_PATH),
                "featureList": features
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_url_joins_cleanly() {
        assert_eq!(canonical_url("https://arc.build", "/"), "https://arc.build/");
        assert_eq!(
            canonical_url("https://arc.build/", "/about"),
            "https://arc.build/about"
        );
        assert_eq!(
            canonical_url("http://localhost:3000", "contact"),
            "http://localhost:3000/contact"
        );
    }

    #[test]
    fn test_every_route_has_meta() {
        for route in Route::ALL {
            let meta = PageMeta::for_route(route);
            assert_eq!(meta.title, route.title());
            assert!(!meta.description.is_empty());
        }
    }

    #[test]
    fn test_structured_data_shape() {
        let data = structured_data("https://example.com");
        let graph = data["@graph"].as_array().unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph[0]["@type"], "Organization");
        assert_eq!(graph[1]["url"], "https://example.com/");
        assert_eq!(
            graph[1]["featureList"].as_array().unwrap().len(),
            MODULES.len()
        );
    }
}
