//! Site routes and link groups.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Product,
    Contact,
    Privacy,
    Terms,
}

/// Links in the header, drawer and footer
pub const NAV_LINKS: [Route; 4] = [Route::Home, Route::About, Route::Product, Route::Contact];

/// Small print links in the footer
pub const LEGAL_LINKS: [Route; 2] = [Route::Privacy, Route::Terms];

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::About,
        Route::Product,
        Route::Contact,
        Route::Privacy,
        Route::Terms,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Product => "/product",
            Route::Contact => "/contact",
            Route::Privacy => "/privacy",
            Route::Terms => "/terms",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Product => "Product",
            Route::Contact => "Contact",
            Route::Privacy => "Privacy",
            Route::Terms => "Terms",
        }
    }

    /// Document title
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Arc | Project Management for Residential Construction",
            Route::About => "About | Arc",
            Route::Product => "Product | Arc",
            Route::Contact => "Contact | Arc",
            Route::Privacy => "Privacy Policy | Arc",
            Route::Terms => "Terms of Service | Arc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = Route::ALL.iter().map(Route::path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Route::ALL.len());
    }

    #[test]
    fn test_titles_carry_brand() {
        for route in Route::ALL {
            assert!(route.title().contains("Arc"), "{:?}", route);
        }
    }

    #[test]
    fn test_nav_links_order() {
        let labels: Vec<_> = NAV_LINKS.iter().map(Route::label).collect();
        assert_eq!(labels, vec!["Home", "About", "Product", "Contact"]);
    }
}
