//! Navigation bar state: scrolled styling and the mobile drawer.
//!
//! The two flags are independent. The drawer always closes when the route
//! changes, whether or not it was open.

use super::easing::clamp_progress;

/// Scroll distance after which the bar switches to its solid style
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    scrolled: bool,
    drawer_open: bool,
    pathname: String,
}

impl NavState {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            scrolled: false,
            drawer_open: false,
            pathname: pathname.into(),
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > SCROLL_THRESHOLD_PX;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// Record a navigation. Always closes the drawer.
    pub fn on_route_change(&mut self, pathname: impl Into<String>) {
        self.pathname = pathname.into();
        self.drawer_open = false;
    }

    pub fn is_active(&self, href: &str) -> bool {
        is_active(href, &self.pathname)
    }
}

/// Exact-match active link check
pub fn is_active(href: &str, pathname: &str) -> bool {
    href == pathname
}

/// Fraction of the page scrolled, for the progress bar under the header
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    clamp_progress(scroll_y / scrollable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        let mut nav = NavState::new("/");
        nav.on_scroll(0.0);
        assert!(!nav.is_scrolled());
        nav.on_scroll(20.0);
        assert!(!nav.is_scrolled());
        nav.on_scroll(20.5);
        assert!(nav.is_scrolled());
        nav.on_scroll(3.0);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_toggle_drawer() {
        let mut nav = NavState::new("/");
        nav.toggle_drawer();
        assert!(nav.is_drawer_open());
        nav.toggle_drawer();
        assert!(!nav.is_drawer_open());
    }

    #[test]
    fn test_route_change_closes_open_drawer() {
        let mut nav = NavState::new("/");
        nav.toggle_drawer();
        nav.on_route_change("/about");
        assert!(!nav.is_drawer_open());
        assert_eq!(nav.pathname(), "/about");
    }

    #[test]
    fn test_route_change_keeps_closed_drawer_closed() {
        let mut nav = NavState::new("/");
        nav.on_route_change("/product");
        assert!(!nav.is_drawer_open());
    }

    #[test]
    fn test_flags_are_independent() {
        let mut nav = NavState::new("/");
        nav.on_scroll(500.0);
        nav.toggle_drawer();
        nav.on_route_change("/contact");
        assert!(nav.is_scrolled());
        assert!(!nav.is_drawer_open());
    }

    #[test]
    fn test_active_link_exact_match() {
        let nav = NavState::new("/about");
        assert!(nav.is_active("/about"));
        assert!(!nav.is_active("/"));
        assert!(!is_active("/about", "/about/team"));
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }
}
