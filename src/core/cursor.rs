//! Custom cursor overlay state
//!
//! Tracks the pointer, classifies what it is hovering and decides the size
//! of the dot and ring drawn on top of the page. Touch-first devices get no
//! overlay at all.

use super::magnetic::Point;

/// Attribute that marks a container as "expandable" for the cursor
pub const EXPAND_ATTRIBUTE: &str = "data-cursor-expand";

/// Where the overlay sits before the first pointer move
pub const OFFSCREEN: Point = Point {
    x: -100.0,
    y: -100.0,
};

/// Primary input precision, from the `(pointer: coarse)` media query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Fine,
    Coarse,
}

impl PointerKind {
    pub fn from_coarse_match(is_coarse: bool) -> Self {
        if is_coarse {
            PointerKind::Coarse
        } else {
            PointerKind::Fine
        }
    }

    /// Whether the overlay should render at all
    pub fn shows_overlay(&self) -> bool {
        *self == PointerKind::Fine
    }
}

/// What the pointer is over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverKind {
    #[default]
    Default,
    /// Links, buttons, form inputs
    Interactive,
    /// Marked containers, images, video
    Expandable,
}

/// The bits of an element the classifier cares about
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementInfo {
    /// Lowercase tag name
    pub tag: String,
    pub role: Option<String>,
    pub expand_marker: bool,
}

impl ElementInfo {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            role: None,
            expand_marker: false,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn expandable(mut self) -> Self {
        self.expand_marker = true;
        self
    }

    fn is_interactive(&self) -> bool {
        matches!(
            self.tag.as_str(),
            "a" | "button" | "input" | "textarea" | "select"
        ) || self.role.as_deref() == Some("button")
    }

    fn is_expandable(&self) -> bool {
        self.expand_marker || matches!(self.tag.as_str(), "img" | "video")
    }
}

/// Classify a hover target given its ancestor chain (target first, root last).
///
/// Expandable wins over interactive, so a link inside a marked card still
/// gets the large ring.
pub fn classify<'a, I>(chain: I) -> HoverKind
where
    I: IntoIterator<Item = &'a ElementInfo>,
{
    let mut interactive = false;
    for element in chain {
        if element.is_expandable() {
            return HoverKind::Expandable;
        }
        interactive |= element.is_interactive();
    }
    if interactive {
        HoverKind::Interactive
    } else {
        HoverKind::Default
    }
}

/// Diameters in px for the inner dot and outer ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorSize {
    pub dot: u32,
    pub ring: u32,
}

impl HoverKind {
    pub fn size(&self) -> CursorSize {
        match self {
            HoverKind::Default => CursorSize { dot: 12, ring: 40 },
            HoverKind::Interactive => CursorSize { dot: 40, ring: 50 },
            HoverKind::Expandable => CursorSize { dot: 60, ring: 80 },
        }
    }
}

/// Overlay state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorState {
    pub position: Point,
    pub hover: HoverKind,
    pub visible: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            position: OFFSCREEN,
            hover: HoverKind::Default,
            visible: true,
        }
    }
}

impl CursorState {
    pub fn on_move(&mut self, position: Point) {
        self.position = position;
    }

    pub fn on_hover(&mut self, hover: HoverKind) {
        self.hover = hover;
    }

    pub fn on_enter_document(&mut self) {
        self.visible = true;
    }

    pub fn on_leave_document(&mut self) {
        self.visible = false;
    }

    pub fn dot_opacity(&self) -> f64 {
        if self.visible { 1.0 } else { 0.0 }
    }

    pub fn ring_opacity(&self) -> f64 {
        if self.visible { 0.5 } else { 0.0 }
    }

    /// Transform that centers the overlay on the pointer
    pub fn transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) translate(-50%, -50%)",
            self.position.x, self.position.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coarse_pointer_hides_overlay() {
        assert!(!PointerKind::from_coarse_match(true).shows_overlay());
        assert!(PointerKind::from_coarse_match(false).shows_overlay());
    }

    #[test]
    fn test_classify_plain_text() {
        let chain = [ElementInfo::new("span"), ElementInfo::new("p"), ElementInfo::new("body")];
        assert_eq!(classify(&chain), HoverKind::Default);
    }

    #[test]
    fn test_classify_nested_link() {
        let chain = [ElementInfo::new("SPAN"), ElementInfo::new("a"), ElementInfo::new("nav")];
        assert_eq!(classify(&chain), HoverKind::Interactive);
    }

    #[test]
    fn test_classify_role_button() {
        let chain = [ElementInfo::new("div").with_role("button")];
        assert_eq!(classify(&chain), HoverKind::Interactive);
    }

    #[test]
    fn test_classify_form_inputs() {
        for tag in ["input", "textarea", "select", "button"] {
            assert_eq!(classify(&[ElementInfo::new(tag)]), HoverKind::Interactive);
        }
    }

    #[test]
    fn test_classify_expandable() {
        assert_eq!(classify(&[ElementInfo::new("img")]), HoverKind::Expandable);
        assert_eq!(classify(&[ElementInfo::new("video")]), HoverKind::Expandable);

        let chain = [ElementInfo::new("h3"), ElementInfo::new("div").expandable()];
        assert_eq!(classify(&chain), HoverKind::Expandable);
    }

    #[test]
    fn test_expandable_beats_interactive() {
        let chain = [
            ElementInfo::new("button"),
            ElementInfo::new("div").expandable(),
        ];
        assert_eq!(classify(&chain), HoverKind::Expandable);
    }

    #[test]
    fn test_sizes() {
        assert_eq!(HoverKind::Default.size(), CursorSize { dot: 12, ring: 40 });
        assert_eq!(HoverKind::Interactive.size(), CursorSize { dot: 40, ring: 50 });
        assert_eq!(HoverKind::Expandable.size(), CursorSize { dot: 60, ring: 80 });
    }

    #[test]
    fn test_visibility_and_opacity() {
        let mut state = CursorState::default();
        assert_eq!(state.position, OFFSCREEN);
        assert_eq!(state.dot_opacity(), 1.0);

        state.on_leave_document();
        assert_eq!(state.dot_opacity(), 0.0);
        assert_eq!(state.ring_opacity(), 0.0);

        state.on_enter_document();
        assert_eq!(state.ring_opacity(), 0.5);
    }

    #[test]
    fn test_move_updates_transform() {
        let mut state = CursorState::default();
        state.on_move(Point::new(320.0, 48.5));
        assert_eq!(
            state.transform(),
            "translate3d(320px, 48.5px, 0) translate(-50%, -50%)"
        );
    }
}
