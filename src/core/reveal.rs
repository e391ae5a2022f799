//! Reveal-on-view state machine
//!
//! A reveal starts `Idle`, moves to `Entering` the first time its element
//! intersects the viewport and to `Settled` once the transition has run.
//! It never goes back: scrolling out and in again does not replay anything.

use super::easing::CubicBezier;

/// Default slide distance for revealed content
pub const DEFAULT_DISTANCE_PX: f64 = 30.0;

/// Default transition length
pub const DEFAULT_DURATION_MS: u32 = 600;

/// Default IntersectionObserver root margin (trigger slightly inside the viewport)
pub const DEFAULT_MARGIN: &str = "-50px";

/// Phase of a single reveal instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Idle,
    Entering,
    Settled,
}

impl RevealPhase {
    /// Value for the `data-reveal` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealPhase::Idle => "idle",
            RevealPhase::Entering => "entering",
            RevealPhase::Settled => "settled",
        }
    }
}

/// Direction the content travels in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealDirection {
    /// Rises from below
    #[default]
    Up,
    /// Drops from above
    Down,
    /// Slides in from the left
    Left,
    /// Slides in from the right
    Right,
    /// Fades in place
    None,
}

impl RevealDirection {
    /// Initial `(x, y)` offset before the reveal runs
    pub fn initial_offset(&self, distance: f64) -> (f64, f64) {
        match self {
            RevealDirection::Up => (0.0, distance),
            RevealDirection::Down => (0.0, -distance),
            RevealDirection::Left => (-distance, 0.0),
            RevealDirection::Right => (distance, 0.0),
            RevealDirection::None => (0.0, 0.0),
        }
    }
}

/// Tuning for one reveal wrapper
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub direction: RevealDirection,
    pub distance_px: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            direction: RevealDirection::Up,
            distance_px: DEFAULT_DISTANCE_PX,
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0,
            margin: DEFAULT_MARGIN.to_string(),
        }
    }
}

impl RevealOptions {
    pub fn direction(mut self, direction: RevealDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn distance(mut self, distance_px: f64) -> Self {
        self.distance_px = distance_px;
        self
    }

    pub fn duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Total time from trigger until the element is at rest
    pub fn total_ms(&self) -> u32 {
        self.delay_ms.saturating_add(self.duration_ms)
    }
}

/// Animate-once reveal tracker
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reveal {
    phase: RevealPhase,
    options: RevealOptions,
}

impl Reveal {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            phase: RevealPhase::Idle,
            options,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Whether the element has ever entered the viewport
    pub fn has_entered(&self) -> bool {
        self.phase != RevealPhase::Idle
    }

    /// Feed one visibility observation.
    ///
    /// Returns `true` exactly once: on the first intersecting observation.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if is_intersecting && self.phase == RevealPhase::Idle {
            self.phase = RevealPhase::Entering;
            true
        } else {
            false
        }
    }

    /// Mark the entering transition as finished. No-op in other phases.
    pub fn settle(&mut self) {
        if self.phase == RevealPhase::Entering {
            self.phase = RevealPhase::Settled;
        }
    }

    /// Inline style for the current phase
    pub fn style(&self) -> String {
        reveal_style(self.has_entered(), &self.options)
    }
}

/// Inline style for a reveal wrapper, either at its initial offset or at rest.
pub fn reveal_style(entered: bool, options: &RevealOptions) -> String {
    let (x, y) = if entered {
        (0.0, 0.0)
    } else {
        options.direction.initial_offset(options.distance_px)
    };
    let opacity = if entered { 1 } else { 0 };
    let easing = CubicBezier::REVEAL.css();

    format!(
        "opacity: {opacity}; transform: translate3d({x}px, {y}px, 0); \
         transition: opacity {d}ms {easing} {delay}ms, transform {d}ms {easing} {delay}ms; \
         will-change: opacity, transform;",
        d = options.duration_ms,
        delay = options.delay_ms,
    )
}

/// Delay for the `index`-th item of a staggered group
pub fn stagger_delay(index: usize, step_ms: u32, base_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(index.saturating_mul(step_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_starts_idle() {
        let reveal = Reveal::default();
        assert_eq!(reveal.phase(), RevealPhase::Idle);
        assert!(!reveal.has_entered());
    }

    #[test]
    fn test_reveal_ignores_non_intersecting() {
        let mut reveal = Reveal::default();
        assert!(!reveal.observe(false));
        assert!(!reveal.observe(false));
        assert_eq!(reveal.phase(), RevealPhase::Idle);
    }

    #[test]
    fn test_reveal_fires_once() {
        let mut reveal = Reveal::default();
        assert!(reveal.observe(true));
        assert_eq!(reveal.phase(), RevealPhase::Entering);

        // Scroll out and back in repeatedly
        let mut fired = 0;
        for visible in [false, true, false, true, true, false] {
            if reveal.observe(visible) {
                fired += 1;
            }
        }
        assert_eq!(fired, 0);
        assert!(reveal.has_entered());
    }

    #[test]
    fn test_reveal_settles_and_stays_settled() {
        let mut reveal = Reveal::default();
        reveal.settle();
        assert_eq!(reveal.phase(), RevealPhase::Idle);

        reveal.observe(true);
        reveal.settle();
        assert_eq!(reveal.phase(), RevealPhase::Settled);

        assert!(!reveal.observe(true));
        assert!(!reveal.observe(false));
        assert_eq!(reveal.phase(), RevealPhase::Settled);
    }

    #[test]
    fn test_initial_offsets() {
        assert_eq!(RevealDirection::Up.initial_offset(30.0), (0.0, 30.0));
        assert_eq!(RevealDirection::Down.initial_offset(30.0), (0.0, -30.0));
        assert_eq!(RevealDirection::Left.initial_offset(20.0), (-20.0, 0.0));
        assert_eq!(RevealDirection::Right.initial_offset(20.0), (20.0, 0.0));
        assert_eq!(RevealDirection::None.initial_offset(20.0), (0.0, 0.0));
    }

    #[test]
    fn test_style_before_and_after_entry() {
        let mut reveal = Reveal::new(RevealOptions::default().delay(200));
        let hidden = reveal.style();
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translate3d(0px, 30px, 0)"));
        assert!(hidden.contains("600ms cubic-bezier(0.21, 0.47, 0.32, 0.98) 200ms"));

        reveal.observe(true);
        let shown = reveal.style();
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("translate3d(0px, 0px, 0)"));
    }

    #[test]
    fn test_options_builder() {
        let options = RevealOptions::default()
            .direction(RevealDirection::Left)
            .distance(20.0)
            .duration(500)
            .delay(150);
        assert_eq!(options.direction, RevealDirection::Left);
        assert_eq!(options.total_ms(), 650);
        assert_eq!(options.margin, "-50px");
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 100, 0), 0);
        assert_eq!(stagger_delay(3, 100, 0), 300);
        assert_eq!(stagger_delay(2, 150, 100), 400);
        assert_eq!(stagger_delay(usize::MAX, 100, 0), u32::MAX);
    }
}
