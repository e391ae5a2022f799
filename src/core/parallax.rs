//! Hero parallax and pointer-reactive background math.

use super::easing::map_range;
use super::magnetic::Point;

/// Portion of the hero's scroll range over which the content fades out
pub const HERO_FADE_END: f64 = 0.5;

/// Smoothing factor for the background orbs (fraction of remaining distance per frame)
pub const ORB_SMOOTHING: f64 = 0.08;

/// Content transform for the hero while the page scrolls past it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroTransform {
    pub opacity: f64,
    pub scale: f64,
    pub translate_y: f64,
}

impl HeroTransform {
    /// `scroll_y` is the window scroll, `hero_top`/`hero_height` the section
    /// box in document coordinates. Progress runs from the hero top touching
    /// the viewport top until its bottom does.
    pub fn at(scroll_y: f64, hero_top: f64, hero_height: f64) -> Self {
        let progress = if hero_height > 0.0 {
            (scroll_y - hero_top) / hero_height
        } else {
            0.0
        };
        Self::from_progress(progress)
    }

    pub fn from_progress(progress: f64) -> Self {
        let range = (0.0, HERO_FADE_END);
        Self {
            opacity: map_range(progress, range, (1.0, 0.0)),
            scale: map_range(progress, range, (1.0, 0.95)),
            translate_y: map_range(progress, range, (0.0, 100.0)),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d(0, {}px, 0) scale({});",
            self.opacity, self.translate_y, self.scale
        )
    }
}

/// One radial gradient orb that follows the pointer within a range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    /// Left position range in percent
    pub x_range: (f64, f64),
    /// Top position range in percent
    pub y_range: (f64, f64),
    pub size_px: u32,
    pub color: &'static str,
    pub opacity: f64,
}

impl Orb {
    pub fn position(&self, pointer: Point) -> (f64, f64) {
        (
            map_range(pointer.x, (0.0, 1.0), self.x_range),
            map_range(pointer.y, (0.0, 1.0), self.y_range),
        )
    }

    pub fn style(&self, pointer: Point) -> String {
        let (left, top) = self.position(pointer);
        format!(
            "width: {size}px; height: {size}px; left: {left}%; top: {top}%; opacity: {opacity}; \
             transform: translate(-50%, -50%); \
             background: radial-gradient(circle, {color} 0%, transparent 70%);",
            size = self.size_px,
            opacity = self.opacity,
            color = self.color,
        )
    }
}

pub const HERO_ORBS: [Orb; 3] = [
    Orb {
        x_range: (20.0, 40.0),
        y_range: (10.0, 30.0),
        size_px: 800,
        color: "rgba(193,113,75,0.4)",
        opacity: 0.4,
    },
    Orb {
        x_range: (70.0, 90.0),
        y_range: (60.0, 80.0),
        size_px: 600,
        color: "rgba(91,155,213,0.4)",
        opacity: 0.3,
    },
    Orb {
        x_range: (40.0, 60.0),
        y_range: (70.0, 90.0),
        size_px: 500,
        color: "rgba(212,184,150,0.4)",
        opacity: 0.2,
    },
];

/// Number of drifting particles in the hero background
pub const PARTICLE_COUNT: usize = 20;

/// One drifting speck. Values are derived from the index so the server and
/// the browser render identical markup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub rise_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Particle {
    pub fn nth(index: usize) -> Self {
        let r = |salt: u64| unit_hash(index as u64, salt);
        Self {
            left_pct: r(1) * 100.0,
            top_pct: r(2) * 100.0,
            rise_px: 100.0 + r(3) * 200.0,
            duration_s: 10.0 + r(4) * 10.0,
            delay_s: r(5) * 10.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; --rise: -{:.0}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left_pct, self.top_pct, self.rise_px, self.duration_s, self.delay_s
        )
    }
}

/// Deterministic value in `[0, 1)` (splitmix64 finalizer)
fn unit_hash(index: u64, salt: u64) -> f64 {
    let mut z = index
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(salt.wrapping_mul(0xBF58_476D_1CE4_E5B9));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 11) as f64 / (1u64 << 53) as f64
}

/// Exponentially smoothed pointer position in normalized coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedPointer {
    current: Point,
    target: Point,
}

impl Default for SmoothedPointer {
    fn default() -> Self {
        let center = Point::new(0.5, 0.5);
        Self {
            current: center,
            target: center,
        }
    }
}

impl SmoothedPointer {
    pub fn set_target(&mut self, target: Point) {
        self.target = target;
    }

    pub fn current(&self) -> Point {
        self.current
    }

    /// Advance one frame; snaps once close enough to stop drifting forever
    pub fn step(&mut self) -> Point {
        let dx = self.target.x - self.current.x;
        let dy = self.target.y - self.current.y;
        if dx.abs() < 1e-4 && dy.abs() < 1e-4 {
            self.current = self.target;
        } else {
            self.current.x += dx * ORB_SMOOTHING;
            self.current.y += dy * ORB_SMOOTHING;
        }
        self.current
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_at_rest() {
        let t = HeroTransform::at(0.0, 0.0, 900.0);
        assert_eq!(t.opacity, 1.0);
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.translate_y, 0.0);
    }

    #[test]
    fn test_hero_half_way_through_fade() {
        let t = HeroTransform::from_progress(0.25);
        assert!((t.opacity - 0.5).abs() < 1e-9);
        assert!((t.scale - 0.975).abs() < 1e-9);
        assert!((t.translate_y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_hero_fully_faded_past_half() {
        let t = HeroTransform::at(800.0, 0.0, 900.0);
        assert_eq!(t.opacity, 0.0);
        assert_eq!(t.scale, 0.95);
        assert_eq!(t.translate_y, 100.0);
    }

    #[test]
    fn test_hero_zero_height() {
        assert_eq!(HeroTransform::at(300.0, 0.0, 0.0).opacity, 1.0);
    }

    #[test]
    fn test_orb_positions() {
        let orb = HERO_ORBS[0];
        assert_eq!(orb.position(Point::new(0.0, 0.0)), (20.0, 10.0));
        assert_eq!(orb.position(Point::new(1.0, 1.0)), (40.0, 30.0));
        assert_eq!(orb.position(Point::new(0.5, 0.5)), (30.0, 20.0));
        // Pointer outside the hero clamps
        assert_eq!(orb.position(Point::new(2.0, -1.0)), (40.0, 10.0));
    }

    #[test]
    fn test_particles_are_stable_and_in_range() {
        for i in 0..PARTICLE_COUNT {
            let p = Particle::nth(i);
            assert_eq!(p, Particle::nth(i));
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((100.0..300.0).contains(&p.rise_px));
            assert!((10.0..20.0).contains(&p.duration_s));
        }
        assert_ne!(Particle::nth(0), Particle::nth(1));
    }

    #[test]
    fn test_smoothed_pointer_converges() {
        let mut pointer = SmoothedPointer::default();
        pointer.set_target(Point::new(1.0, 0.0));
        let first = pointer.step();
        assert!(first.x > 0.5 && first.x < 1.0);

        for _ in 0..500 {
            pointer.step();
        }
        assert!(pointer.is_settled());
        assert_eq!(pointer.current(), Point::new(1.0, 0.0));
    }
}
