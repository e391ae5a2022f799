//! Magnetic hover offset
//!
//! While the pointer is over a magnetic element, the element drifts toward
//! the pointer by a fraction of the pointer-to-center distance. Leaving the
//! element springs it back to exactly `(0, 0)`.

/// Default pull strength
pub const DEFAULT_STRENGTH: f64 = 0.3;

/// Pull strength used by hero and call-to-action buttons
pub const CTA_STRENGTH: f64 = 0.25;

/// Spring-like CSS transition approximating a light, damped spring
pub const SPRING_TRANSITION: &str = "transform 0.35s cubic-bezier(0.22, 1.2, 0.36, 1)";

/// Point in client (viewport) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Element bounding box in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Position of `point` relative to this box, each axis normalized to `[0, 1]`
    /// when inside. Zero-sized boxes report the center.
    pub fn normalize(&self, point: Point) -> Point {
        let nx = if self.width > 0.0 {
            (point.x - self.left) / self.width
        } else {
            0.5
        };
        let ny = if self.height > 0.0 {
            (point.y - self.top) / self.height
        } else {
            0.5
        };
        Point::new(nx, ny)
    }
}

/// Per-element magnetic state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnetic {
    strength: f64,
    offset: Point,
}

impl Default for Magnetic {
    fn default() -> Self {
        Self::new(DEFAULT_STRENGTH)
    }
}

impl Magnetic {
    pub fn new(strength: f64) -> Self {
        Self {
            strength,
            offset: Point::ORIGIN,
        }
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Recompute the offset for a pointer at `pointer` over an element at `rect`
    pub fn on_pointer_move(&mut self, pointer: Point, rect: Rect) -> Point {
        let center = rect.center();
        self.offset = Point::new(
            (pointer.x - center.x) * self.strength,
            (pointer.y - center.y) * self.strength,
        );
        self.offset
    }

    pub fn on_pointer_leave(&mut self) {
        self.offset = Point::ORIGIN;
    }

    /// CSS transform for the current offset
    pub fn transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0)",
            self.offset.x, self.offset.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Rect {
        Rect::new(100.0, 200.0, 200.0, 56.0)
    }

    #[test]
    fn test_rect_center() {
        assert_eq!(button().center(), Point::new(200.0, 228.0));
    }

    #[test]
    fn test_offset_is_fraction_of_delta() {
        let mut magnetic = Magnetic::new(0.3);
        let offset = magnetic.on_pointer_move(Point::new(260.0, 238.0), button());
        assert!((offset.x - 18.0).abs() < 1e-9);
        assert!((offset.y - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_at_center_is_zero() {
        let mut magnetic = Magnetic::new(CTA_STRENGTH);
        magnetic.on_pointer_move(button().center(), button());
        assert_eq!(magnetic.offset(), Point::ORIGIN);
    }

    #[test]
    fn test_leave_resets_exactly() {
        let mut magnetic = Magnetic::default();
        magnetic.on_pointer_move(Point::new(101.3, 201.7), button());
        assert_ne!(magnetic.offset(), Point::ORIGIN);

        magnetic.on_pointer_leave();
        assert_eq!(magnetic.offset(), Point::new(0.0, 0.0));
        assert_eq!(magnetic.transform(), "translate3d(0px, 0px, 0)");
    }

    #[test]
    fn test_zero_strength_never_moves() {
        let mut magnetic = Magnetic::new(0.0);
        magnetic.on_pointer_move(Point::new(0.0, 0.0), button());
        assert_eq!(magnetic.offset(), Point::ORIGIN);
    }

    #[test]
    fn test_normalize() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(rect.normalize(Point::new(50.0, 75.0)), Point::new(0.25, 0.75));
        assert_eq!(
            Rect::default().normalize(Point::new(10.0, 10.0)),
            Point::new(0.5, 0.5)
        );
    }
}
