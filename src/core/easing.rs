//! Easing curves and range mapping shared by the motion primitives.
//!
//! Every function here is pure so animation math can be checked without a
//! browser. Progress values are always clamped to `[0, 1]`.

/// Clamp an animation progress value into `[0, 1]`.
///
/// NaN collapses to `0.0` so a bad frame timestamp never leaks into styles.
pub fn clamp_progress(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = clamp_progress(t);
    1.0 - (1.0 - t).powi(3)
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Map `value` from `input` range onto `output` range, clamping at both ends.
///
/// A degenerate input range maps everything to the start of `output`.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let span = input.1 - input.0;
    if span == 0.0 {
        return output.0;
    }
    let t = clamp_progress((value - input.0) / span);
    lerp(output.0, output.1, t)
}

/// CSS-compatible cubic bezier timing function with fixed endpoints
/// `(0, 0)` and `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    /// Curve used by every reveal-on-view transition.
    pub const REVEAL: CubicBezier = CubicBezier::new(0.21, 0.47, 0.32, 0.98);

    /// Curve used by split-text items.
    pub const SPLIT_TEXT: CubicBezier = CubicBezier::new(0.215, 0.61, 0.355, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The `cubic-bezier(...)` CSS function for this curve.
    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn test_ease_out_cubic_clamps() {
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(7.5), 1.0);
        assert_eq!(ease_out_cubic(f64::NAN), 0.0);
    }

    #[test]
    fn test_ease_out_cubic_front_loaded() {
        // Half way through time, well past half way in value
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn test_map_range_clamps_both_ends() {
        assert_eq!(map_range(-1.0, (0.0, 0.5), (1.0, 0.0)), 1.0);
        assert_eq!(map_range(0.25, (0.0, 0.5), (1.0, 0.0)), 0.5);
        assert_eq!(map_range(3.0, (0.0, 0.5), (1.0, 0.0)), 0.0);
    }

    #[test]
    fn test_map_range_degenerate_input() {
        assert_eq!(map_range(10.0, (2.0, 2.0), (5.0, 9.0)), 5.0);
    }

    #[test]
    fn test_bezier_css() {
        assert_eq!(
            CubicBezier::REVEAL.css(),
            "cubic-bezier(0.21, 0.47, 0.32, 0.98)"
        );
        assert_eq!(
            CubicBezier::SPLIT_TEXT.css(),
            "cubic-bezier(0.215, 0.61, 0.355, 1)"
        );
    }
}
