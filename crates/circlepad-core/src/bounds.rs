//! Canvas dimensions and clamping rules.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Minimum allowed circle radius.
pub const MIN_RADIUS: f64 = 5.0;

/// Maximum allowed circle radius.
pub const MAX_RADIUS: f64 = 120.0;

/// Fixed drawing surface dimensions.
///
/// Both dimensions must be at least `2 * MAX_RADIUS` so that a circle of any
/// legal radius fits on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
        }
    }
}

impl CanvasBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp a center point so a circle of the given radius stays fully
    /// inside the surface: `r <= x <= width - r` and `r <= y <= height - r`.
    pub fn clamp_center(&self, center: Point, radius: f64) -> Point {
        Point::new(
            center.x.clamp(radius, self.width - radius),
            center.y.clamp(radius, self.height - radius),
        )
    }

    /// Check whether a circle at `center` with `radius` is fully inside.
    pub fn contains_circle(&self, center: Point, radius: f64) -> bool {
        center.x >= radius
            && center.x <= self.width - radius
            && center.y >= radius
            && center.y <= self.height - radius
    }
}

/// Saturate a radius into the legal `[MIN_RADIUS, MAX_RADIUS]` range.
pub fn clamp_radius(radius: f64) -> f64 {
    radius.clamp(MIN_RADIUS, MAX_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let bounds = CanvasBounds::default();
        assert!((bounds.width - 900.0).abs() < f64::EPSILON);
        assert!((bounds.height - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_center_top_left() {
        let bounds = CanvasBounds::default();
        let clamped = bounds.clamp_center(Point::new(-50.0, -50.0), 25.0);
        assert!((clamped.x - 25.0).abs() < f64::EPSILON);
        assert!((clamped.y - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_center_bottom_right() {
        let bounds = CanvasBounds::default();
        let clamped = bounds.clamp_center(Point::new(2000.0, 2000.0), 40.0);
        assert!((clamped.x - 860.0).abs() < f64::EPSILON);
        assert!((clamped.y - 560.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_center_inside_unchanged() {
        let bounds = CanvasBounds::default();
        let clamped = bounds.clamp_center(Point::new(450.0, 300.0), 120.0);
        assert!((clamped.x - 450.0).abs() < f64::EPSILON);
        assert!((clamped.y - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_radius() {
        assert!((clamp_radius(150.0) - MAX_RADIUS).abs() < f64::EPSILON);
        assert!((clamp_radius(1.0) - MIN_RADIUS).abs() < f64::EPSILON);
        assert!((clamp_radius(42.0) - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_contains_circle() {
        let bounds = CanvasBounds::default();
        assert!(bounds.contains_circle(Point::new(25.0, 25.0), 25.0));
        assert!(!bounds.contains_circle(Point::new(24.0, 25.0), 25.0));
        assert!(!bounds.contains_circle(Point::new(880.0, 300.0), 25.0));
    }
}
