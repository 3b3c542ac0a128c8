//! Circle shape definition.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Radius assigned to newly created circles.
pub const DEFAULT_RADIUS: f64 = 25.0;

/// A labeled circle on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    /// Unique, immutable identity.
    pub id: ShapeId,
    /// Short display label ("a", "b", ...). Not an identity.
    pub label: String,
    /// Center point.
    pub center: Point,
    /// Radius.
    pub radius: f64,
}

impl Circle {
    /// Create a new circle with a fresh id.
    pub fn new(label: impl Into<String>, center: Point, radius: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            center,
            radius,
        }
    }

    /// Get the bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    /// Check if a point lies on this circle (boundary included).
    pub fn hit_test(&self, point: Point) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_creation() {
        let circle = Circle::new("a", Point::new(50.0, 50.0), 20.0);
        assert_eq!(circle.label, "a");
        assert!((circle.center.x - 50.0).abs() < f64::EPSILON);
        assert!((circle.radius - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Circle::new("a", Point::new(0.0, 0.0), 10.0);
        let b = Circle::new("b", Point::new(0.0, 0.0), 10.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_hit_test_center() {
        let circle = Circle::new("a", Point::new(50.0, 50.0), 20.0);
        assert!(circle.hit_test(Point::new(50.0, 50.0)));
    }

    #[test]
    fn test_hit_test_edge() {
        let circle = Circle::new("a", Point::new(0.0, 0.0), 10.0);
        assert!(circle.hit_test(Point::new(10.0, 0.0)));
        assert!(!circle.hit_test(Point::new(10.5, 0.0)));
    }

    #[test]
    fn test_bounds() {
        let circle = Circle::new("a", Point::new(50.0, 50.0), 20.0);
        let bounds = circle.bounds();
        assert!((bounds.x0 - 30.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 30.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 70.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }
}
