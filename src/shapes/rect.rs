use crate::collision::Aabb;
use crate::math::vec2::Vec2;

/// An axis-aligned rectangle with its local origin at the minimum corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    vertices: [Vec2; 4],
    bounds: Aabb,
}

impl Rect {
    /// Creates a rectangle spanning `(0, 0)` to `(width, height)` in local space.
    /// Negative extents grow the rectangle towards negative coordinates.
    pub fn new(width: f64, height: f64) -> Self {
        let bounds = Aabb::new(Vec2::ZERO, Vec2::new(width, height));
        let (min, max) = (bounds.min, bounds.max);
        Rect {
            // Counter-clockwise from the minimum corner
            vertices: [
                min,
                Vec2::new(max.x, min.y),
                max,
                Vec2::new(min.x, max.y),
            ],
            bounds,
        }
    }

    pub fn width(&self) -> f64 {
        self.bounds.max.x - self.bounds.min.x
    }

    pub fn height(&self) -> f64 {
        self.bounds.max.y - self.bounds.min.y
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }
}
