pub mod polygon;
pub mod rect;

pub use polygon::{is_convex, is_convex_with, Polygon};
pub use rect::Rect;

use crate::collision::Aabb;
use crate::math::vec2::Vec2;

/// The geometric shape of a collider.
///
/// Every variant is convex and exposes its outline as a vertex loop, so the
/// intersection test is written once against this type.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon(Polygon),
    Rect(Rect),
}

impl Shape {
    /// Local-space vertices, in winding order, without a repeated closing vertex.
    pub fn vertices(&self) -> &[Vec2] {
        match self {
            Shape::Polygon(polygon) => polygon.vertices(),
            Shape::Rect(rect) => rect.vertices(),
        }
    }

    /// Local-space bounding box.
    pub fn bounds(&self) -> Aabb {
        match self {
            Shape::Polygon(polygon) => polygon.bounds(),
            Shape::Rect(rect) => rect.bounds(),
        }
    }

    /// Midpoint of the local-space bounding box.
    pub fn center(&self) -> Vec2 {
        match self {
            Shape::Polygon(polygon) => polygon.center(),
            Shape::Rect(rect) => rect.center(),
        }
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Shape::Rect(rect)
    }
}
