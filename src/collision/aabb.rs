// Defines an Axis-Aligned Bounding Box

use crate::common::Contact;
use crate::math::vec2::Vec2;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Creates a new Aabb, ordering the corners so that `min <= max` componentwise.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Aabb {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Creates the tightest Aabb that encompasses a set of points.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min_pt = *first;
        let mut max_pt = *first;
        for point in rest {
            min_pt.x = min_pt.x.min(point.x);
            min_pt.y = min_pt.y.min(point.y);
            max_pt.x = max_pt.x.max(point.x);
            max_pt.y = max_pt.y.max(point.y);
        }
        Some(Aabb { min: min_pt, max: max_pt })
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Vec2 {
        self.min + (self.max - self.min).scale(0.5)
    }

    /// Returns this box moved by `offset` (local space to world space).
    pub fn translate(&self, offset: Vec2) -> Self {
        Aabb {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Checks if this Aabb overlaps with another Aabb.
    /// Boxes sharing only an edge or corner overlap under [`Contact::Inclusive`].
    pub fn overlaps(&self, other: &Aabb, contact: Contact) -> bool {
        !contact.separated(self.min.x, self.max.x, other.min.x, other.max.x)
            && !contact.separated(self.min.y, self.max.y, other.min.y, other.max.y)
    }

    /// Merges another Aabb into this one, expanding this Aabb to contain both.
    pub fn merge(&mut self, other: &Aabb) {
        self.min.x = self.min.x.min(other.min.x);
        self.min.y = self.min.y.min(other.min.y);
        self.max.x = self.max.x.max(other.max.x);
        self.max.y = self.max.y.max(other.max.y);
    }

    /// Checks whether `point` lies inside the box or on its boundary.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}
