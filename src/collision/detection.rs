use crate::collision::Aabb;
use crate::common::Contact;
use crate::math::vec2::Vec2;
use crate::objects::Collider;
use crate::shapes::Shape;
use log::trace;

/// A shape placed at a world position. Borrowing the shape lets the
/// intersection test run against hypothetical positions without touching
/// (or cloning) the collider that owns it.
#[derive(Debug, Clone, Copy)]
pub struct Placed<'a> {
    pub shape: &'a Shape,
    pub position: Vec2,
}

impl<'a> Placed<'a> {
    pub fn new(shape: &'a Shape, position: Vec2) -> Self {
        Self { shape, position }
    }

    /// World position of vertex `i`, wrapping around so that `i == len` closes the loop.
    pub fn vertex_at(&self, i: usize) -> Vec2 {
        let vertices = self.shape.vertices();
        vertices[i % vertices.len()] + self.position
    }

    pub fn world_vertices(&self) -> impl Iterator<Item = Vec2> + 'a {
        let shape: &'a Shape = self.shape;
        let position = self.position;
        shape.vertices().iter().map(move |v| *v + position)
    }

    pub fn world_bounds(&self) -> Aabb {
        self.shape.bounds().translate(self.position)
    }
}

// --- Projection Helper for SAT ---

/// Projects points onto an axis and returns the `(min, max)` interval,
/// measured in units of the axis length.
pub fn project_onto_axis(points: impl IntoIterator<Item = Vec2>, axis: Vec2) -> (f64, f64) {
    let mut min_proj = f64::INFINITY;
    let mut max_proj = f64::NEG_INFINITY;
    for point in points {
        let projection = point.project_onto_magnitude(axis);
        min_proj = min_proj.min(projection);
        max_proj = max_proj.max(projection);
    }
    (min_proj, max_proj)
}

/// Bounding-box rejection test on placed shapes.
pub fn placed_bbox_overlaps(a: &Placed, b: &Placed, contact: Contact) -> bool {
    a.world_bounds().overlaps(&b.world_bounds(), contact)
}

/// One-sided separating axis test: only the edge normals of `a` are tried.
/// Returns false as soon as one of them separates the shapes.
pub fn placed_sat_overlaps(a: &Placed, b: &Placed, contact: Contact) -> bool {
    let n = a.shape.vertices().len();
    for i in 0..n {
        let axis = (a.vertex_at(i) - a.vertex_at(i + 1)).orthogonal();
        // Repeated vertices (and single-point shapes) have no usable normal
        if axis.magnitude_squared() == 0.0 {
            continue;
        }

        let (min_a, max_a) = project_onto_axis(a.world_vertices(), axis);
        let (min_b, max_b) = project_onto_axis(b.world_vertices(), axis);

        if contact.separated(min_a, max_a, min_b, max_b) {
            trace!("separating axis {:?} from edge {} ([{}, {}] vs [{}, {}])", axis, i, min_a, max_a, min_b, max_b);
            return false;
        }
    }
    true
}

/// Full two-phase test on placed shapes: bounding boxes, then SAT in both directions.
pub fn placed_collides(a: &Placed, b: &Placed, contact: Contact) -> bool {
    placed_bbox_overlaps(a, b, contact)
        && placed_sat_overlaps(a, b, contact)
        && placed_sat_overlaps(b, a, contact)
}

/// Checks whether the world-space bounding boxes of two colliders overlap.
pub fn bbox_overlaps(a: &Collider, b: &Collider) -> bool {
    placed_bbox_overlaps(&a.placed(), &b.placed(), Contact::default())
}

/// Checks whether any edge normal of `a` separates the two colliders.
/// This is only half of a separating axis proof, see [`collides`].
pub fn sat_overlaps(a: &Collider, b: &Collider) -> bool {
    placed_sat_overlaps(&a.placed(), &b.placed(), Contact::default())
}

/// Returns whether two colliders intersect at their current positions.
/// Touching boundaries count as intersecting.
pub fn collides(a: &Collider, b: &Collider) -> bool {
    collides_with(a, b, Contact::default())
}

/// Like [`collides`] with an explicit policy for touching boundaries.
pub fn collides_with(a: &Collider, b: &Collider, contact: Contact) -> bool {
    placed_collides(&a.placed(), &b.placed(), contact)
}
