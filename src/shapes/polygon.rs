use crate::collision::Aabb;
use crate::common::CollinearEdges;
use crate::error::{CollisionError, Result};
use crate::math::vec2::Vec2;
use log::debug;

/// Relative tolerance under which two adjacent edges count as parallel:
/// `|a x b| <= COLLINEAR_TOLERANCE * |a| * |b|`.
pub const COLLINEAR_TOLERANCE: f64 = 1e-10;

/// Returns whether the given vertices form a convex polygon, treating
/// parallel adjacent edges as compatible with either winding.
///
/// See [`is_convex_with`].
pub fn is_convex(vertices: &[Vec2]) -> bool {
    is_convex_with(vertices, CollinearEdges::Allow)
}

/// Returns whether the given vertices form a convex polygon.
///
/// The first vertex must not be repeated at the end. Up to three vertices
/// (points, segments and triangles) are always convex. Otherwise every pair
/// of adjacent edges, including the pairs that wrap around the end of the
/// list, must turn the same way. The reference turn is taken from the
/// second-to-last edge and the wrap-around edge.
///
/// Self-intersecting outlines whose edges all turn the same way (e.g. a
/// pentagram) are not detected.
pub fn is_convex_with(vertices: &[Vec2], collinear: CollinearEdges) -> bool {
    let n = vertices.len();
    if n <= 3 {
        return true;
    }

    // edge(i) runs from vertex i to vertex i + 1
    let edge = |i: usize| vertices[(i + 1) % n] - vertices[i];

    let mut winding: Option<bool> = None;
    for k in 0..n {
        let i = (k + n - 2) % n;
        let a = edge(i);
        let b = edge((i + 1) % n);
        let cross = a.cross(b);

        if cross.abs() <= COLLINEAR_TOLERANCE * a.magnitude() * b.magnitude() {
            match collinear {
                CollinearEdges::Allow => continue,
                CollinearEdges::Reject => return false,
            }
        }

        let positive = cross > 0.0;
        match winding {
            None => winding = Some(positive),
            Some(expected) if expected != positive => return false,
            Some(_) => {}
        }
    }
    true
}

/// A convex polygon defined by its vertices in local space.
/// Vertices may wind either way but must wind consistently.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
    bounds: Aabb,
    center: Vec2,
}

impl Polygon {
    /// Creates a new polygon, rejecting vertex lists that are empty or not convex.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self> {
        Self::with_collinear_edges(vertices, CollinearEdges::Allow)
    }

    /// Like [`Polygon::new`] with an explicit policy for parallel adjacent edges.
    pub fn with_collinear_edges(vertices: Vec<Vec2>, collinear: CollinearEdges) -> Result<Self> {
        if !is_convex_with(&vertices, collinear) {
            debug!("rejecting non-convex polygon with {} vertices", vertices.len());
            return Err(CollisionError::NotConvex { vertices });
        }
        let bounds = Aabb::from_points(&vertices).ok_or(CollisionError::NoVertices)?;
        let center = bounds.center();

        Ok(Polygon {
            vertices,
            bounds,
            center,
        })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Local-space bounding box.
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Midpoint of the local-space bounding box.
    pub fn center(&self) -> Vec2 {
        self.center
    }
}
