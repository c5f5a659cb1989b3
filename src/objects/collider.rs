use crate::collision::detection::{self, Placed};
use crate::collision::{prediction, Aabb};
use crate::common::CollisionConfig;
use crate::error::Result;
use crate::math::vec2::Vec2;
use crate::shapes::{Polygon, Rect, Shape};

/// A convex collision body.
///
/// The shape (and the bounding box derived from it) is fixed at construction.
/// `position` and `velocity` belong to the owning entity and are expected to be
/// updated once per tick, outside of any collision checks that read them.
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    shape: Shape,
    /// World position of the shape's local origin.
    pub position: Vec2,
    /// Displacement applied per simulation step.
    pub velocity: Vec2,
}

impl Collider {
    /// Creates a polygon collider at the origin with zero velocity.
    ///
    /// Fails with `NotConvex` if the vertices do not form a convex polygon,
    /// or `NoVertices` if the list is empty.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self> {
        Self::with_config(vertices, &CollisionConfig::default())
    }

    /// Like [`Collider::new`], validating convexity under `config.collinear_edges`.
    pub fn with_config(vertices: Vec<Vec2>, config: &CollisionConfig) -> Result<Self> {
        let polygon = Polygon::with_collinear_edges(vertices, config.collinear_edges)?;
        Ok(Self::from_shape(polygon))
    }

    /// Creates an axis-aligned box collider spanning `(0, 0)` to `(width, height)`.
    pub fn rect(width: f64, height: f64) -> Self {
        Self::from_shape(Rect::new(width, height))
    }

    pub fn from_shape(shape: impl Into<Shape>) -> Self {
        Collider {
            shape: shape.into(),
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Local-space vertices.
    pub fn vertices(&self) -> &[Vec2] {
        self.shape.vertices()
    }

    /// Local-space bounding box.
    pub fn bounds(&self) -> Aabb {
        self.shape.bounds()
    }

    /// Local-space midpoint of the bounding box.
    pub fn center(&self) -> Vec2 {
        self.shape.center()
    }

    /// The shape at the collider's current position.
    pub fn placed(&self) -> Placed<'_> {
        Placed::new(&self.shape, self.position)
    }

    /// World position of vertex `i % len`. Passing `len` returns the first vertex again.
    pub fn vertex_at(&self, i: usize) -> Vec2 {
        self.placed().vertex_at(i)
    }

    /// World-space vertices in winding order, e.g. for debug drawing.
    pub fn world_vertices(&self) -> Vec<Vec2> {
        self.placed().world_vertices().collect()
    }

    pub fn world_bounds(&self) -> Aabb {
        self.placed().world_bounds()
    }

    /// Returns whether this collider currently intersects `other`.
    pub fn collides(&self, other: &Collider) -> bool {
        detection::collides(self, other)
    }

    /// Returns whether this collider and `other` intersect after both advance `steps` steps.
    pub fn will_collide(&self, other: &Collider, steps: u32) -> bool {
        prediction::will_collide(self, other, steps)
    }

    /// A copy of this collider advanced `steps` steps along its velocity.
    pub fn at_step(&self, steps: u32) -> Collider {
        self.clone().with_position(prediction::predicted_position(self, steps))
    }
}
