//! Narrow-phase collision detection for convex 2D polygons.
//!
//! Colliders are built once from a convex vertex list and then queried with a
//! bounding-box rejection followed by a separating axis test. Motion
//! prediction re-runs the same test at positions advanced along each
//! collider's velocity.

pub mod collision;
pub mod common;
pub mod error;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{collides, will_collide, Aabb};
pub use common::{CollinearEdges, CollisionConfig, Contact};
pub use error::{CollisionError, Result};
pub use math::vec2::Vec2;
pub use objects::Collider;
pub use shapes::{is_convex, Polygon, Rect, Shape};
pub use world::CollisionWorld;
