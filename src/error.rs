//! Error types for collider construction and world bookkeeping.

use crate::math::vec2::Vec2;
use thiserror::Error;

/// Result type alias for fallible collider operations.
pub type Result<T> = std::result::Result<T, CollisionError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollisionError {
    /// The vertex list does not describe a convex polygon under consistent winding.
    #[error("collider vertices were not convex: {vertices:?}")]
    NotConvex {
        /// The rejected vertex list, kept for diagnostics.
        vertices: Vec<Vec2>,
    },

    /// A collider needs at least one vertex to have a bounding box.
    #[error("collider needs at least one vertex")]
    NoVertices,

    /// A collider index that is not present in the world.
    #[error("no collider at index {index} (world holds {len})")]
    UnknownCollider { index: usize, len: usize },
}
