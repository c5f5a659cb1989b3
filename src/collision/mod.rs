pub mod aabb;
pub mod detection;
pub mod prediction;

// Re-export key types
pub use aabb::Aabb;
pub use detection::{bbox_overlaps, collides, collides_with, sat_overlaps, Placed};
pub use prediction::{first_collision_step, will_collide, will_collide_with, will_collide_within};
