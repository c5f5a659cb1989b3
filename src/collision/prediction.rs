//! Discrete look-ahead: where colliders will be after a number of steps, and
//! whether they will intersect there.
//!
//! A step advances a collider by exactly one `velocity`. Predictions only ever
//! read the live colliders; hypothetical positions are computed as values.

use crate::collision::detection::{placed_collides, Placed};
use crate::collision::Aabb;
use crate::common::Contact;
use crate::math::vec2::Vec2;
use crate::objects::Collider;

/// `position + velocity * steps`. Zero steps is the current position.
pub fn predicted_position(collider: &Collider, steps: u32) -> Vec2 {
    collider.position + collider.velocity * f64::from(steps)
}

fn placed_at_step(collider: &Collider, steps: u32) -> Placed<'_> {
    Placed::new(collider.shape(), predicted_position(collider, steps))
}

/// Returns whether `a` and `b` intersect after both advance `steps` steps.
/// Touching counts as intersecting.
pub fn will_collide(a: &Collider, b: &Collider, steps: u32) -> bool {
    will_collide_with(a, b, steps, Contact::default())
}

pub fn will_collide_with(a: &Collider, b: &Collider, steps: u32, contact: Contact) -> bool {
    placed_collides(&placed_at_step(a, steps), &placed_at_step(b, steps), contact)
}

/// World-space box covering every position the collider occupies over steps `0..=steps`.
pub fn swept_bounds(collider: &Collider, steps: u32) -> Aabb {
    let mut bounds = collider.world_bounds();
    bounds.merge(&placed_at_step(collider, steps).world_bounds());
    bounds
}

/// The first step in `0..=steps` at which `a` and `b` intersect, if any.
///
/// Only whole steps are tested, so bodies that pass through each other
/// between two steps are not reported.
pub fn first_collision_step(a: &Collider, b: &Collider, steps: u32, contact: Contact) -> Option<u32> {
    // Motion is linear, so the swept boxes bound every intermediate step
    if !swept_bounds(a, steps).overlaps(&swept_bounds(b, steps), contact) {
        return None;
    }
    (0..=steps).find(|&step| will_collide_with(a, b, step, contact))
}

/// Returns whether `a` and `b` intersect at any step in `0..=steps`.
pub fn will_collide_within(a: &Collider, b: &Collider, steps: u32) -> bool {
    first_collision_step(a, b, steps, Contact::default()).is_some()
}
