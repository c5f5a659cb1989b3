use crate::{
    collision::{detection, prediction},
    common::CollisionConfig,
    error::{CollisionError, Result},
    math::vec2::Vec2,
    objects::Collider,
};
use log::debug;

/// Owns the colliders of a level and answers per-tick pairwise queries.
///
/// Each tick is expected to run an update phase (`set_state` / `advance`)
/// followed by a collision phase (`colliding_pairs` / `predicted_pairs`).
/// Pairs are tested exhaustively; there is no spatial partitioning.
#[derive(Debug, Default)]
pub struct CollisionWorld {
    colliders: Vec<Collider>,
    pub config: CollisionConfig,
}

impl CollisionWorld {
    /// Creates a new, empty world with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CollisionConfig) -> Self {
        Self {
            colliders: Vec::new(),
            config,
        }
    }

    /// Adds a collider to the world and returns its index.
    pub fn add_collider(&mut self, collider: Collider) -> usize {
        let index = self.colliders.len();
        self.colliders.push(collider);
        index
    }

    /// Validates `vertices` under the world's config and adds the resulting collider.
    pub fn add_polygon(&mut self, vertices: Vec<Vec2>, position: Vec2, velocity: Vec2) -> Result<usize> {
        let collider = Collider::with_config(vertices, &self.config)?
            .with_position(position)
            .with_velocity(velocity);
        Ok(self.add_collider(collider))
    }

    pub fn collider(&self, index: usize) -> Option<&Collider> {
        self.colliders.get(index)
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Replaces the position and velocity of the collider at `index`.
    pub fn set_state(&mut self, index: usize, position: Vec2, velocity: Vec2) -> Result<()> {
        let len = self.colliders.len();
        let collider = self
            .colliders
            .get_mut(index)
            .ok_or(CollisionError::UnknownCollider { index, len })?;
        collider.position = position;
        collider.velocity = velocity;
        Ok(())
    }

    /// Moves every collider forward by one step of its velocity.
    pub fn advance(&mut self) {
        for collider in &mut self.colliders {
            collider.position += collider.velocity;
        }
    }

    /// Index pairs `(i, j)` with `i < j` whose colliders currently intersect.
    pub fn colliding_pairs(&self) -> Vec<(usize, usize)> {
        let contact = self.config.contact;
        let pairs = self.pairs_where(|a, b| detection::collides_with(a, b, contact));
        debug!("{} colliding pairs among {} colliders", pairs.len(), self.colliders.len());
        pairs
    }

    /// Index pairs `(i, j)` with `i < j` that will intersect after `steps` steps.
    pub fn predicted_pairs(&self, steps: u32) -> Vec<(usize, usize)> {
        let contact = self.config.contact;
        let pairs = self.pairs_where(|a, b| prediction::will_collide_with(a, b, steps, contact));
        debug!("{} pairs predicted to collide in {} steps", pairs.len(), steps);
        pairs
    }

    /// Indices of colliders currently intersecting the collider at `index`.
    pub fn colliding_with(&self, index: usize) -> Result<Vec<usize>> {
        let target = self.colliders.get(index).ok_or(CollisionError::UnknownCollider {
            index,
            len: self.colliders.len(),
        })?;
        let contact = self.config.contact;
        Ok(self
            .colliders
            .iter()
            .enumerate()
            .filter(|(i, other)| *i != index && detection::collides_with(target, other, contact))
            .map(|(i, _)| i)
            .collect())
    }

    fn pairs_where(&self, test: impl Fn(&Collider, &Collider) -> bool) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..self.colliders.len() {
            for j in (i + 1)..self.colliders.len() {
                if test(&self.colliders[i], &self.colliders[j]) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{CollinearEdges, Contact};

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    fn square() -> Vec<Vec2> {
        vec![v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)]
    }

    #[test]
    fn test_world_new() {
        let world = CollisionWorld::new();
        assert!(world.is_empty());
        assert_eq!(world.config, CollisionConfig::default());
        assert!(world.colliding_pairs().is_empty());
    }

    #[test]
    fn test_add_collider_returns_index() {
        let mut world = CollisionWorld::new();
        assert_eq!(world.add_collider(Collider::rect(1.0, 1.0)), 0);
        assert_eq!(world.add_polygon(square(), v(3.0, 0.0), Vec2::ZERO).unwrap(), 1);
        assert_eq!(world.len(), 2);
        assert_eq!(world.collider(1).unwrap().position, v(3.0, 0.0));
        assert!(world.collider(2).is_none());
    }

    #[test]
    fn test_add_polygon_rejects_non_convex() {
        let mut world = CollisionWorld::new();
        let chevron = vec![v(1.0, 0.0), v(2.0, 2.0), v(1.0, 1.0), v(0.0, 2.0)];
        assert!(matches!(
            world.add_polygon(chevron, Vec2::ZERO, Vec2::ZERO),
            Err(CollisionError::NotConvex { .. })
        ));
        assert!(world.is_empty());
    }

    #[test]
    fn test_add_polygon_uses_world_config() {
        let mut world = CollisionWorld::with_config(CollisionConfig {
            collinear_edges: CollinearEdges::Reject,
            contact: Contact::Inclusive,
        });
        let with_midpoint = vec![v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0), v(2.0, 1.0), v(0.0, 1.0)];
        assert!(world.add_polygon(with_midpoint, Vec2::ZERO, Vec2::ZERO).is_err());
    }

    #[test]
    fn test_colliding_pairs() {
        let mut world = CollisionWorld::new();
        world.add_polygon(square(), v(0.0, 0.0), Vec2::ZERO).unwrap();
        world.add_polygon(square(), v(0.5, 0.5), Vec2::ZERO).unwrap();
        world.add_polygon(square(), v(5.0, 5.0), Vec2::ZERO).unwrap();
        world.add_polygon(square(), v(1.0, 0.0), Vec2::ZERO).unwrap();

        assert_eq!(world.colliding_pairs(), vec![(0, 1), (0, 3), (1, 3)]);

        world.config.contact = Contact::Exclusive;
        assert_eq!(world.colliding_pairs(), vec![(0, 1), (1, 3)]);
    }

    #[test]
    fn test_colliding_with() {
        let mut world = CollisionWorld::new();
        world.add_polygon(square(), v(0.0, 0.0), Vec2::ZERO).unwrap();
        world.add_polygon(square(), v(0.5, 0.5), Vec2::ZERO).unwrap();
        world.add_polygon(square(), v(5.0, 5.0), Vec2::ZERO).unwrap();

        assert_eq!(world.colliding_with(0).unwrap(), vec![1]);
        assert!(world.colliding_with(2).unwrap().is_empty());
        assert_eq!(
            world.colliding_with(7).unwrap_err(),
            CollisionError::UnknownCollider { index: 7, len: 3 }
        );
    }

    #[test]
    fn test_set_state_and_advance() {
        let mut world = CollisionWorld::new();
        world.add_polygon(square(), v(0.0, 0.0), Vec2::ZERO).unwrap();
        world.add_polygon(square(), v(3.0, 0.0), Vec2::ZERO).unwrap();
        assert!(world.colliding_pairs().is_empty());

        world.set_state(0, v(0.0, 0.0), v(1.0, 0.0)).unwrap();
        assert!(world.predicted_pairs(1).is_empty());
        assert_eq!(world.predicted_pairs(2), vec![(0, 1)]);
        // Prediction leaves the world untouched
        assert_eq!(world.collider(0).unwrap().position, Vec2::ZERO);

        world.advance();
        world.advance();
        assert_eq!(world.collider(0).unwrap().position, v(2.0, 0.0));
        assert_eq!(world.colliding_pairs(), vec![(0, 1)]);

        assert_eq!(
            world.set_state(5, Vec2::ZERO, Vec2::ZERO).unwrap_err(),
            CollisionError::UnknownCollider { index: 5, len: 2 }
        );
    }
}
