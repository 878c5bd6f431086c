//! Body storage and the per-frame physics tick
//!
//! Bodies live in an arena and refer to each other by [`BodyId`]. The
//! "colliding with" relation is rebuilt from scratch on every pass and only
//! for the pairs the caller lists; there is no broad phase.

use slotmap::SlotMap;

use super::body::{Body, BodyId};
use super::collision::CollisionVolume;

/// Pair of bodies the scene wants tested against each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair {
    /// First body of the pair
    pub first: BodyId,
    /// Second body of the pair
    pub second: BodyId,
}

impl CollisionPair {
    /// Create a new collision pair
    pub fn new(first: BodyId, second: BodyId) -> Self {
        Self { first, second }
    }
}

/// Arena of bodies plus the integrate / clear / test cycle
#[derive(Debug, Default)]
pub struct PhysicsWorld {
    bodies: SlotMap<BodyId, Body>,
}

impl PhysicsWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body and return its handle
    pub fn insert(&mut self, body: Body) -> BodyId {
        let id = self.bodies.insert(body);
        log::debug!("Inserted body {:?} ({} total)", id, self.bodies.len());
        id
    }

    /// Look up a body
    ///
    /// # Panics
    /// If `id` does not belong to this world.
    pub fn body(&self, id: BodyId) -> &Body {
        &self.bodies[id]
    }

    /// Look up a body mutably
    ///
    /// # Panics
    /// If `id` does not belong to this world.
    pub fn body_mut(&mut self, id: BodyId) -> &mut Body {
        &mut self.bodies[id]
    }

    /// Look up a body without panicking
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    /// Number of bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the world has no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterate over all bodies with their handles
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter()
    }

    /// Integrate every body by `dt`
    pub fn integrate_all(&mut self, dt: f32) {
        for (_, body) in &mut self.bodies {
            body.integrate(dt);
        }
    }

    /// Forget every collision found by the previous pass
    pub fn clear_collisions(&mut self) {
        for (_, body) in &mut self.bodies {
            body.colliding_with.clear();
        }
    }

    /// World-space collision volume of a body
    pub fn volume(&self, id: BodyId) -> CollisionVolume {
        CollisionVolume::of(self.body(id))
    }

    /// Test two bodies and record the contact on both sides when they touch
    ///
    /// Records are appended without checking for existing entries, so call
    /// [`clear_collisions`](Self::clear_collisions) before each pass.
    ///
    /// # Panics
    /// If `a == b` or either handle does not belong to this world.
    pub fn detect_collision(&mut self, a: BodyId, b: BodyId) -> bool {
        assert_ne!(a, b, "a body cannot be tested against itself");

        let hit = self.volume(a).intersects(&self.volume(b));
        if hit {
            self.bodies[a].colliding_with.push(b);
            self.bodies[b].colliding_with.push(a);
            log::trace!("Collision between {:?} and {:?}", a, b);
        }
        hit
    }

    /// Run a full collision pass over the listed pairs
    ///
    /// Returns the number of pairs found touching.
    pub fn detect_collisions(&mut self, pairs: &[CollisionPair]) -> usize {
        self.clear_collisions();
        pairs
            .iter()
            .filter(|pair| self.detect_collision(pair.first, pair.second))
            .count()
    }

    /// One simulation tick: integrate all bodies, then run the collision pass
    pub fn step(&mut self, dt: f32, pairs: &[CollisionPair]) -> usize {
        self.integrate_all(dt);
        self.detect_collisions(pairs)
    }
}
