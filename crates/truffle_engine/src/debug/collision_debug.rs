//! Collision-specific debug visualization
//!
//! Draws each body's collision volume, coloured by its bounding type and
//! whether the last collision pass found it touching something.

use serde::{Deserialize, Serialize};

use super::draw::DebugRenderer;
use crate::foundation::math::{Mat4, Vec4};
use crate::physics::{Body, BoundingType, CollisionState, CollisionVolume, PhysicsWorld};

/// Color scheme for collision visualization
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionDebugColors {
    /// Idle box volumes
    pub box_idle: Vec4,

    /// Idle sphere volumes
    pub sphere_idle: Vec4,

    /// Any volume that is currently colliding
    pub colliding: Vec4,
}

impl CollisionDebugColors {
    /// Pick the colour for a volume kind in a given state
    pub fn color_for(&self, bounding_type: BoundingType, state: CollisionState) -> Vec4 {
        match (state, bounding_type) {
            (CollisionState::Colliding, _) => self.colliding,
            (CollisionState::Idle, BoundingType::Box) => self.box_idle,
            (CollisionState::Idle, BoundingType::Sphere) => self.sphere_idle,
        }
    }
}

impl Default for CollisionDebugColors {
    fn default() -> Self {
        Self {
            box_idle: Vec4::new(1.0, 1.0, 1.0, 1.0),    // White
            sphere_idle: Vec4::new(1.0, 1.0, 1.0, 1.0), // White
            colliding: Vec4::new(1.0, 0.0, 0.0, 1.0),   // Red
        }
    }
}

/// Draws collision volumes through any [`DebugRenderer`]
#[derive(Clone, Debug)]
pub struct CollisionDebugVisualizer {
    colors: CollisionDebugColors,

    /// Whether volumes are drawn at all
    pub enabled: bool,
}

impl CollisionDebugVisualizer {
    /// Create an enabled visualizer with the default colours
    pub fn new() -> Self {
        Self {
            colors: CollisionDebugColors::default(),
            enabled: true,
        }
    }

    /// Set custom color scheme
    pub fn with_colors(mut self, colors: CollisionDebugColors) -> Self {
        self.colors = colors;
        self
    }

    /// Current color scheme
    pub fn colors(&self) -> &CollisionDebugColors {
        &self.colors
    }

    /// Draw one body's collision volume
    pub fn draw_body(&self, renderer: &mut impl DebugRenderer, body: &Body, view: &Mat4, projection: &Mat4) {
        if !self.enabled {
            return;
        }

        let color = self.colors.color_for(body.bounding_type, body.collision_state());
        match CollisionVolume::of(body) {
            CollisionVolume::Box(bounds) => renderer.draw_box_wireframe(&bounds, view, projection, color),
            CollisionVolume::Sphere(sphere) => renderer.draw_sphere_wireframe(&sphere, view, projection, color),
        }
    }

    /// Draw every body in the world
    pub fn draw_world(&self, renderer: &mut impl DebugRenderer, world: &PhysicsWorld, view: &Mat4, projection: &Mat4) {
        for (_, body) in world.iter() {
            self.draw_body(renderer, body, view, projection);
        }
    }
}

impl Default for CollisionDebugVisualizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ModelBoundingSphere;
    use crate::debug::draw::{DebugDrawSystem, DebugShape};
    use crate::foundation::math::Vec3;
    use crate::physics::CollisionPair;

    fn unit_body(x: f32, bounding_type: BoundingType) -> Body {
        Body::new(&ModelBoundingSphere::default())
            .with_position(Vec3::new(x, 0.0, 0.0))
            .with_bounding_type(bounding_type)
    }

    fn custom_colors() -> CollisionDebugColors {
        CollisionDebugColors {
            box_idle: Vec4::new(0.0, 0.0, 1.0, 1.0),
            sphere_idle: Vec4::new(0.0, 1.0, 0.0, 1.0),
            colliding: Vec4::new(1.0, 0.0, 0.0, 1.0),
        }
    }

    #[test]
    fn test_color_choice() {
        let colors = custom_colors();

        assert_eq!(colors.color_for(BoundingType::Box, CollisionState::Idle), colors.box_idle);
        assert_eq!(colors.color_for(BoundingType::Sphere, CollisionState::Idle), colors.sphere_idle);
        assert_eq!(colors.color_for(BoundingType::Box, CollisionState::Colliding), colors.colliding);
        assert_eq!(colors.color_for(BoundingType::Sphere, CollisionState::Colliding), colors.colliding);
    }

    #[test]
    fn test_draws_volume_kind_and_state() {
        let mut world = PhysicsWorld::new();
        let pig = world.insert(unit_body(0.0, BoundingType::Sphere));
        let truffle = world.insert(unit_body(10.0, BoundingType::Box));
        let visualizer = CollisionDebugVisualizer::new().with_colors(custom_colors());
        let mut recorder = DebugDrawSystem::new();
        let identity = Mat4::identity();

        world.detect_collisions(&[CollisionPair::new(pig, truffle)]);
        visualizer.draw_world(&mut recorder, &world, &identity, &identity);

        let colors = custom_colors();
        assert_eq!(recorder.shape_count(), 2);
        assert!(recorder.shapes().iter().any(|shape| matches!(
            shape, DebugShape::Sphere { color, .. } if *color == colors.sphere_idle
        )));
        assert!(recorder.shapes().iter().any(|shape| matches!(
            shape, DebugShape::Box { color, .. } if *color == colors.box_idle
        )));

        world.body_mut(truffle).position.x = 1.0;
        world.detect_collisions(&[CollisionPair::new(pig, truffle)]);
        recorder.begin_frame();
        visualizer.draw_world(&mut recorder, &world, &identity, &identity);

        assert!(recorder.shapes().iter().all(|shape| shape.color() == colors.colliding));
    }

    #[test]
    fn test_disabled_visualizer_draws_nothing() {
        let mut visualizer = CollisionDebugVisualizer::new();
        visualizer.enabled = false;
        let mut recorder = DebugDrawSystem::new();
        let identity = Mat4::identity();

        visualizer.draw_body(&mut recorder, &unit_body(0.0, BoundingType::Box), &identity, &identity);

        assert_eq!(recorder.shape_count(), 0);
    }
}
