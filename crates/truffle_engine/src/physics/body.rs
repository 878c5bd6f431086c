//! Simulated bodies
//!
//! A [`Body`] carries its world transform, kinematic state and the
//! parameters used to derive its collision volume from the loaded model's
//! bounding sphere.

use crate::assets::ModelBounds;
use crate::foundation::math::{Mat4, Mat4Ext, Vec3};
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Handle to a body stored in a [`PhysicsWorld`](super::PhysicsWorld)
    pub struct BodyId;
}

/// Which kind of bounding volume a body presents to collision tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundingType {
    /// Axis-aligned box sized per axis by the collision scale
    Box,
    /// Sphere scaled by the X components of scale and collision scale
    #[default]
    Sphere,
}

/// Per-frame collision state of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionState {
    /// Not touching anything this frame
    Idle,
    /// Touching at least one other body this frame
    Colliding,
}

/// A kinematic body with a configurable collision proxy
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// World position
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z
    pub rotation: Vec3,
    /// Visual scale
    pub scale: Vec3,

    /// Linear velocity in units per second
    pub velocity: Vec3,
    /// Linear acceleration in units per second squared
    pub acceleration: Vec3,

    /// Per-axis multiplier on the base radius for the collision volume
    pub collision_scale: Vec3,
    /// World-space offset of the collision volume
    pub collision_offset: Vec3,
    /// Volume kind used in collision tests
    pub bounding_type: BoundingType,

    base_radius: f32,
    base_center_offset: Vec3,

    pub(crate) colliding_with: Vec<BodyId>,
}

impl Body {
    /// Create a body at the origin from a model's bounding sphere
    pub fn new(model: &impl ModelBounds) -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            velocity: Vec3::zeros(),
            acceleration: Vec3::zeros(),
            collision_scale: Vec3::new(1.0, 1.0, 1.0),
            collision_offset: Vec3::zeros(),
            bounding_type: BoundingType::default(),
            base_radius: model.bounding_sphere_radius(),
            base_center_offset: model.bounding_sphere_center_offset(),
            colliding_with: Vec::new(),
        }
    }

    /// Builder: set the position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder: set the Euler rotation
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder: set the visual scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Builder: set collision scale and offset
    pub fn with_collision(mut self, collision_scale: Vec3, collision_offset: Vec3) -> Self {
        self.collision_scale = collision_scale;
        self.collision_offset = collision_offset;
        self
    }

    /// Builder: set the bounding volume kind
    pub fn with_bounding_type(mut self, bounding_type: BoundingType) -> Self {
        self.bounding_type = bounding_type;
        self
    }

    /// Model-space bounding sphere radius
    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    /// Model-space bounding sphere centre offset
    pub fn base_center_offset(&self) -> Vec3 {
        self.base_center_offset
    }

    /// Bodies this one touched during the last collision pass
    pub fn colliding_with(&self) -> &[BodyId] {
        &self.colliding_with
    }

    /// Whether the last collision pass found any contact
    pub fn is_colliding(&self) -> bool {
        !self.colliding_with.is_empty()
    }

    /// Collision state derived from the last pass
    pub fn collision_state(&self) -> CollisionState {
        if self.is_colliding() {
            CollisionState::Colliding
        } else {
            CollisionState::Idle
        }
    }

    /// World matrix for rendering: scale, then rotation X/Y/Z, then translation
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::world(&self.position, &self.rotation, &self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ModelBoundingSphere;
    use crate::foundation::math::Point3;
    use approx::assert_relative_eq;

    #[test]
    fn test_base_shape_comes_from_model() {
        let model = ModelBoundingSphere::new(Vec3::new(0.0, 5.0, 0.0), 20.0);
        let body = Body::new(&model);

        assert_relative_eq!(body.base_radius(), 20.0);
        assert_relative_eq!(body.base_center_offset(), Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(body.collision_state(), CollisionState::Idle);
        assert!(body.colliding_with().is_empty());
    }

    #[test]
    fn test_builder_sets_fields() {
        let body = Body::new(&ModelBoundingSphere::default())
            .with_position(Vec3::new(200.0, 0.0, 0.0))
            .with_rotation(Vec3::new(0.2, 0.0, 0.0))
            .with_scale(Vec3::new(3.0, 3.0, 3.0))
            .with_collision(Vec3::new(50.0, 75.0, 50.0), Vec3::new(0.0, 100.0, 0.0))
            .with_bounding_type(BoundingType::Box);

        assert_eq!(body.bounding_type, BoundingType::Box);
        assert_relative_eq!(body.position.x, 200.0);
        assert_relative_eq!(body.collision_scale.y, 75.0);
        assert_relative_eq!(body.collision_offset.y, 100.0);
    }

    #[test]
    fn test_world_matrix_places_model_origin_at_position() {
        let body = Body::new(&ModelBoundingSphere::default())
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_rotation(Vec3::new(0.3, 1.2, -0.4));

        let origin = body.world_matrix().transform_point(&Point3::origin());
        assert_relative_eq!(origin, Point3::new(1.0, 2.0, 3.0), epsilon = 1e-6);
    }
}
