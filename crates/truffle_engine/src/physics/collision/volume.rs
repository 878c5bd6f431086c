//! Collision volumes derived from bodies
//!
//! A body's volume is built fresh for every test from its base model sphere,
//! its transform and its collision scale/offset. The box is not a tight fit
//! of the mesh; it is a proxy sized per axis by the collision scale.

use super::primitives::{BoundingBox, BoundingSphere};
use crate::physics::body::{Body, BoundingType};

/// World-space collision volume of either supported kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionVolume {
    /// Axis-aligned box
    Box(BoundingBox),
    /// Sphere
    Sphere(BoundingSphere),
}

impl CollisionVolume {
    /// Build the volume a body presents, according to its bounding type
    pub fn of(body: &Body) -> Self {
        match body.bounding_type {
            BoundingType::Box => Self::Box(bounding_box(body)),
            BoundingType::Sphere => Self::Sphere(bounding_sphere(body)),
        }
    }

    /// Kind of this volume
    pub fn bounding_type(&self) -> BoundingType {
        match self {
            Self::Box(_) => BoundingType::Box,
            Self::Sphere(_) => BoundingType::Sphere,
        }
    }

    /// Test if this volume intersects another
    pub fn intersects(&self, other: &CollisionVolume) -> bool {
        match (self, other) {
            (Self::Box(a), Self::Box(b)) => a.intersects(b),
            (Self::Box(bounds), Self::Sphere(sphere)) => bounds.intersects_sphere(sphere),
            (Self::Sphere(sphere), Self::Box(bounds)) => sphere.intersects_box(bounds),
            (Self::Sphere(a), Self::Sphere(b)) => a.intersects(b),
        }
    }
}

/// Sphere proxy: only the X components of scale and collision scale are used
pub fn bounding_sphere(body: &Body) -> BoundingSphere {
    let center = body.base_center_offset() + body.position + body.collision_offset;
    let radius = body.base_radius() * body.scale.x * body.collision_scale.x;
    BoundingSphere::new(center, radius)
}

/// Box proxy centred on the sphere centre with per-axis half extents
/// `base_radius * collision_scale * scale`
pub fn bounding_box(body: &Body) -> BoundingBox {
    let half_extents = body.collision_scale.component_mul(&body.scale) * body.base_radius();
    let min = body.position + body.base_center_offset() + body.collision_offset - half_extents;
    let max = min + half_extents * 2.0;
    BoundingBox::new(min, max)
}
