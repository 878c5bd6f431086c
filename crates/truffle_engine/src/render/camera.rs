//! Follow camera
//!
//! The camera sits at a fixed offset from its target (usually the player)
//! and always looks at it. Matrices are computed on demand.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// Third-person camera that trails a target point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    /// Offset of the eye from the target
    pub offset: Vec3,

    /// Point the camera looks at, in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec3::zeros(),
            target: Vec3::zeros(),
            up: Vec3::y(),
            fov: utils::deg_to_rad(45.0),
            aspect: 16.0 / 9.0,
            near: 1.0,
            far: 100_000.0,
        }
    }
}

impl Camera {
    /// Create a camera trailing its target by `offset`
    pub fn with_offset(offset: Vec3) -> Self {
        Self {
            offset,
            ..Default::default()
        }
    }

    /// Move the focus point
    pub fn follow(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Eye position in world space
    pub fn position(&self) -> Vec3 {
        self.target + self.offset
    }

    /// World to view space
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position(), self.target, self.up)
    }

    /// View to clip space
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point3;
    use approx::assert_relative_eq;

    #[test]
    fn test_follows_target() {
        let mut camera = Camera::with_offset(Vec3::new(0.0, 200.0, -800.0));
        camera.follow(Vec3::new(50.0, 0.0, 10.0));

        assert_relative_eq!(camera.position(), Vec3::new(50.0, 200.0, -790.0));

        let target_in_view = camera.view_matrix().transform_point(&Point3::new(50.0, 0.0, 10.0));
        let distance = (200.0f32 * 200.0 + 800.0 * 800.0).sqrt();
        assert_relative_eq!(target_in_view, Point3::new(0.0, 0.0, -distance), epsilon = 1e-2);
    }

    #[test]
    fn test_projection_maps_near_plane_to_minus_one() {
        let camera = Camera::default();
        let clip = camera.projection_matrix() * nalgebra::Vector4::new(0.0, 0.0, -camera.near, 1.0);
        assert_relative_eq!(clip.z / clip.w, -1.0, epsilon = 1e-4);
    }
}
