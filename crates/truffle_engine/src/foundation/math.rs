//! Math utilities and types
//!
//! Thin aliases over nalgebra plus the handful of matrix helpers the game
//! needs: Euler rotations, world matrices and camera matrices.

pub use nalgebra::{Vector3, Vector4, Matrix4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type (also used for RGBA colours)
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }
}

/// Extension trait for Mat4 with additional convenience methods
pub trait Mat4Ext {
    /// Create a rotation matrix around the X axis
    fn rotation_x(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Z axis
    fn rotation_z(angle: f32) -> Mat4;

    /// Rotation from Euler angles applied X first, then Y, then Z
    fn euler_xyz(angles: &Vec3) -> Mat4;

    /// World matrix applying scale, then Euler rotation, then translation
    fn world(position: &Vec3, rotation: &Vec3, scale: &Vec3) -> Mat4;

    /// Create a perspective projection matrix (right-handed, OpenGL depth)
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Create a look-at view matrix (right-handed)
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::x_axis(), angle)
    }

    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn rotation_z(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::z_axis(), angle)
    }

    fn euler_xyz(angles: &Vec3) -> Mat4 {
        // Column vectors: the rightmost factor is applied first
        Self::rotation_z(angles.z) * Self::rotation_y(angles.y) * Self::rotation_x(angles.x)
    }

    fn world(position: &Vec3, rotation: &Vec3, scale: &Vec3) -> Mat4 {
        Mat4::new_translation(position)
            * Self::euler_xyz(rotation)
            * Mat4::new_nonuniform_scaling(scale)
    }

    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::new_perspective(aspect, fov_y, near, far)
    }

    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        Mat4::look_at_rh(&Point3::from(eye), &Point3::from(target), &up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_euler_applies_x_before_y() {
        // X by 90deg takes +Y to +Z, then Y by 90deg takes +Z to +X
        let rotation = Mat4::euler_xyz(&Vec3::new(constants::PI / 2.0, constants::PI / 2.0, 0.0));
        let moved = rotation.transform_vector(&Vec3::y());
        assert_relative_eq!(moved, Vec3::x(), epsilon = 1e-6);
    }

    #[test]
    fn test_world_matrix_scales_then_translates() {
        let world = Mat4::world(
            &Vec3::new(10.0, 0.0, 0.0),
            &Vec3::zeros(),
            &Vec3::new(3.0, 3.0, 3.0),
        );
        let point = world.transform_point(&Point3::new(1.0, 1.0, 0.0));
        assert_relative_eq!(point, Point3::new(13.0, 3.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_look_at_maps_target_onto_negative_z() {
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::zeros(), Vec3::y());
        let target = view.transform_point(&Point3::origin());
        assert_relative_eq!(target, Point3::new(0.0, 0.0, -10.0), epsilon = 1e-5);
    }

    #[test]
    fn test_deg_to_rad() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI);
    }
}
