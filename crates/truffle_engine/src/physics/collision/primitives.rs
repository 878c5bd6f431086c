//! Primitive bounding volumes and their intersection predicates
//!
//! All predicates are inclusive: shapes that only touch count as intersecting.

use crate::foundation::math::Vec3;

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this sphere intersects with another
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }

    /// Check if this sphere intersects an axis-aligned box
    pub fn intersects_box(&self, bounds: &BoundingBox) -> bool {
        bounds.intersects_sphere(self)
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl BoundingBox {
    /// Create a new box from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Get the center of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the full size of the box along each axis
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Closest point inside the box to `point`
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.sup(&self.min).inf(&self.max)
    }

    /// Check if this box intersects another box
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Check if this box intersects a sphere
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        let closest = self.closest_point(sphere.center);
        (closest - sphere.center).magnitude_squared() <= sphere.radius * sphere.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_sphere() {
        let a = BoundingSphere::new(Vec3::zeros(), 1.0);

        assert!(a.intersects(&BoundingSphere::new(Vec3::new(1.5, 0.0, 0.0), 1.0)));
        assert!(a.intersects(&BoundingSphere::new(Vec3::new(2.0, 0.0, 0.0), 1.0)));
        assert!(!a.intersects(&BoundingSphere::new(Vec3::new(3.0, 0.0, 0.0), 1.0)));
    }

    #[test]
    fn test_box_box() {
        let a = BoundingBox::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));

        assert!(a.intersects(&BoundingBox::new(Vec3::new(0.5, 0.5, 0.5), Vec3::new(2.0, 2.0, 2.0))));
        // Touching faces
        assert!(a.intersects(&BoundingBox::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0))));
        // Overlap on two axes only
        assert!(!a.intersects(&BoundingBox::new(Vec3::new(0.0, 0.0, 1.5), Vec3::new(1.0, 1.0, 2.0))));
    }

    #[test]
    fn test_box_sphere_near_corner() {
        let bounds = BoundingBox::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));

        // Distance from (2,2,1) to the corner (1,1,1) is sqrt(2) ~ 1.414
        assert!(!bounds.intersects_sphere(&BoundingSphere::new(Vec3::new(2.0, 2.0, 1.0), 1.4)));
        assert!(bounds.intersects_sphere(&BoundingSphere::new(Vec3::new(2.0, 2.0, 1.0), 1.5)));
        // Sphere fully inside the box
        assert!(bounds.intersects_sphere(&BoundingSphere::new(Vec3::new(0.5, 0.5, 0.5), 0.1)));
    }

    #[test]
    fn test_box_helpers() {
        let bounds = BoundingBox::new(Vec3::new(0.0, 1.0, 1.0), Vec3::new(2.0, 3.0, 5.0));

        assert_relative_eq!(bounds.center(), Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(bounds.size(), Vec3::new(2.0, 2.0, 4.0));
        assert_relative_eq!(bounds.closest_point(Vec3::new(5.0, 2.0, -10.0)), Vec3::new(2.0, 2.0, 1.0));
    }
}
