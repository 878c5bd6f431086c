//! Wireframe geometry for bounding volumes
//!
//! Produces world-space line strips a graphics backend can upload as-is.
//! Spheres are drawn as three great circles, boxes as one strip that walks
//! every edge of the cube.

use crate::foundation::math::{constants, Vec3};
use crate::physics::collision::{BoundingBox, BoundingSphere};

/// Default number of segments per sphere circle
pub const SPHERE_TESSELLATION: usize = 16;

/// Unit cube line strip covering all twelve edges (some twice)
pub const UNIT_CUBE_LINE_STRIP: [[f32; 3]; 17] = [
    [0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0],
    [1.0, 1.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0],
];

/// A connected run of line segments
pub type LineStrip = Vec<Vec3>;

/// Closed unit circles in the XY, XZ and YZ planes
pub fn unit_sphere_circles(tessellation: usize) -> [LineStrip; 3] {
    let tessellation = tessellation.max(3);
    let step = constants::TAU / tessellation as f32;
    let circle = |point: fn(f32, f32) -> Vec3| -> LineStrip {
        (0..=tessellation)
            .map(|i| {
                // Reuse the first angle so the strip closes exactly
                let angle = (i % tessellation) as f32 * step;
                point(angle.cos(), angle.sin())
            })
            .collect()
    };

    [
        circle(|c, s| Vec3::new(c, s, 0.0)),
        circle(|c, s| Vec3::new(c, 0.0, s)),
        circle(|c, s| Vec3::new(0.0, c, s)),
    ]
}

/// World-space circles outlining a sphere
pub fn sphere_line_strips(sphere: &BoundingSphere, tessellation: usize) -> [LineStrip; 3] {
    unit_sphere_circles(tessellation).map(|strip| {
        strip
            .into_iter()
            .map(|point| point * sphere.radius + sphere.center)
            .collect()
    })
}

/// World-space strip outlining a box
pub fn box_line_strip(bounds: &BoundingBox) -> LineStrip {
    let size = bounds.size();
    UNIT_CUBE_LINE_STRIP
        .iter()
        .map(|&[x, y, z]| bounds.min + Vec3::new(x, y, z).component_mul(&size))
        .collect()
}
