//! Debug drawing interface and a recording implementation
//!
//! Anything that can draw wireframe boxes and spheres implements
//! [`DebugRenderer`]. [`DebugDrawSystem`] is the in-engine implementation:
//! it records the frame's shapes so a backend (or a test) can consume them.

use crate::foundation::math::{Mat4, Vec4};
use crate::physics::collision::{BoundingBox, BoundingSphere};

use super::wireframe::{self, LineStrip};

/// Sink for wireframe bounding volumes
pub trait DebugRenderer {
    /// Draw the outline of an axis-aligned box
    fn draw_box_wireframe(&mut self, bounds: &BoundingBox, view: &Mat4, projection: &Mat4, color: Vec4);

    /// Draw the outline of a sphere
    fn draw_sphere_wireframe(&mut self, sphere: &BoundingSphere, view: &Mat4, projection: &Mat4, color: Vec4);
}

/// Debug shape primitives recorded for the current frame
#[derive(Clone, Debug, PartialEq)]
pub enum DebugShape {
    /// Box wireframe
    Box {
        /// World-space bounds
        bounds: BoundingBox,
        /// RGBA colour
        color: Vec4,
    },

    /// Sphere wireframe
    Sphere {
        /// World-space sphere
        sphere: BoundingSphere,
        /// RGBA colour
        color: Vec4,
    },
}

impl DebugShape {
    /// Colour of the shape
    pub fn color(&self) -> Vec4 {
        match self {
            DebugShape::Box { color, .. } | DebugShape::Sphere { color, .. } => *color,
        }
    }

    /// World-space line strips for this shape
    pub fn line_strips(&self, tessellation: usize) -> Vec<LineStrip> {
        match self {
            DebugShape::Box { bounds, .. } => vec![wireframe::box_line_strip(bounds)],
            DebugShape::Sphere { sphere, .. } => {
                wireframe::sphere_line_strips(sphere, tessellation).into()
            }
        }
    }
}

/// Records debug shapes for one frame
pub struct DebugDrawSystem {
    shapes: Vec<DebugShape>,
    view_projection: Mat4,

    /// Segments per sphere circle when generating line strips
    pub tessellation: usize,

    /// Master enable/disable flag
    pub enabled: bool,
}

impl DebugDrawSystem {
    /// Create a new debug draw system
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            view_projection: Mat4::identity(),
            tessellation: wireframe::SPHERE_TESSELLATION,
            enabled: true,
        }
    }

    /// Drop the previous frame's shapes
    pub fn begin_frame(&mut self) {
        self.shapes.clear();
    }

    /// Recorded shapes for this frame
    pub fn shapes(&self) -> &[DebugShape] {
        &self.shapes
    }

    /// Get the number of recorded shapes
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Combined projection * view of the most recent draw call
    pub fn view_projection(&self) -> &Mat4 {
        &self.view_projection
    }

    /// Every recorded shape as coloured world-space line strips
    pub fn line_strips(&self) -> Vec<(Vec4, LineStrip)> {
        self.shapes
            .iter()
            .flat_map(|shape| {
                let color = shape.color();
                shape
                    .line_strips(self.tessellation)
                    .into_iter()
                    .map(move |strip| (color, strip))
            })
            .collect()
    }

    fn record(&mut self, shape: DebugShape, view: &Mat4, projection: &Mat4) {
        if !self.enabled {
            return;
        }
        self.view_projection = projection * view;
        self.shapes.push(shape);
    }
}

impl DebugRenderer for DebugDrawSystem {
    fn draw_box_wireframe(&mut self, bounds: &BoundingBox, view: &Mat4, projection: &Mat4, color: Vec4) {
        self.record(DebugShape::Box { bounds: *bounds, color }, view, projection);
    }

    fn draw_sphere_wireframe(&mut self, sphere: &BoundingSphere, view: &Mat4, projection: &Mat4, color: Vec4) {
        self.record(DebugShape::Sphere { sphere: *sphere, color }, view, projection);
    }
}

impl Default for DebugDrawSystem {
    fn default() -> Self {
        Self::new()
    }
}
