//! Model bounding data consumed by the physics layer
//!
//! Loading meshes is the job of whatever content pipeline hosts the game.
//! Physics only needs the model-space bounding sphere of each loaded model,
//! expressed through [`ModelBounds`].

use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model-space bounding sphere of a loaded asset
///
/// Both values are invariant for the lifetime of the asset.
pub trait ModelBounds {
    /// Offset of the bounding sphere centre from the model origin
    fn bounding_sphere_center_offset(&self) -> Vec3;

    /// Radius of the bounding sphere in model units
    fn bounding_sphere_radius(&self) -> f32;
}

/// Plain bounding sphere value, as read from a content pipeline or a config file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelBoundingSphere {
    /// Centre offset from the model origin
    pub center_offset: Vec3,
    /// Radius in model units
    pub radius: f32,
}

impl ModelBoundingSphere {
    /// Create a bounding sphere value
    pub fn new(center_offset: Vec3, radius: f32) -> Self {
        Self { center_offset, radius }
    }

    /// Derive a bounding sphere from raw model-space vertex positions
    ///
    /// The centre is the middle of the vertices' axis-aligned extent and the
    /// radius reaches the furthest vertex from that centre.
    pub fn from_vertices(vertices: &[Vec3]) -> Result<Self, ModelError> {
        if vertices.is_empty() {
            return Err(ModelError::EmptyVertexSet);
        }
        if let Some(index) = vertices.iter().position(|v| !v.iter().all(|c| c.is_finite())) {
            return Err(ModelError::NonFiniteVertex(index));
        }

        let mut min = vertices[0];
        let mut max = vertices[0];
        for vertex in &vertices[1..] {
            min = min.inf(vertex);
            max = max.sup(vertex);
        }

        let center = (min + max) * 0.5;
        let radius = vertices
            .iter()
            .map(|v| (v - center).magnitude_squared())
            .fold(0.0f32, f32::max)
            .sqrt();

        log::debug!(
            "Model bounds from {} vertices: center ({:.2}, {:.2}, {:.2}), radius {:.2}",
            vertices.len(), center.x, center.y, center.z, radius
        );

        Ok(Self::new(center, radius))
    }
}

impl Default for ModelBoundingSphere {
    fn default() -> Self {
        Self::new(Vec3::zeros(), 1.0)
    }
}

impl ModelBounds for ModelBoundingSphere {
    fn bounding_sphere_center_offset(&self) -> Vec3 {
        self.center_offset
    }

    fn bounding_sphere_radius(&self) -> f32 {
        self.radius
    }
}

/// Errors raised while deriving model bounds
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// No vertices were supplied
    #[error("cannot compute bounds of a model with no vertices")]
    EmptyVertexSet,

    /// A vertex contained NaN or infinity
    #[error("vertex {0} has a non-finite component")]
    NonFiniteVertex(usize),
}
