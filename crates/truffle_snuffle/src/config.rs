//! Game configuration
//!
//! Every value has a default matching the stock scene, so a missing or
//! partial config file is fine. A table that is present but partial falls
//! back to that table type's own defaults, not the scene's.

use serde::{Deserialize, Serialize};
use truffle_engine::assets::{ModelBoundingSphere, ModelError};
use truffle_engine::config::Config;
use truffle_engine::debug::CollisionDebugColors;
use truffle_engine::foundation::math::Vec3;
use truffle_engine::physics::{Body, BoundingType};
use truffle_engine::render::Camera;

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Pig setup
    pub player: ObjectConfig,

    /// Truffle setup
    pub truffle: ObjectConfig,

    /// Follow camera
    pub camera: Camera,

    /// Truffle back-and-forth animation
    pub easing: EasingConfig,

    /// Collision volume drawing
    pub debug: DebugConfig,
}

impl Config for GameConfig {}

impl Default for GameConfig {
    /// The stock scene: a sphere pig at the origin and a box truffle to its side
    fn default() -> Self {
        Self {
            gameplay: GameplayConfig::default(),
            player: ObjectConfig {
                collision_scale: Vec3::new(75.0, 50.0, 75.0),
                collision_offset: Vec3::new(0.0, 100.0, 0.0),
                bounding_type: BoundingType::Sphere,
                ..ObjectConfig::default()
            },
            truffle: ObjectConfig {
                position: Vec3::new(200.0, 0.0, 0.0),
                rotation: Vec3::new(0.2, 0.0, 0.0),
                scale: Vec3::new(3.0, 3.0, 3.0),
                collision_scale: Vec3::new(50.0, 75.0, 50.0),
                collision_offset: Vec3::new(0.0, 100.0, 0.0),
                bounding_type: BoundingType::Box,
                model: ModelSource::Sphere(ModelBoundingSphere::new(Vec3::zeros(), 0.5)),
            },
            camera: Camera::with_offset(Vec3::new(0.0, 200.0, -800.0)),
            easing: EasingConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

/// Gameplay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Radians turned per frame while Left or Right is held
    pub turn_rate: f32,

    /// Forward acceleration while Up is held
    pub thrust: f32,

    /// Vertical acceleration during a jump
    pub gravity: f32,

    /// Initial upward speed of a jump
    pub jump_speed: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            turn_rate: 0.1,
            thrust: 1000.0,
            gravity: -3000.0,
            jump_speed: 1000.0,
        }
    }
}

/// Where a model's bounding sphere comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelSource {
    /// Bounding sphere given directly
    Sphere(ModelBoundingSphere),
    /// Bounding sphere computed from model-space vertex positions
    Vertices(Vec<Vec3>),
}

impl ModelSource {
    /// Resolve to a bounding sphere
    pub fn bounds(&self) -> Result<ModelBoundingSphere, ModelError> {
        match self {
            Self::Sphere(sphere) => Ok(*sphere),
            Self::Vertices(vertices) => ModelBoundingSphere::from_vertices(vertices),
        }
    }
}

impl Default for ModelSource {
    fn default() -> Self {
        Self::Sphere(ModelBoundingSphere::default())
    }
}

/// Initial transform and collision setup of one game object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectConfig {
    /// Starting position
    pub position: Vec3,
    /// Starting Euler rotation in radians
    pub rotation: Vec3,
    /// Visual scale
    pub scale: Vec3,
    /// Collision volume scale
    pub collision_scale: Vec3,
    /// Collision volume offset
    pub collision_offset: Vec3,
    /// Collision volume kind
    pub bounding_type: BoundingType,
    /// Model bounding sphere
    pub model: ModelSource,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            collision_scale: Vec3::new(1.0, 1.0, 1.0),
            collision_offset: Vec3::zeros(),
            bounding_type: BoundingType::Sphere,
            model: ModelSource::default(),
        }
    }
}

impl ObjectConfig {
    /// Build the body this object starts as
    pub fn build_body(&self) -> Result<Body, ModelError> {
        let bounds = self.model.bounds()?;
        Ok(Body::new(&bounds)
            .with_position(self.position)
            .with_rotation(self.rotation)
            .with_scale(self.scale)
            .with_collision(self.collision_scale, self.collision_offset)
            .with_bounding_type(self.bounding_type))
    }
}

/// Quadratic ease-out animation between two points
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EasingConfig {
    /// Whether the animation drives the truffle's position
    pub enabled: bool,
    /// Seconds per leg
    pub duration: f32,
    /// First endpoint
    pub start: Vec3,
    /// Second endpoint
    pub end: Vec3,
}

impl Default for EasingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            duration: 3.0,
            start: Vec3::new(200.0, 0.0, 0.0),
            end: Vec3::new(400.0, 0.0, 0.0),
        }
    }
}

/// Debug drawing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Draw collision volumes
    pub draw_volumes: bool,
    /// Volume colours
    pub colors: CollisionDebugColors,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            draw_volumes: true,
            colors: CollisionDebugColors::default(),
        }
    }
}
