//! # Truffle Engine
//!
//! The simulation core behind the TruffleSnuffle game: kinematic bodies,
//! bounding-volume collision detection and the debug drawing that shows it.
//!
//! ## Features
//!
//! - **Kinematics**: Per-frame Euler integration with a fixed drag factor
//! - **Bounding Volumes**: Box and sphere proxies derived from a model's bounding sphere
//! - **Collision Detection**: Pairwise box/sphere tests with a symmetric contact relation
//! - **Debug Drawing**: Wireframe volumes coloured by collision state
//!
//! ## Quick Start
//!
//! ```rust
//! use truffle_engine::prelude::*;
//!
//! let model = ModelBoundingSphere::new(Vec3::zeros(), 1.0);
//! let mut world = PhysicsWorld::new();
//! let pig = world.insert(Body::new(&model));
//! let truffle = world.insert(Body::new(&model).with_position(Vec3::new(1.5, 0.0, 0.0)));
//!
//! let touching = world.step(1.0 / 60.0, &[CollisionPair::new(pig, truffle)]);
//! assert_eq!(touching, 1);
//! assert_eq!(world.body(pig).collision_state(), CollisionState::Colliding);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod assets;
pub mod physics;
pub mod debug;
pub mod input;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{ModelBounds, ModelBoundingSphere},
        config::{Config, ConfigError},
        debug::{CollisionDebugVisualizer, DebugDrawSystem, DebugRenderer},
        foundation::{
            math::{Mat4, Vec3, Vec4},
            time::{FrameTime, Timer},
        },
        input::{InputState, KeyCode},
        physics::{
            Body, BodyId, BoundingType, CollisionPair, CollisionState, CollisionVolume,
            PhysicsWorld,
        },
        render::Camera,
    };
}
