//! Physics module: kinematic bodies and bounding-volume collision detection
//!
//! Per frame the owner integrates all bodies, clears the previous collision
//! relations and tests the pairs it cares about. There is no collision
//! response; contacts are only recorded.

pub mod body;
pub mod collision;
pub mod kinematics;
pub mod world;

pub use body::{Body, BodyId, BoundingType, CollisionState};
pub use collision::{BoundingBox, BoundingSphere, CollisionVolume};
pub use kinematics::{integrate, DRAG_FACTOR};
pub use world::{CollisionPair, PhysicsWorld};
