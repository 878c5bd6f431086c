//! Bounding volumes and intersection testing
//!
//! # Module Organization
//!
//! - [`primitives`] - Boxes, spheres and their intersection predicates
//! - [`volume`] - Deriving a body's volume and dispatching on the kind pair

pub mod primitives;
pub mod volume;

pub use primitives::{BoundingBox, BoundingSphere};
pub use volume::{bounding_box, bounding_sphere, CollisionVolume};
