//! Asset-facing types
//!
//! Only the parts of a loaded model that the simulation depends on live here.

pub mod model;

pub use model::{ModelBounds, ModelBoundingSphere, ModelError};
