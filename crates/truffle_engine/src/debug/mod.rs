//! Debug module for visualization and debugging tools

pub mod draw;
pub mod collision_debug;
pub mod wireframe;

pub use draw::{DebugShape, DebugDrawSystem, DebugRenderer};
pub use collision_debug::{CollisionDebugColors, CollisionDebugVisualizer};
pub use wireframe::{box_line_strip, sphere_line_strips, LineStrip};
