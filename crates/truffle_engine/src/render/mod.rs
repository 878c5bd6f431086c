//! Rendering-side helpers that do not touch a graphics API

pub mod camera;

pub use camera::Camera;
