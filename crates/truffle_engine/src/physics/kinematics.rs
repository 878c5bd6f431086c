//! Kinematic integration
//!
//! Semi-implicit Euler with a fixed per-call drag. The drag is applied once
//! per call regardless of `dt`, so motion depends on the frame rate.

use super::body::Body;

/// Velocity multiplier applied on every integration call
pub const DRAG_FACTOR: f32 = 0.9;

/// Advance a body's velocity and position by one frame
pub fn integrate(body: &mut Body, dt: f32) {
    body.velocity *= DRAG_FACTOR;
    body.velocity += body.acceleration * dt;
    body.position += body.velocity * dt;
}

impl Body {
    /// Advance this body by one frame, see [`integrate`]
    pub fn integrate(&mut self, dt: f32) {
        integrate(self, dt);
    }
}
