//! Player steering and jumping

use truffle_engine::input::{InputState, KeyCode};
use truffle_engine::physics::Body;

use crate::config::GameplayConfig;

/// Turns the pig with Left/Right and pushes it forward with Up
#[derive(Debug, Clone)]
pub struct PlayerController {
    turn_rate: f32,
    thrust: f32,
}

impl PlayerController {
    /// Create a controller from gameplay settings
    pub fn new(gameplay: &GameplayConfig) -> Self {
        Self {
            turn_rate: gameplay.turn_rate,
            thrust: gameplay.thrust,
        }
    }

    /// Apply one frame of input to the body
    ///
    /// Turning is per frame, not per second. Acceleration is replaced, not
    /// accumulated, and is zero whenever Up is released.
    pub fn apply(&self, body: &mut Body, input: &InputState) {
        if input.is_key_down(KeyCode::Left) {
            body.rotation.y += self.turn_rate;
        }
        if input.is_key_down(KeyCode::Right) {
            body.rotation.y -= self.turn_rate;
        }

        if input.is_key_down(KeyCode::Up) {
            body.acceleration.x = body.rotation.y.sin() * self.thrust;
            body.acceleration.z = body.rotation.y.cos() * self.thrust;
        } else {
            body.acceleration.fill(0.0);
        }
    }
}

/// Ballistic jump driven by game time rather than by the integrator
#[derive(Debug, Clone)]
pub struct Jump {
    gravity: f32,
    jump_speed: f32,
    started_at: Option<f32>,
}

impl Jump {
    /// Create a jump controller from gameplay settings
    pub fn new(gameplay: &GameplayConfig) -> Self {
        Self {
            gravity: gameplay.gravity,
            jump_speed: gameplay.jump_speed,
            started_at: None,
        }
    }

    /// Whether the body is in the air
    pub fn is_airborne(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start a jump on Space when grounded, then set the height for `total_time`
    ///
    /// Height follows `gravity * t^2 / 2 + jump_speed * t`; the jump ends when
    /// it would go below the ground.
    pub fn update(&mut self, body: &mut Body, input: &InputState, total_time: f32) {
        if input.is_key_down(KeyCode::Space) && body.position.y <= 0.0 {
            log::debug!("Jump started at {:.3}s", total_time);
            self.started_at = Some(total_time);
        }

        if let Some(start) = self.started_at {
            let t = total_time - start;
            body.position.y = self.gravity * t * t / 2.0 + self.jump_speed * t;
            if body.position.y < 0.0 {
                body.position.y = 0.0;
                self.started_at = None;
                log::debug!("Landed after {:.3}s", t);
            }
        }
    }
}
