//! Quadratic ease-out between two points

use truffle_engine::foundation::math::Vec3;

/// Position at `time` seconds into a `duration`-second ease from `start` to `end`
///
/// Uses `p = -t^2 + 2t` with `t = time / duration`: fast at the start,
/// settling into `end`.
pub fn quad_ease_out(time: f32, duration: f32, start: Vec3, end: Vec3) -> Vec3 {
    let t = time / duration;
    let progress = -t * t + 2.0 * t;
    start + (end - start) * progress
}

/// Eases back and forth between two points forever
#[derive(Debug, Clone, PartialEq)]
pub struct PingPongEase {
    elapsed: f32,
    duration: f32,
    start: Vec3,
    end: Vec3,
}

impl PingPongEase {
    /// Start an animation from `start` towards `end`
    pub fn new(duration: f32, start: Vec3, end: Vec3) -> Self {
        Self {
            elapsed: 0.0,
            duration,
            start,
            end,
        }
    }

    /// Advance by `dt` seconds and return the current position
    pub fn update(&mut self, dt: f32) -> Vec3 {
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            // Leg finished, head back the other way
            self.elapsed = 0.0;
            std::mem::swap(&mut self.start, &mut self.end);
        }
        self.position()
    }

    /// Current position without advancing
    pub fn position(&self) -> Vec3 {
        quad_ease_out(self.elapsed, self.duration, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_curve_endpoints_and_midpoint() {
        let start = Vec3::new(200.0, 0.0, 0.0);
        let end = Vec3::new(400.0, 0.0, 0.0);

        assert_relative_eq!(quad_ease_out(0.0, 3.0, start, end), start);
        assert_relative_eq!(quad_ease_out(3.0, 3.0, start, end), end);
        // Half way through time is three quarters of the way through distance
        assert_relative_eq!(quad_ease_out(1.5, 3.0, start, end), Vec3::new(350.0, 0.0, 0.0));
    }

    #[test]
    fn test_ping_pong_swaps_direction() {
        let mut ease = PingPongEase::new(1.0, Vec3::zeros(), Vec3::new(10.0, 0.0, 0.0));

        assert_relative_eq!(ease.update(0.5), Vec3::new(7.5, 0.0, 0.0));
        // Leg completes and restarts from the far end
        assert_relative_eq!(ease.update(0.5), Vec3::new(10.0, 0.0, 0.0));
        assert_relative_eq!(ease.update(0.5), Vec3::new(2.5, 0.0, 0.0));
    }
}
