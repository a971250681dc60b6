use glam::Vec2;
use rand::Rng;

use crate::{Ball, Magnitude};

impl Ball {
    /// Launch a resting ball at `start_speed` in a random direction.
    /// A ball that is already moving is left alone; returns whether it launched.
    pub fn serve<R: Rng>(&mut self, start_speed: f32, rng: &mut R) -> bool {
        if self.vel.magnitude() != 0.0 {
            return false;
        }

        let x_sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let mut vel = Vec2::new(
            start_speed * x_sign,
            start_speed * rng.gen_range(-1.0f32..=1.0),
        );
        vel.rescale_magnitude(start_speed);
        self.vel = vel;
        true
    }
}
