use rand::Rng;

use crate::geometry::Bounded;
use crate::{Ball, Magnitude, Paddle, Params, Side};

impl Ball {
    /// Elastic bounce off the top or bottom wall. Returns true on a bounce.
    pub fn reflect_off_top_or_bottom(&mut self, field_height: f32) -> bool {
        let edges = self.edges();
        if edges.top < 0.0 || edges.bottom > field_height {
            self.vel.y = -self.vel.y;
            log::trace!("wall bounce at y={:.1}", self.bounds.center.y);
            true
        } else {
            false
        }
    }

    /// Bounce off whichever paddle the ball's facing edge crossed since the
    /// last `advance`. Returns true on a hit.
    ///
    /// Only the previous and current edges are compared and vertical overlap
    /// is tested at the current position, so a ball that sweeps past a paddle
    /// diagonally and ends the tick clear of it is not caught.
    pub fn reflect_off_paddles<R: Rng>(
        &mut self,
        paddles: &[Paddle; 2],
        rng: &mut R,
    ) -> bool {
        let left = &paddles[Side::Left.index()];
        let right = &paddles[Side::Right.index()];

        let hit_left = self.prev_left() >= left.bounds.right()
            && self.bounds.left() < left.bounds.right()
            && self.bounds.overlaps_vertically(&left.bounds);

        let hit_right = self.prev_right() <= right.bounds.left()
            && self.bounds.right() > right.bounds.left()
            && self.bounds.overlaps_vertically(&right.bounds);

        if !(hit_left || hit_right) {
            return false;
        }

        self.vel.x = -self.vel.x;

        // Speed is taken before the perturbation so growth is relative to the incoming speed
        let speed = self.vel.magnitude();
        let half_range = Params::HIT_DEFLECTION_RANGE / 2.0;
        self.vel.y += rng.gen_range(-half_range..=half_range);
        self.vel.rescale_magnitude(speed * Params::BALL_SPEED_INCREASE);

        log::trace!(
            "paddle hit ({}), speed {:.1} -> {:.1}",
            if hit_left { "left" } else { "right" },
            speed,
            self.vel.magnitude()
        );
        true
    }

    /// Goal condition: the ball has crossed the given side line
    pub fn is_beyond_side(&self, field_width: f32, side: Side) -> bool {
        match side {
            Side::Left => self.bounds.left() < 0.0,
            Side::Right => self.bounds.right() > field_width,
        }
    }
}
