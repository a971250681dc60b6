use crate::{Ball, Paddle};

impl Ball {
    /// Remember the current center, then integrate velocity over `dt`
    pub fn advance(&mut self, dt: f32) {
        self.prev = self.bounds.center;
        self.bounds.center += self.vel * dt;
    }
}

impl Paddle {
    /// Pursue the ball vertically, never faster than the paddle's cap.
    /// Human paddles are driven by `set_y` and ignore this.
    pub fn advance(&mut self, _field_height: f32, ball: &Ball, dt: f32) {
        let Some(cap) = self.pursuit_speed else {
            return;
        };

        let ball_vy = ball.vel.y;
        let dy = if ball_vy.abs() < cap {
            ball_vy * dt
        } else {
            let direction = if ball_vy > 0.0 { 1.0 } else { -1.0 };
            direction * cap * dt
        };
        self.bounds.center.y += dy;
    }

    /// Place the paddle at a pointer coordinate
    pub fn set_y(&mut self, y: f32) {
        self.bounds.center.y = y;
    }
}
