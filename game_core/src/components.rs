use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geometry::{AxisAlignedBox, Bounded};

/// Field side; also the paddle index (0 = left/human, 1 = right/pursuit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub bounds: AxisAlignedBox,
    pub vel: Vec2,
    /// Center before the last `advance`; paddle hits are detected by the
    /// edge crossing between this and the current center.
    pub prev: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, size: f32, vel: Vec2) -> Self {
        Self {
            bounds: AxisAlignedBox::new(pos, Vec2::splat(size)),
            vel,
            prev: pos,
        }
    }

    /// A stationary ball waiting for a serve
    pub fn at_rest(pos: Vec2, size: f32) -> Self {
        Self::new(pos, size, Vec2::ZERO)
    }

    pub fn pos(&self) -> Vec2 {
        self.bounds.center
    }

    pub fn prev_left(&self) -> f32 {
        self.prev.x - self.bounds.size.x / 2.0
    }

    pub fn prev_right(&self) -> f32 {
        self.prev.x + self.bounds.size.x / 2.0
    }
}

impl Bounded for Ball {
    fn bounds(&self) -> &AxisAlignedBox {
        &self.bounds
    }
}

/// Paddle component - one per side for the whole session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub bounds: AxisAlignedBox,
    /// Vertical speed cap when computer-controlled; `None` for the human paddle
    pub pursuit_speed: Option<f32>,
    pub score: u32,
}

impl Paddle {
    pub fn human(pos: Vec2, size: Vec2) -> Self {
        Self {
            bounds: AxisAlignedBox::new(pos, size),
            pursuit_speed: None,
            score: 0,
        }
    }

    pub fn pursuer(pos: Vec2, size: Vec2, pursuit_speed: f32) -> Self {
        Self {
            bounds: AxisAlignedBox::new(pos, size),
            pursuit_speed: Some(pursuit_speed),
            score: 0,
        }
    }

    pub fn is_human(&self) -> bool {
        self.pursuit_speed.is_none()
    }

    pub fn y(&self) -> f32 {
        self.bounds.center.y
    }

    /// Move the paddle to `pos` without touching its score
    pub fn reset_position(&mut self, pos: Vec2) {
        self.bounds.center = pos;
    }

    /// The opposing side let the ball through
    pub fn register_goal_against(&mut self) {
        self.score += 1;
    }
}

impl Bounded for Paddle {
    fn bounds(&self) -> &AxisAlignedBox {
        &self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_index_and_opponent() {
        assert_eq!(Side::Left.index(), 0);
        assert_eq!(Side::Right.index(), 1);
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Right.opponent(), Side::Left);
    }

    #[test]
    fn test_ball_prev_edges() {
        let mut ball = Ball::new(Vec2::new(10.0, 200.0), 20.0, Vec2::new(-50.0, 0.0));
        ball.prev = Vec2::new(30.0, 200.0);
        assert_eq!(ball.prev_left(), 20.0);
        assert_eq!(ball.prev_right(), 40.0);
        assert_eq!(ball.edges().left, 0.0);
    }

    #[test]
    fn test_paddle_goal_and_reset_keep_score() {
        let mut paddle = Paddle::pursuer(Vec2::new(750.0, 100.0), Vec2::new(20.0, 80.0), 200.0);
        assert!(!paddle.is_human());
        paddle.register_goal_against();
        paddle.register_goal_against();
        paddle.reset_position(Vec2::new(750.0, 200.0));

        assert_eq!(paddle.score, 2, "Reset must preserve score");
        assert_eq!(paddle.y(), 200.0);
    }
}
