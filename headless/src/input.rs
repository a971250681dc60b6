//! Scripted stand-in for the pointer that drives the human paddle

use game_core::{Side, Simulation};

/// Moves a virtual pointer toward where the ball will meet the left paddle
#[derive(Debug, Clone)]
pub struct PointerBot {
    pub y: f32,
    /// Max pointer travel per second; a real hand is not instant
    pub speed: f32,
}

impl PointerBot {
    pub fn new(y: f32, speed: f32) -> Self {
        Self { y, speed }
    }

    /// Advance the pointer by `dt` and return its new vertical coordinate
    pub fn update(&mut self, sim: &Simulation, dt: f32) -> f32 {
        let target = target_y(sim);
        let max_step = self.speed * dt;
        self.y += (target - self.y).clamp(-max_step, max_step);
        self.y
    }
}

/// Strategy:
/// 1. If the ball is moving towards us, predict the intersection y.
/// 2. If it is moving away, return to center to cover maximum area.
fn target_y(sim: &Simulation) -> f32 {
    let ball = sim.ball();
    let field = sim.field_size();
    let center_y = field.y / 2.0;

    if ball.vel.x >= 0.0 {
        return center_y;
    }

    let paddle_x = sim.config().paddle_x(Side::Left);
    let time_to_reach = (ball.pos().x - paddle_x) / -ball.vel.x;
    let predicted = ball.pos().y + ball.vel.y * time_to_reach.max(0.0);
    fold_into_field(predicted, field.y)
}

/// Unfold wall bounces: a straight-line prediction mirrored back into [0, height]
fn fold_into_field(y: f32, height: f32) -> f32 {
    let period = 2.0 * height;
    let m = y.rem_euclid(period);
    if m > height {
        period - m
    } else {
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Ball, Config};
    use glam::Vec2;

    fn sim() -> Simulation {
        let config = Config {
            field_width: 800.0,
            aspect_ratio: 2.0,
            ..Config::default()
        };
        Simulation::new(config).unwrap()
    }

    #[test]
    fn test_fold_into_field() {
        assert_eq!(fold_into_field(150.0, 400.0), 150.0);
        assert_eq!(fold_into_field(450.0, 400.0), 350.0);
        assert_eq!(fold_into_field(-50.0, 400.0), 50.0);
    }

    #[test]
    fn test_returns_to_center_when_ball_moves_away() {
        let mut sim = sim();
        *sim.ball_mut() = Ball::new(Vec2::new(400.0, 50.0), 13.0, Vec2::new(200.0, 0.0));
        assert_eq!(target_y(&sim), 200.0);
    }

    #[test]
    fn test_predicts_intersection() {
        let mut sim = sim();
        let paddle_x = sim.config().paddle_x(Side::Left);
        // one second away, drifting down 100/s
        *sim.ball_mut() = Ball::new(Vec2::new(paddle_x + 300.0, 100.0), 13.0, Vec2::new(-300.0, 100.0));
        assert!((target_y(&sim) - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_pointer_speed_is_limited() {
        let mut sim = sim();
        *sim.ball_mut() = Ball::new(Vec2::new(400.0, 50.0), 13.0, Vec2::new(200.0, 0.0));
        let mut bot = PointerBot::new(0.0, 100.0);
        assert!((bot.update(&sim, 0.5) - 50.0).abs() < 1e-4);
    }
}
