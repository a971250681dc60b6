use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::systems::check_scoring;
use crate::{
    Ball, Config, ConfigError, Events, GameRng, Magnitude, Paddle, PaddleView, Params, Side,
    Snapshot,
};

/// Round state, derived from the ball's speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Ball at rest in the center, waiting for `serve`
    Idle,
    Rallying,
}

/// One match between the human (left) and pursuit (right) paddles
pub struct Simulation {
    config: Config,
    field_width: f32,
    field_height: f32,
    ball: Ball,
    paddles: [Paddle; 2],
    rng: GameRng,
    events: Events,
    tick: u32,
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::default())
    }

    pub fn with_seed(config: Config, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    pub fn with_rng(config: Config, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let center_y = config.field_height() / 2.0;
        let paddle_size = config.paddle_size();
        let paddles = [
            Paddle::human(Vec2::new(config.paddle_x(Side::Left), center_y), paddle_size),
            Paddle::pursuer(
                Vec2::new(config.paddle_x(Side::Right), center_y),
                paddle_size,
                config.pursuit_speed(),
            ),
        ];

        Ok(Self {
            field_width: config.field_width,
            field_height: config.field_height(),
            ball: Ball::at_rest(config.field_center(), config.ball_size()),
            paddles,
            rng,
            events: Events::new(),
            tick: 0,
            config,
        })
    }

    /// Run one tick of `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.events.clear();
        self.tick = self.tick.wrapping_add(1);
        let dt = sanitize_dt(dt);

        // 1. Move ball
        self.ball.advance(dt);

        // 2. Bounce off walls and paddles; both may apply in one tick
        if self.ball.reflect_off_top_or_bottom(self.field_height) {
            self.events.ball_hit_wall = true;
        }
        if self.ball.reflect_off_paddles(&self.paddles, &mut self.rng) {
            self.events.ball_hit_paddle = true;
        }

        // 3. Check scoring (ball crossed a side line)
        if let Some(scorer) = check_scoring(
            &self.ball,
            &mut self.paddles,
            self.field_width,
            &mut self.events,
        ) {
            log::info!(
                "{:?} scored, {} - {}",
                scorer,
                self.paddles[0].score,
                self.paddles[1].score
            );
            self.reset_round();
        }

        // 4. Pursuit paddle follows the ball
        let right = &mut self.paddles[Side::Right.index()];
        right.advance(self.field_height, &self.ball, dt);
    }

    /// Launch the ball if it is at rest; returns whether a serve happened
    pub fn serve(&mut self) -> bool {
        let start_speed = self.config.start_speed();
        let served = self.ball.serve(start_speed, &mut self.rng);
        if served {
            log::debug!(
                "serve at speed {:.1}, velocity ({:.1}, {:.1})",
                start_speed,
                self.ball.vel.x,
                self.ball.vel.y
            );
        }
        served
    }

    /// Human input: the pointer's vertical coordinate
    pub fn set_human_paddle_y(&mut self, y: f32) {
        self.paddles[Side::Left.index()].set_y(y);
    }

    /// Fresh ball in the center; paddles recentered, scores kept
    fn reset_round(&mut self) {
        self.ball = Ball::at_rest(self.config.field_center(), self.config.ball_size());
        let center_y = self.field_height / 2.0;
        for side in Side::BOTH {
            let x = self.config.paddle_x(side);
            self.paddles[side.index()].reset_position(Vec2::new(x, center_y));
        }
    }

    pub fn phase(&self) -> Phase {
        if self.ball.vel.magnitude() == 0.0 {
            Phase::Idle
        } else {
            Phase::Rallying
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn field_size(&self) -> Vec2 {
        Vec2::new(self.field_width, self.field_height)
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn paddles(&self) -> &[Paddle; 2] {
        &self.paddles
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn score(&self, side: Side) -> u32 {
        self.paddles[side.index()].score
    }

    /// Events raised by the most recent `advance`
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            phase: self.phase(),
            field: self.field_size(),
            ball: self.ball.bounds,
            ball_vel: self.ball.vel,
            paddles: self.paddles.map(|p| PaddleView {
                bounds: p.bounds,
                score: p.score,
            }),
        }
    }
}

/// Negative or non-finite dt counts as no time; long stalls are capped
fn sanitize_dt(dt: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("ignoring invalid dt {dt}");
        return 0.0;
    }
    dt.min(Params::MAX_DT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_800x400() -> Config {
        Config {
            field_width: 800.0,
            aspect_ratio: 2.0,
            ..Config::default()
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = config_800x400();
        config.field_width = 0.0;
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_initial_state_is_idle_and_centered() {
        let sim = Simulation::new(config_800x400()).expect("valid config");
        assert_eq!(sim.phase(), Phase::Idle);
        assert_eq!(sim.ball().pos(), Vec2::new(400.0, 200.0));
        assert!(sim.paddle(Side::Left).is_human());
        assert!(!sim.paddle(Side::Right).is_human());
        assert_eq!(sim.paddle(Side::Left).y(), 200.0);
        assert_eq!(sim.paddle(Side::Right).y(), 200.0);
    }

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(0.016), 0.016);
        assert_eq!(sanitize_dt(-1.0), 0.0);
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY), 0.0);
        assert_eq!(sanitize_dt(30.0), Params::MAX_DT);
    }

    #[test]
    fn test_negative_dt_does_not_rewind() {
        let mut sim = Simulation::with_seed(config_800x400(), 3).expect("valid config");
        sim.serve();
        let before = sim.ball().pos();
        sim.advance(-0.5);
        assert_eq!(sim.ball().pos(), before);
    }

    #[test]
    fn test_events_clear_each_tick() {
        let mut sim = Simulation::new(config_800x400()).expect("valid config");
        {
            let ball = sim.ball_mut();
            ball.bounds.center = Vec2::new(400.0, 10.0);
            ball.vel = Vec2::new(0.0, -100.0);
        }
        sim.advance(0.1);
        assert!(sim.events().ball_hit_wall);

        sim.advance(0.1);
        assert!(!sim.events().ball_hit_wall, "Events only describe the last tick");
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut sim = Simulation::with_seed(config_800x400(), 11).expect("valid config");
        sim.serve();
        sim.advance(0.016);
        let snap = sim.snapshot();

        assert_eq!(snap.tick, 1);
        assert_eq!(snap.phase, Phase::Rallying);
        assert_eq!(snap.field, Vec2::new(800.0, 400.0));
        assert_eq!(snap.ball, sim.ball().bounds);
        assert_eq!(snap.paddles[1].bounds, sim.paddle(Side::Right).bounds);
        assert_eq!(snap.paddles[0].score, 0);
    }
}
