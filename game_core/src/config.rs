use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Params, Side};

/// Game configuration, supplied by the host at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub aspect_ratio: f32, // width / height
    pub hardness: f32,     // scales the pursuit paddle's speed cap
    pub serve_speed_divisor: f32,
    pub max_field_width: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::MAX_FIELD_WIDTH,
            aspect_ratio: Params::ASPECT_RATIO,
            hardness: Params::HARDNESS,
            serve_speed_divisor: Params::SERVE_SPEED_DIVISOR,
            max_field_width: Params::MAX_FIELD_WIDTH,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size the field to the space the host has, capped at `max_field_width`
    pub fn fitted(mut self, available_width: f32) -> Self {
        self.field_width = available_width.min(self.max_field_width);
        self
    }

    /// Fail fast on any option that would produce a degenerate field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("field_width", self.field_width),
            ("aspect_ratio", self.aspect_ratio),
            ("hardness", self.hardness),
            ("serve_speed_divisor", self.serve_speed_divisor),
            ("max_field_width", self.max_field_width),
        ];
        for (field, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    pub fn field_height(&self) -> f32 {
        self.field_width / self.aspect_ratio
    }

    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height() / 2.0)
    }

    /// Side length of the square ball
    pub fn ball_size(&self) -> f32 {
        self.field_width / Params::BALL_SIZE_DIVISOR
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(
            self.field_width / Params::PADDLE_WIDTH_DIVISOR,
            self.field_height() / Params::PADDLE_HEIGHT_DIVISOR,
        )
    }

    /// Get X position for paddle center based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        let inset = self.field_width / Params::PADDLE_INSET_DIVISOR;
        match side {
            Side::Left => inset,
            Side::Right => self.field_width - inset,
        }
    }

    /// Vertical speed cap of the non-human paddle
    pub fn pursuit_speed(&self) -> f32 {
        self.field_width / Params::PURSUIT_SPEED_DIVISOR * self.hardness * Params::PURSUIT_SPEED_SCALE
    }

    /// Launch speed of a serve
    pub fn start_speed(&self) -> f32 {
        self.field_width / self.serve_speed_divisor
    }
}
