use glam::Vec2;
use rand::Rng;

use crate::config::Config;
use crate::resources::GameRng;

/// Which end of the arena a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - represents one side's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge (clamped to arena)
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Paddle vertically centered in the arena
    pub fn centered(side: Side, config: &Config) -> Self {
        let y = config.clamp_paddle_y(config.paddle_y_centered_on(config.arena_height / 2.0));
        Self::new(side, y)
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

/// Tag: paddle follows local keyboard/pointer input
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanControl;

/// Tag: paddle tracks the ball on its own
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoTrack;

/// Ball component - the pong ball
///
/// `pos` is the top-left corner of the ball's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Opening serve: from the center, heading right and down
    pub fn serve(config: &Config) -> Self {
        Self::new(
            config.serve_position(),
            Vec2::new(config.ball_speed_x, config.ball_speed_y),
        )
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.pos.y + config.ball_size / 2.0
    }

    /// Reset ball to center with random direction
    ///
    /// Speed magnitudes are fixed; the sign of each axis is drawn independently.
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.serve_position();

        let vx = if rng.0.gen_bool(0.5) {
            config.ball_speed_x
        } else {
            -config.ball_speed_x
        };
        let vy = if rng.0.gen_bool(0.5) {
            config.ball_speed_y
        } else {
            -config.ball_speed_y
        };
        self.vel = Vec2::new(vx, vy);

        tracing::debug!(vx, vy, "Ball served from center");
    }
}
