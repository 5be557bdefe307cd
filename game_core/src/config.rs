use glam::Vec2;

use crate::components::Side;
use crate::map::Aabb;
use crate::params::Params;

/// Game configuration
///
/// Built once at start-up and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_speed: f32,
    pub computer_speed: f32,
    pub ball_size: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub paddle_angle_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            player_speed: Params::PLAYER_SPEED,
            computer_speed: Params::COMPUTER_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            paddle_angle_factor: Params::PADDLE_ANGLE_FACTOR,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning with the arena sized to the drawing surface
    pub fn with_arena(width: f32, height: f32) -> Self {
        Self {
            arena_width: width,
            arena_height: height,
            ..Self::default()
        }
    }

    /// Get the X of the paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.arena_width - self.paddle_width,
        }
    }

    /// Paddle bounds with its top edge at `y`
    pub fn paddle_rect(&self, side: Side, y: f32) -> Aabb {
        Aabb::from_min_size(
            Vec2::new(self.paddle_x(side), y),
            Vec2::new(self.paddle_width, self.paddle_height),
        )
    }

    /// Ball bounds with its top-left corner at `pos`
    pub fn ball_rect(&self, pos: Vec2) -> Aabb {
        Aabb::from_min_size(pos, Vec2::splat(self.ball_size))
    }

    /// Highest allowed paddle Y (top edge)
    pub fn paddle_max_y(&self) -> f32 {
        (self.arena_height - self.paddle_height).max(0.0)
    }

    /// Clamp paddle Y to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.paddle_max_y())
    }

    /// Paddle Y that centers the paddle on `center_y`
    pub fn paddle_y_centered_on(&self, center_y: f32) -> f32 {
        center_y - self.paddle_height / 2.0
    }

    /// Top-left corner of the ball when served from the center
    pub fn serve_position(&self) -> Vec2 {
        Vec2::new(
            self.arena_width / 2.0 - self.ball_size / 2.0,
            self.arena_height / 2.0 - self.ball_size / 2.0,
        )
    }
}
