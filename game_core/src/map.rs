use glam::Vec2;

use crate::components::Side;
use crate::config::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self::new(min, min + size)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap of the vertical extents (touching edges do not count)
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.max.y > other.min.y && self.min.y < other.max.y
    }
}

/// The playfield as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    config: Config,
}

impl Arena {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.arena_width,
            height: config.arena_height,
            config: *config,
        }
    }

    /// X of the center divider
    pub fn divider_x(&self) -> f32 {
        self.width / 2.0
    }

    pub fn paddle_rect(&self, side: Side, y: f32) -> Aabb {
        self.config.paddle_rect(side, y)
    }

    pub fn ball_rect(&self, pos: Vec2) -> Aabb {
        self.config.ball_rect(pos)
    }

    pub fn ball_radius(&self) -> f32 {
        self.config.ball_size / 2.0
    }
}
