use crate::{Ball, Config, Events, Paddle, Side};

/// Reflect the ball off the top and bottom walls
///
/// Returns true if the ball touched a wall. Speed is preserved.
pub fn bounce_walls(ball: &mut Ball, config: &Config) -> bool {
    let mut hit = false;

    if ball.pos.y < 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        hit = true;
    }
    if ball.pos.y + config.ball_size > config.arena_height {
        ball.pos.y = config.arena_height - config.ball_size;
        ball.vel.y = -ball.vel.y;
        hit = true;
    }

    hit
}

/// Bounce the ball off `paddle` if they overlap
///
/// On a hit the ball is pushed flush with the paddle face, its horizontal
/// velocity is reversed and its vertical velocity is replaced by the hit
/// offset from the paddle center scaled by the angle factor.
pub fn bounce_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    let ball_rect = config.ball_rect(ball.pos);
    let paddle_rect = config.paddle_rect(paddle.side, paddle.y);

    let in_depth = match paddle.side {
        Side::Left => ball_rect.min.x < paddle_rect.max.x,
        Side::Right => ball_rect.max.x > paddle_rect.min.x,
    };

    if !(in_depth && ball_rect.overlaps_y(&paddle_rect)) {
        return false;
    }

    ball.pos.x = match paddle.side {
        Side::Left => paddle_rect.max.x,
        Side::Right => paddle_rect.min.x - config.ball_size,
    };
    ball.vel.x = -ball.vel.x;

    let offset = ball.center_y(config) - paddle.center_y(config);
    ball.vel.y = offset * config.paddle_angle_factor;

    tracing::debug!(side = ?paddle.side, offset, "Ball hit paddle");
    true
}

/// Check ball collisions with walls, then the left and right paddles
pub fn check_collisions(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    config: &Config,
    events: &mut Events,
) {
    if bounce_walls(ball, config) {
        events.ball_hit_wall = true;
    }

    // Both paddles are tested every frame
    if bounce_paddle(ball, left, config) {
        events.ball_hit_paddle = true;
    }
    if bounce_paddle(ball, right, config) {
        events.ball_hit_paddle = true;
    }
}
