use crate::{AutoTrack, Ball, Config, HumanControl, InputState, Paddle};
use hecs::World;

/// Move the human paddle by one frame of keyboard intent
///
/// Up and down are applied one after the other, so holding both keys nets zero.
pub fn advance_human(paddle: &mut Paddle, input: &InputState, config: &Config) {
    if input.up {
        paddle.y -= config.player_speed;
    }
    if input.down {
        paddle.y += config.player_speed;
    }
    paddle.y = config.clamp_paddle_y(paddle.y);
}

/// Center the human paddle on the pointer
pub fn follow_pointer(paddle: &mut Paddle, pointer_y: f32, config: &Config) {
    paddle.y = config.clamp_paddle_y(config.paddle_y_centered_on(pointer_y));
}

/// Move the computer paddle toward the ball's center, never past it
pub fn advance_auto(paddle: &mut Paddle, ball_y: f32, config: &Config) {
    let target = config.paddle_y_centered_on(ball_y + config.ball_size / 2.0);
    let speed = config.computer_speed;

    if paddle.y < target {
        paddle.y = (paddle.y + speed).min(target);
    } else if paddle.y > target {
        paddle.y = (paddle.y - speed).max(target);
    }
    paddle.y = config.clamp_paddle_y(paddle.y);
}

/// Apply paddle movement for this frame
///
/// The human paddle consumes a pending pointer position first, then keyboard
/// flags. The computer paddle tracks the ball's current Y.
pub fn move_paddles(world: &mut World, input: &mut InputState, config: &Config) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    let pointer_y = input.take_pointer();
    for (_entity, (paddle, _human)) in world.query_mut::<(&mut Paddle, &HumanControl)>() {
        if let Some(y) = pointer_y {
            follow_pointer(paddle, y, config);
        }
        advance_human(paddle, input, config);
    }

    if let Some(ball_y) = ball_y {
        for (_entity, (paddle, _auto)) in world.query_mut::<(&mut Paddle, &AutoTrack)>() {
            advance_auto(paddle, ball_y, config);
        }
    }
}

/// Move ball by one frame of velocity
pub fn move_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
}
