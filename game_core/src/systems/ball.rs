use hecs::World;

use crate::systems::{check_collisions, check_scoring, move_ball};
use crate::{Ball, Config, Events, GameRng, Paddle, Side};

/// Advance the ball by one frame
///
/// Order: integrate, walls, left paddle, right paddle, scoring. Returns the
/// side credited with a point, if the ball left the arena.
pub fn step_ball(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) -> Option<Side> {
    move_ball(ball);
    check_collisions(ball, left, right, config, events);

    let scored = check_scoring(ball, config, rng);
    events.scored = scored;
    scored
}

/// Run `step_ball` against the ball and paddle entities in `world`
///
/// Does nothing unless the world holds a ball and one paddle per side.
pub fn simulate_ball(
    world: &mut World,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) -> Option<Side> {
    let (left, right) = {
        let mut left = None;
        let mut right = None;
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => left = Some(*paddle),
                Side::Right => right = Some(*paddle),
            }
        }
        (left?, right?)
    };

    let (_entity, ball) = world.query_mut::<&mut Ball>().into_iter().next()?;
    step_ball(ball, &left, &right, config, rng, events)
}
