pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation
///
/// Velocities are per frame: the host calls this once per display refresh.
/// Returns the side credited with a point this frame, if any.
pub fn step(
    world: &mut World,
    config: &Config,
    input: &mut InputState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    // Clear events at start of frame
    events.clear();

    // 1. Move paddles (human from input, computer toward the ball)
    move_paddles(world, input, config);

    // 2. Move ball, bounce, detect exits
    let scored = simulate_ball(world, config, rng, events);

    // 3. Credit the point
    if let Some(side) = scored {
        score.on_score(side);
    }

    scored
}

/// Helper to create a paddle entity with its controller tag
pub fn create_paddle<C: hecs::Component>(
    world: &mut World,
    side: Side,
    y: f32,
    control: C,
) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), control))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
