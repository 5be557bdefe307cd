//! Frame driver and the seams to the host's renderer and scoreboard

use hecs::World;

use crate::systems::{ingest_input, InputEvent};
use crate::{
    create_ball, create_paddle, step, Arena, AutoTrack, Ball, Config, Events, GameRng,
    HumanControl, InputState, Paddle, Score, Side,
};

/// Read-only view of the moving parts, handed to the renderer each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub left_y: f32,
    pub right_y: f32,
    pub ball_x: f32,
    pub ball_y: f32,
}

/// Outcome of one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub snapshot: Snapshot,
    pub scored: Option<Side>,
    pub events: Events,
}

/// Draws a frame; never feeds back into the simulation
pub trait Renderer {
    fn draw(&mut self, arena: &Arena, snapshot: &Snapshot);
}

/// Displays the score; called at start-up and after every point
pub trait Scoreboard {
    fn show(&mut self, score: &Score);
}

/// Player-versus-computer match state
pub struct Simulation {
    world: World,
    config: Config,
    arena: Arena,
    input: InputState,
    score: Score,
    events: Events,
    rng: GameRng,
    frame: u64,
}

impl Simulation {
    /// Left paddle is the human's, right paddle tracks the ball
    pub fn new(config: Config, rng: GameRng) -> Self {
        let mut world = World::new();

        let left = Paddle::centered(Side::Left, &config);
        let right = Paddle::centered(Side::Right, &config);
        create_paddle(&mut world, Side::Left, left.y, HumanControl);
        create_paddle(&mut world, Side::Right, right.y, AutoTrack);

        let ball = Ball::serve(&config);
        create_ball(&mut world, ball.pos, ball.vel);

        tracing::debug!(
            width = config.arena_width,
            height = config.arena_height,
            "Simulation created"
        );

        Self {
            world,
            arena: Arena::new(&config),
            config,
            input: InputState::new(),
            score: Score::new(),
            events: Events::new(),
            rng,
            frame: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Deliver an input edge; takes effect on the next tick
    pub fn ingest(&mut self, event: InputEvent) {
        ingest_input(&mut self.input, event);
    }

    /// Direct access to the entities, for hosts and tests that stage positions
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Current positions of both paddles and the ball
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot {
            left_y: 0.0,
            right_y: 0.0,
            ball_x: 0.0,
            ball_y: 0.0,
        };
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => snapshot.left_y = paddle.y,
                Side::Right => snapshot.right_y = paddle.y,
            }
        }
        if let Some((_e, ball)) = self.world.query::<&Ball>().iter().next() {
            snapshot.ball_x = ball.pos.x;
            snapshot.ball_y = ball.pos.y;
        }
        snapshot
    }

    /// Advance paddles, ball and score by one frame
    pub fn tick(&mut self) -> FrameReport {
        let scored = step(
            &mut self.world,
            &self.config,
            &mut self.input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        self.frame += 1;

        FrameReport {
            frame: self.frame,
            snapshot: self.snapshot(),
            scored,
            events: self.events,
        }
    }

    /// Show the opening score
    pub fn start(&self, scoreboard: &mut impl Scoreboard) {
        scoreboard.show(&self.score);
    }

    /// One full frame: tick, draw, and refresh the scoreboard after a point
    pub fn frame(
        &mut self,
        renderer: &mut impl Renderer,
        scoreboard: &mut impl Scoreboard,
    ) -> FrameReport {
        let report = self.tick();
        renderer.draw(&self.arena, &report.snapshot);
        if report.scored.is_some() {
            scoreboard.show(&self.score);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<Snapshot>,
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self, _arena: &Arena, snapshot: &Snapshot) {
            self.frames.push(*snapshot);
        }
    }

    #[derive(Default)]
    struct RecordingScoreboard {
        shown: Vec<Score>,
    }

    impl Scoreboard for RecordingScoreboard {
        fn show(&mut self, score: &Score) {
            self.shown.push(*score);
        }
    }

    #[test]
    fn test_initial_layout() {
        let sim = Simulation::new(Config::new(), GameRng::default());
        let snapshot = sim.snapshot();
        assert_eq!(snapshot.left_y, 250.0);
        assert_eq!(snapshot.right_y, 250.0);
        assert_eq!(snapshot.ball_x, 392.5);
        assert_eq!(snapshot.ball_y, 292.5);
        assert_eq!(sim.score(), Score::new());
    }

    #[test]
    fn test_tick_order_paddles_then_ball() {
        let mut sim = Simulation::new(Config::new(), GameRng::default());
        sim.ingest(InputEvent::Press(Direction::Up));

        let report = sim.tick();

        assert_eq!(report.frame, 1);
        assert_eq!(report.snapshot.left_y, 243.0, "Human paddle moved up");
        // Computer tracks the ball's Y from before it moved: 292.5 + 7.5 - 50 = 250
        assert_eq!(report.snapshot.right_y, 250.0);
        assert_eq!(report.snapshot.ball_x, 397.5);
        assert_eq!(report.snapshot.ball_y, 296.5);
        assert_eq!(report.scored, None);
        assert_eq!(report.events, Events::new(), "Open court, nothing hit");
    }

    #[test]
    fn test_report_carries_frame_events() {
        let mut sim = Simulation::new(Config::new(), GameRng::default());
        for (_e, ball) in sim.world_mut().query_mut::<&mut Ball>() {
            ball.pos = glam::Vec2::new(400.0, 1.0);
            ball.vel = glam::Vec2::new(5.0, -4.0);
        }

        let report = sim.tick();
        assert!(report.events.ball_hit_wall);
        assert!(!report.events.ball_hit_paddle);

        let report = sim.tick();
        assert!(!report.events.ball_hit_wall, "Events are per frame");
    }

    #[test]
    fn test_frame_draws_every_tick_and_scores_on_point() {
        let mut sim = Simulation::new(Config::new(), GameRng::default());
        let mut renderer = RecordingRenderer::default();
        let mut scoreboard = RecordingScoreboard::default();

        sim.start(&mut scoreboard);
        assert_eq!(scoreboard.shown, vec![Score::new()]);

        // Park the ball just past the right edge, clear of the computer paddle
        for (_e, ball) in sim.world_mut().query_mut::<&mut Ball>() {
            ball.pos = glam::Vec2::new(790.0, 10.0);
            ball.vel = glam::Vec2::new(5.0, 0.0);
        }

        let report = sim.frame(&mut renderer, &mut scoreboard);

        assert_eq!(report.scored, Some(Side::Left));
        assert_eq!(renderer.frames.len(), 1);
        assert_eq!(scoreboard.shown.len(), 2);
        assert_eq!(scoreboard.shown[1], Score { left: 1, right: 0 });

        sim.frame(&mut renderer, &mut scoreboard);
        assert_eq!(renderer.frames.len(), 2);
        assert_eq!(scoreboard.shown.len(), 2, "No point, no scoreboard update");
    }
}
