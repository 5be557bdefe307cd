use crate::components::Side;

/// Game score tracking
///
/// Counters only ever grow; there is no winning score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Player (left paddle)
    pub right: u32, // Computer (right paddle)
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one point to `side`
    pub fn on_score(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
        tracing::info!(left = self.left, right = self.right, "Score changed");
    }
}

/// Vertical direction for keyboard intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Latest local input, written by event callbacks and read once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    /// Last pointer Y in arena coordinates not yet applied to the paddle
    pub pointer_y: Option<f32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, dir: Direction) {
        self.set(dir, true);
    }

    pub fn release(&mut self, dir: Direction) {
        self.set(dir, false);
    }

    fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
        }
    }

    /// Record a pointer position; a later call before the next frame replaces it
    pub fn point(&mut self, y: f32) {
        self.pointer_y = Some(y);
    }

    pub fn take_pointer(&mut self) -> Option<f32> {
        self.pointer_y.take()
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seeded from the OS (or browser) entropy source
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
///
/// Handed to the host in `FrameReport`, e.g. for hit sounds or diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    /// Side credited with a point this frame
    pub scored: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = false;
        self.scored = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_on_score_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.on_score(Side::Left);
        assert_eq!(score.left, 1);
        score.on_score(Side::Left);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 0, "Other counter untouched");
    }

    #[test]
    fn test_score_on_score_right() {
        let mut score = Score::new();
        for _ in 0..3 {
            score.on_score(Side::Right);
        }
        assert_eq!(score, Score { left: 0, right: 3 });
    }

    #[test]
    fn test_score_has_no_ceiling() {
        let mut score = Score::new();
        for _ in 0..1_000 {
            score.on_score(Side::Left);
        }
        assert_eq!(score.left, 1_000);
    }

    #[test]
    fn test_input_flags_are_independent() {
        let mut input = InputState::new();
        input.press(Direction::Up);
        input.press(Direction::Down);
        assert!(input.up && input.down);

        input.release(Direction::Up);
        assert!(!input.up);
        assert!(input.down, "Releasing up must not clear down");
    }

    #[test]
    fn test_input_pointer_last_write_wins() {
        let mut input = InputState::new();
        input.point(10.0);
        input.point(42.0);
        assert_eq!(input.take_pointer(), Some(42.0));
        assert_eq!(input.take_pointer(), None, "Pointer is consumed once");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_wall = true;
        events.ball_hit_paddle = true;
        events.scored = Some(Side::Right);

        events.clear();

        assert_eq!(events, Events::default());
    }
}
