use crate::{Ball, Config, GameRng, Side};

/// Check if ball left the arena (scoring)
///
/// Leaving past the left edge credits the right side, leaving past the right
/// edge credits the left side. The ball is re-served on the same call, so at
/// most one side can be credited.
pub fn check_scoring(ball: &mut Ball, config: &Config, rng: &mut GameRng) -> Option<Side> {
    let scorer = if ball.pos.x < 0.0 {
        Side::Right
    } else if ball.pos.x + config.ball_size > config.arena_width {
        Side::Left
    } else {
        return None;
    };

    tracing::debug!(scorer = ?scorer, x = ball.pos.x, "Ball left the arena");
    ball.reset(config, rng);
    Some(scorer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (Config, GameRng) {
        (Config::new(), GameRng::new(12345)) // Fixed seed for deterministic tests
    }

    #[test]
    fn test_right_side_scores_when_ball_exits_left() {
        let (config, mut rng) = setup();
        let mut ball = Ball::new(Vec2::new(-1.0, 300.0), Vec2::new(-5.0, 0.0));

        let scored = check_scoring(&mut ball, &config, &mut rng);

        assert_eq!(scored, Some(Side::Right), "Computer should score");
    }

    #[test]
    fn test_left_side_scores_when_ball_exits_right() {
        let (config, mut rng) = setup();
        let mut ball = Ball::new(Vec2::new(786.0, 300.0), Vec2::new(5.0, 0.0));

        let scored = check_scoring(&mut ball, &config, &mut rng);

        assert_eq!(scored, Some(Side::Left), "Player should score");
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (config, mut rng) = setup();
        let mut ball = Ball::new(Vec2::new(-1.0, 40.0), Vec2::new(-5.0, 7.0));

        check_scoring(&mut ball, &config, &mut rng);

        assert_eq!(
            ball.pos,
            config.serve_position(),
            "Ball should reset to center after scoring"
        );
        assert_eq!(ball.vel.x.abs(), config.ball_speed_x);
        assert_eq!(ball.vel.y.abs(), config.ball_speed_y);
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (config, mut rng) = setup();
        let edges = [
            Vec2::new(0.0, 300.0),
            Vec2::new(config.arena_width - config.ball_size, 300.0),
            Vec2::new(400.0, 300.0),
        ];
        for pos in edges {
            let mut ball = Ball::new(pos, Vec2::new(5.0, 4.0));
            assert_eq!(check_scoring(&mut ball, &config, &mut rng), None);
            assert_eq!(ball.pos, pos, "Ball in bounds is left alone");
        }
    }
}
