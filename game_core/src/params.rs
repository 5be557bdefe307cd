/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (replaced by the host surface size when known)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PLAYER_SPEED: f32 = 7.0; // units per frame
    pub const COMPUTER_SPEED: f32 = 5.0; // units per frame

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SPEED_X: f32 = 5.0; // units per frame
    pub const BALL_SPEED_Y: f32 = 4.0; // units per frame

    // Multiplier applied to the hit offset from paddle center
    pub const PADDLE_ANGLE_FACTOR: f32 = 0.2;
}
