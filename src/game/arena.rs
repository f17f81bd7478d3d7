// Arena dimensions and tuning

use crate::engine::settings::GameSettings;

/// Fixed geometry of the playfield
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 32.0;
    pub const ARENA_HEIGHT: f32 = 24.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 0.8;
    pub const PADDLE_HEIGHT: f32 = 4.0;
    /// Distance from the side wall to the paddle centre
    pub const PADDLE_MARGIN: f32 = 1.5;

    // Ball
    pub const BALL_RADIUS: f32 = 0.5;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply speed on paddle hit
    pub const MAX_BOUNCE_ANGLE: f32 = 0.785; // ~45 degrees at the paddle tips
}

/// Which paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Player index (0 = left, 1 = right)
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Sign of the x direction pointing away from this side's wall
    pub fn outward(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Player 1",
            Side::Right => "Player 2",
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub winning_score: u8,
    pub serve_delay: f32,
}

impl From<&GameSettings> for ArenaConfig {
    fn from(game: &GameSettings) -> Self {
        Self {
            width: Params::ARENA_WIDTH,
            height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: game.paddle_speed,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: game.ball_speed,
            ball_speed_max: game.ball_speed_max,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            winning_score: game.winning_score,
            serve_delay: game.serve_delay,
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::from(&GameSettings::default())
    }
}

impl ArenaConfig {
    /// X position of a paddle centre
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => Params::PADDLE_MARGIN,
            Side::Right => self.width - Params::PADDLE_MARGIN,
        }
    }

    /// Clamp paddle Y to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.height - half_height)
    }

    pub fn center_y(&self) -> f32 {
        self.height / 2.0
    }
}
