// Ball state and serving

use glam::Vec2;
use rand::Rng;

use super::arena::{ArenaConfig, Side};

/// Largest serve angle off the horizontal (radians)
const MAX_SERVE_ANGLE: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// A motionless ball in the middle of the arena
    pub fn centered(config: &ArenaConfig) -> Self {
        Self::new(Vec2::new(config.width / 2.0, config.height / 2.0), Vec2::ZERO)
    }

    /// Launch from the centre toward `toward` at a random shallow angle
    pub fn serve<R: Rng>(&mut self, toward: Side, config: &ArenaConfig, rng: &mut R) {
        let angle = rng.gen_range(-MAX_SERVE_ANGLE..=MAX_SERVE_ANGLE);
        // Serving toward the left paddle means travelling in -x
        let dir = -toward.outward();

        self.pos = Vec2::new(config.width / 2.0, config.height / 2.0);
        self.vel = Vec2::new(dir * angle.cos(), angle.sin()) * config.ball_speed;
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Whether the ball travels toward the given paddle
    pub fn is_moving_toward(&self, side: Side) -> bool {
        self.vel.x * side.outward() < 0.0
    }
}
