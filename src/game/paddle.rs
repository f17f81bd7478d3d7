// Paddles

use super::arena::{ArenaConfig, Side};

#[derive(Debug, Clone)]
pub struct Paddle {
    pub side: Side,
    /// Centre y
    pub y: f32,
    /// Vertical velocity during the last step (positive = down)
    pub velocity: f32,
}

impl Paddle {
    /// Create a paddle centred vertically
    pub fn new(side: Side, config: &ArenaConfig) -> Self {
        Self {
            side,
            y: config.center_y(),
            velocity: 0.0,
        }
    }

    /// Move by `intent` (-1.0 up .. 1.0 down) for one step
    pub fn update(&mut self, intent: f32, dt: f32, config: &ArenaConfig) {
        let intent = intent.clamp(-1.0, 1.0);
        let previous = self.y;
        self.y = config.clamp_paddle_y(self.y + intent * config.paddle_speed * dt);
        self.velocity = if dt > 0.0 {
            (self.y - previous) / dt
        } else {
            0.0
        };
    }

    pub fn x(&self, config: &ArenaConfig) -> f32 {
        config.paddle_x(self.side)
    }

    pub fn recenter(&mut self, config: &ArenaConfig) {
        self.y = config.center_y();
        self.velocity = 0.0;
    }
}
