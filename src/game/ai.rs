// Computer-controlled paddle
//
// Strategy:
// 1. If the ball is coming toward us and close enough to react to, predict
//    where it crosses our paddle line (folding in wall bounces).
// 2. Otherwise drift back to the centre to cover the most ground.
// 3. Skill widens or narrows the dead band and scales the paddle speed.

use crate::core::math::{fold_into_range, lerp};

use super::arena::{ArenaConfig, Side};
use super::ball::Ball;
use super::paddle::Paddle;

#[derive(Debug, Clone, Copy)]
pub struct AiController {
    side: Side,
    /// 0.0 (sleepy) to 1.0 (sharp)
    skill: f32,
}

impl AiController {
    pub fn new(side: Side, skill: f32) -> Self {
        Self {
            side,
            skill: skill.clamp(0.0, 1.0),
        }
    }

    /// Paddle intent for this step (-1.0 up .. 1.0 down)
    pub fn intent(&self, ball: &Ball, paddle: &Paddle, config: &ArenaConfig) -> f32 {
        let target = self.target_y(ball, config);
        let diff = target - paddle.y;
        let dead_band = lerp(1.2, 0.2, self.skill);

        if diff.abs() <= dead_band {
            0.0
        } else {
            diff.signum() * lerp(0.55, 1.0, self.skill)
        }
    }

    /// Where the paddle wants to be
    fn target_y(&self, ball: &Ball, config: &ArenaConfig) -> f32 {
        let paddle_x = config.paddle_x(self.side);
        let distance = (paddle_x - ball.pos.x).abs();
        let reaction_range = lerp(0.45, 1.0, self.skill) * config.width;

        if !ball.is_moving_toward(self.side) || distance > reaction_range {
            return config.center_y();
        }

        let time_to_reach = distance / ball.vel.x.abs().max(0.1);
        let predicted = ball.pos.y + ball.vel.y * time_to_reach;
        fold_into_range(
            predicted,
            config.ball_radius,
            config.height - config.ball_radius,
        )
    }
}
