// Ball collisions with walls and paddles

use glam::Vec2;

use super::arena::{ArenaConfig, Params};
use super::ball::Ball;
use super::paddle::Paddle;

/// Share of the paddle's own velocity passed on to the ball
const PADDLE_INFLUENCE: f32 = 0.3;

/// Bounce the ball off the top/bottom walls. Returns true on a hit.
pub fn bounce_off_walls(ball: &mut Ball, config: &ArenaConfig) -> bool {
    let r = config.ball_radius;

    if ball.pos.y - r <= 0.0 && ball.vel.y < 0.0 {
        ball.pos.y = r;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.pos.y + r >= config.height && ball.vel.y > 0.0 {
        ball.pos.y = config.height - r;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Bounce the ball off a paddle it is moving toward. Returns true on a hit.
///
/// The outgoing angle depends on where the ball met the paddle (centre is
/// flat, the tips reach `MAX_BOUNCE_ANGLE`) plus a share of the paddle's
/// motion. Speed grows by `ball_speed_increase` up to `ball_speed_max`.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &ArenaConfig) -> bool {
    if !ball.is_moving_toward(paddle.side) {
        return false;
    }

    let paddle_x = paddle.x(config);
    let half_width = config.paddle_width / 2.0;
    let half_height = config.paddle_height / 2.0;
    let r = config.ball_radius;

    // Simple AABB overlap
    let dx = (ball.pos.x - paddle_x).abs();
    let dy = (ball.pos.y - paddle.y).abs();
    if dx >= half_width + r || dy >= half_height + r {
        return false;
    }

    let hit = ((ball.pos.y - paddle.y) / half_height).clamp(-1.0, 1.0);
    let speed = (ball.speed() * config.ball_speed_increase).min(config.ball_speed_max);
    let angle = hit * Params::MAX_BOUNCE_ANGLE;
    let outward = paddle.side.outward();

    let direction = Vec2::new(outward * angle.cos(), angle.sin()) * speed
        + Vec2::new(0.0, paddle.velocity * PADDLE_INFLUENCE);
    ball.vel = direction.normalize_or_zero() * speed;

    // Keep the ball clearly leaving the paddle
    if ball.vel.x * outward <= 0.0 {
        ball.vel = Vec2::new(outward * speed, 0.0);
    }

    // Push out of the paddle face
    ball.pos.x = paddle_x + outward * (half_width + r);
    true
}
