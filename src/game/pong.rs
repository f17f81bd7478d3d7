// Match state: serving, rally, scoring and game over

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::arena::{ArenaConfig, Side};
use super::ball::Ball;
use super::collision::{bounce_off_paddle, bounce_off_walls};
use super::paddle::Paddle;
use super::score::Score;

/// Where the match is
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Ball waits in the centre until the timer runs out
    Serving { timer: f32, toward: Side },
    Playing,
    GameOver { winner: Side },
}

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEvents {
    pub wall_hit: bool,
    pub paddle_hit: Option<Side>,
    pub scored: Option<Side>,
    pub winner: Option<Side>,
}

pub struct PongGame {
    config: ArenaConfig,
    paddles: [Paddle; 2],
    ball: Ball,
    score: Score,
    phase: Phase,
    paused: bool,
    rng: StdRng,
}

impl PongGame {
    /// Start a match with an entropy-seeded RNG
    pub fn new(config: ArenaConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Start a match with a fixed seed (deterministic serves)
    pub fn with_seed(config: ArenaConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: ArenaConfig, mut rng: StdRng) -> Self {
        let toward = if rng.gen_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        };

        Self {
            paddles: [
                Paddle::new(Side::Left, &config),
                Paddle::new(Side::Right, &config),
            ],
            ball: Ball::centered(&config),
            score: Score::new(),
            phase: Phase::Serving {
                timer: config.serve_delay,
                toward,
            },
            paused: false,
            rng,
            config,
        }
    }

    /// Advance the match by `dt` seconds. `intents` are per side, -1.0 up .. 1.0 down.
    pub fn step(&mut self, dt: f32, intents: [f32; 2]) -> FrameEvents {
        let mut events = FrameEvents::default();
        if self.paused || self.is_over() {
            return events;
        }

        for (paddle, intent) in self.paddles.iter_mut().zip(intents) {
            paddle.update(intent, dt, &self.config);
        }

        match self.phase {
            Phase::Serving { timer, toward } => {
                let timer = timer - dt;
                if timer <= 0.0 {
                    self.ball.serve(toward, &self.config, &mut self.rng);
                    self.phase = Phase::Playing;
                } else {
                    self.phase = Phase::Serving { timer, toward };
                }
            }
            Phase::Playing => self.rally(dt, &mut events),
            Phase::GameOver { .. } => {}
        }

        events
    }

    fn rally(&mut self, dt: f32, events: &mut FrameEvents) {
        self.ball.advance(dt);

        events.wall_hit = bounce_off_walls(&mut self.ball, &self.config);
        for paddle in &self.paddles {
            if bounce_off_paddle(&mut self.ball, paddle, &self.config) {
                events.paddle_hit = Some(paddle.side);
                break;
            }
        }

        let scorer = if self.ball.pos.x < 0.0 {
            Some(Side::Right)
        } else if self.ball.pos.x > self.config.width {
            Some(Side::Left)
        } else {
            None
        };

        if let Some(scorer) = scorer {
            self.score.increment(scorer);
            events.scored = Some(scorer);
            log::info!(
                "{} scores ({} : {})",
                scorer.label(),
                self.score.left,
                self.score.right
            );

            self.ball = Ball::centered(&self.config);
            if let Some(winner) = self.score.winner(self.config.winning_score) {
                log::info!("{} wins", winner.label());
                events.winner = Some(winner);
                self.phase = Phase::GameOver { winner };
            } else {
                self.phase = Phase::Serving {
                    timer: self.config.serve_delay,
                    toward: scorer.opposite(),
                };
            }
        }
    }

    /// Reset score and positions and serve again
    pub fn restart(&mut self) {
        self.score.reset();
        for paddle in &mut self.paddles {
            paddle.recenter(&self.config);
        }
        self.ball = Ball::centered(&self.config);
        let toward = if self.rng.gen_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        };
        self.phase = Phase::Serving {
            timer: self.config.serve_delay,
            toward,
        };
        self.paused = false;
        log::info!("New match, first to {}", self.config.winning_score);
    }

    /// Swap tuning values. A score that already meets a lowered target ends the match.
    pub fn set_config(&mut self, config: ArenaConfig) {
        self.config = config;
        if let Some(winner) = self.score.winner(self.config.winning_score) {
            if !self.is_over() {
                self.phase = Phase::GameOver { winner };
            }
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.is_over() {
            return;
        }
        self.paused = !self.paused;
        log::info!("Game {}", if self.paused { "paused" } else { "resumed" });
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// One-line summary for the window title
    pub fn status_line(&self) -> String {
        let score = format!("{} : {}", self.score.left, self.score.right);
        match self.phase {
            Phase::GameOver { winner } => {
                format!("{}  |  {} wins, press Confirm", score, winner.label())
            }
            _ if self.paused => format!("{}  |  Paused", score),
            Phase::Serving { .. } => format!("{}  |  Get ready", score),
            Phase::Playing => score,
        }
    }

    #[cfg(test)]
    pub(crate) fn force_game_over(&mut self, winner: Side) {
        self.score.increment(winner);
        self.phase = Phase::GameOver { winner };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::arena::Params;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn game() -> PongGame {
        let config = ArenaConfig {
            serve_delay: 0.5,
            winning_score: 2,
            ..ArenaConfig::default()
        };
        PongGame::with_seed(config, 12345)
    }

    fn run_until_playing(game: &mut PongGame) {
        for _ in 0..120 {
            if game.phase() == Phase::Playing {
                return;
            }
            game.step(DT, [0.0, 0.0]);
        }
        panic!("Serve never happened");
    }

    #[test]
    fn test_starts_serving() {
        let game = game();
        assert!(matches!(game.phase(), Phase::Serving { .. }));
        assert_eq!(game.ball().vel, Vec2::ZERO);
    }

    #[test]
    fn test_serve_after_delay() {
        let mut game = game();
        game.step(0.25, [0.0, 0.0]);
        assert!(matches!(game.phase(), Phase::Serving { .. }));

        game.step(0.3, [0.0, 0.0]);
        assert_eq!(game.phase(), Phase::Playing);
        assert!(game.ball().speed() > 0.0);
    }

    #[test]
    fn test_paddles_move_while_serving() {
        let mut game = game();
        let start = game.paddle(Side::Left).y;
        game.step(DT, [-1.0, 1.0]);
        assert!(game.paddle(Side::Left).y < start);
        assert!(game.paddle(Side::Right).y > start);
    }

    #[test]
    fn test_right_scores_when_ball_exits_left() {
        let mut game = game();
        run_until_playing(&mut game);
        // Left paddle parked at the bottom, ball sneaks past at the top
        game.paddles[0].y = game.config.height - Params::PADDLE_HEIGHT / 2.0;
        game.ball = Ball::new(Vec2::new(0.1, 2.0), Vec2::new(-12.0, 0.0));

        let events = game.step(DT, [0.0, 0.0]);
        assert_eq!(events.scored, Some(Side::Right));
        assert_eq!(game.score().right, 1);
        assert_eq!(
            game.phase(),
            Phase::Serving {
                timer: 0.5,
                toward: Side::Left
            }
        );
        assert_eq!(game.ball().vel, Vec2::ZERO);
    }

    #[test]
    fn test_left_paddle_returns_ball() {
        let mut game = game();
        run_until_playing(&mut game);
        let y = game.paddle(Side::Left).y;
        game.ball = Ball::new(Vec2::new(2.2, y), Vec2::new(-12.0, 0.0));

        let events = game.step(DT, [0.0, 0.0]);
        assert_eq!(events.paddle_hit, Some(Side::Left));
        assert!(game.ball().vel.x > 0.0);
    }

    #[test]
    fn test_game_over_and_restart() {
        let mut game = game();
        run_until_playing(&mut game);

        for expected in 1..=2u8 {
            game.phase = Phase::Playing;
            game.paddles[1].y = Params::PADDLE_HEIGHT / 2.0;
            game.ball = Ball::new(Vec2::new(31.9, 20.0), Vec2::new(12.0, 0.0));
            let events = game.step(DT, [0.0, 0.0]);
            assert_eq!(events.scored, Some(Side::Left));
            assert_eq!(game.score().left, expected);
        }

        assert_eq!(game.phase(), Phase::GameOver { winner: Side::Left });
        assert!(game.is_over());
        assert!(game.status_line().contains("Player 1 wins"));

        // Nothing moves once the match is over
        let y = game.paddle(Side::Left).y;
        game.step(DT, [1.0, 1.0]);
        assert_eq!(game.paddle(Side::Left).y, y);

        game.restart();
        assert_eq!(game.score(), Score::new());
        assert!(matches!(game.phase(), Phase::Serving { .. }));
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut game = game();
        game.toggle_pause();
        assert!(game.is_paused());
        assert!(game.status_line().ends_with("Paused"));

        let y = game.paddle(Side::Left).y;
        game.step(1.0, [1.0, 1.0]);
        assert_eq!(game.paddle(Side::Left).y, y);
        assert!(matches!(game.phase(), Phase::Serving { .. }));

        game.toggle_pause();
        assert!(!game.is_paused());
    }

    #[test]
    fn test_lowering_target_can_end_match() {
        let mut game = game();
        game.score.increment(Side::Right);
        let config = ArenaConfig {
            winning_score: 1,
            ..game.config().clone()
        };
        game.set_config(config);
        assert_eq!(game.phase(), Phase::GameOver { winner: Side::Right });
    }

    #[test]
    fn test_seeded_games_are_deterministic() {
        let mut a = game();
        let mut b = game();
        run_until_playing(&mut a);
        run_until_playing(&mut b);
        assert_eq!(a.ball().vel, b.ball().vel);
    }

    #[test]
    fn test_long_rally_stays_in_bounds() {
        let mut game = game();
        let config = game.config().clone();
        for _ in 0..3000 {
            let events = game.step(DT, [0.0, 0.0]);
            if game.is_over() {
                break;
            }
            if events.scored.is_none() {
                let ball = game.ball();
                assert!(ball.pos.y >= 0.0 && ball.pos.y <= config.height);
            }
        }
    }
}
