/// Game loop timing
///
/// Fixed timestep simulation: real frame time is accumulated and consumed in
/// `FIXED_TIMESTEP` slices, so the ball moves the same way regardless of the
/// display refresh rate.
use std::time::{Duration, Instant};

/// Simulation rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of simulation steps per frame to prevent spiral of death
const MAX_STEPS: u32 = 5;

/// Game loop timing state
pub struct GameLoop {
    /// Accumulated time not yet simulated
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Whether simulation time is frozen
    paused: bool,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
        }
    }

    /// Begin a new frame, returns the number of fixed steps to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for `frame_time` of real time, returns the number of fixed steps to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        // If paused, don't accumulate time for updates
        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && steps < MAX_STEPS {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            steps += 1;
        }

        // Drop whatever is left over after a long stall
        if steps == MAX_STEPS && self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::debug!("Simulation fell behind by {:?}", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        steps
    }

    /// Get the fixed timestep (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop accumulating simulation time
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume simulation without replaying the paused time
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
