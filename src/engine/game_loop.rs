// Fixed-timestep scheduling
//
// Gameplay and physics advance at a constant 60 Hz regardless of how fast
// frames are presented; leftover frame time carries over in an accumulator.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Seconds per fixed gameplay step
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const STEP_DURATION: Duration = Duration::from_micros(16_667);

/// Upper bound on catch-up steps in a single frame; a long stall (window
/// drag, debugger pause) must not snowball into a burst of updates
const MAX_STEPS_PER_FRAME: u32 = 5;

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

/// Tracks frame timing and decides how many fixed steps each frame runs
pub struct GameLoop {
    /// Unspent frame time waiting to become fixed steps
    accumulator: Duration,
    last_frame: Instant,
    paused: bool,

    /// Recent frame durations, oldest first
    frame_times: VecDeque<Duration>,
    frame_count: u64,
    step_count: u64,
    current_fps: f32,

    /// Duration of the last frame in seconds, also reported while paused
    frame_delta_time: f32,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame: Instant::now(),
            paused: false,
            frame_times: VecDeque::with_capacity(FPS_WINDOW),
            frame_count: 0,
            step_count: 0,
            current_fps: 0.0,
            frame_delta_time: 0.0,
        }
    }

    /// Start a frame; returns how many fixed steps to run for it
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;
        self.frame_delta_time = frame_time.as_secs_f32();

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > FPS_WINDOW {
            self.frame_times.pop_front();
        }
        if self.frame_count % 10 == 0 {
            self.refresh_fps();
        }

        // Paused time never reaches the accumulator
        if self.paused {
            return 0;
        }
        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= STEP_DURATION && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= STEP_DURATION;
            steps += 1;
        }

        self.step_count += steps as u64;
        steps
    }

    /// Seconds advanced by each fixed step
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Seconds the last frame took, whether or not the game is paused
    pub fn frame_delta_time(&self) -> f32 {
        self.frame_delta_time
    }

    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Total fixed steps executed since startup
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    /// Resume; time accumulated before the pause is discarded so gameplay
    /// picks up where it stopped instead of fast-forwarding
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.accumulator = Duration::ZERO;
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    fn refresh_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }
        let total: Duration = self.frame_times.iter().sum();
        let avg = total.as_secs_f32() / self.frame_times.len() as f32;
        self.current_fps = if avg > 0.0 { 1.0 / avg } else { 0.0 };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
