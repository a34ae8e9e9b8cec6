//! Time management utilities
//!
//! [`AnimationClock`] is the scene's notion of time: a scalar `t` advanced by a
//! fixed step once per presented frame. It is deliberately frame-driven rather than
//! wall-clock driven so motion is identical regardless of frame rate.
//! [`FrameTimer`] reports the wall-clock frame rate for diagnostics only.

use std::time::Instant;

/// Default per-frame increment of `t`
pub const DEFAULT_SPEED: f32 = 0.1;

/// Smallest speed the controls will step down to
pub const MIN_SPEED: f32 = 0.01;

/// Amount a single speed-up or slow-down request changes the speed
pub const SPEED_STEP: f32 = 0.05;

/// `t` is wrapped back by this amount once it exceeds it
pub const WRAP_PERIOD: f32 = 360.0;

/// Frame-driven animation clock
///
/// # Wrapping
/// After each update, a value of `t` above [`WRAP_PERIOD`] has the period
/// subtracted once. This is a subtraction, not a modulo, so it only bounds growth
/// for positive speeds; the speed controls never let the speed go below
/// [`MIN_SPEED`], so negative speeds cannot arise through them.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClock {
    time: f32,
    speed: f32,
    animating: bool,
    frame_count: u64,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationClock {
    /// Clock at `t = 0`, default speed, animating
    pub fn new() -> Self {
        Self {
            time: 0.0,
            speed: DEFAULT_SPEED,
            animating: true,
            frame_count: 0,
        }
    }

    /// Set the per-frame speed
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Start from a given `t`
    pub fn starting_at(mut self, time: f32) -> Self {
        self.time = time;
        self
    }

    /// Start paused or running
    pub fn with_animating(mut self, animating: bool) -> Self {
        self.animating = animating;
        self
    }

    /// Jump to a given `t`
    pub fn set_time(&mut self, time: f32) {
        self.time = time;
    }

    /// Current animation time
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Current per-frame increment
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Whether `t` advances on update
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Number of updates performed
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Advance one frame
    pub fn update(&mut self) {
        if self.animating {
            self.time += self.speed;
        }
        if self.time > WRAP_PERIOD {
            self.time -= WRAP_PERIOD;
        }
        self.frame_count += 1;
    }

    /// Flip between paused and running, returning the new state
    pub fn toggle_animation(&mut self) -> bool {
        self.animating = !self.animating;
        log::info!("Animation {}", if self.animating { "resumed" } else { "paused" });
        self.animating
    }

    /// Increase speed by [`SPEED_STEP`]
    pub fn speed_up(&mut self) -> f32 {
        self.speed += SPEED_STEP;
        log::info!("Animation speed increased to {:.2}", self.speed);
        self.speed
    }

    /// Decrease speed by [`SPEED_STEP`], never below [`MIN_SPEED`]
    pub fn slow_down(&mut self) -> f32 {
        self.speed = (self.speed - SPEED_STEP).max(MIN_SPEED);
        log::info!("Animation speed decreased to {:.2}", self.speed);
        self.speed
    }
}

/// Wall-clock frame rate over a whole run
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    started: Instant,
    frames: u64,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Start measuring now
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            frames: 0,
        }
    }

    /// Count one frame
    pub fn tick(&mut self) {
        self.frames += 1;
    }

    /// Frames counted so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames per wall-clock second since creation, zero before any time has passed
    pub fn average_fps(&self) -> f32 {
        let elapsed = self.started.elapsed().as_secs_f32();
        if elapsed > 0.0 {
            self.frames as f32 / elapsed
        } else {
            0.0
        }
    }
}
