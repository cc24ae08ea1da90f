//! Frame-driven playhead for timed reveals.
//!
//! The timeline never reads a clock; it only moves when a frame hands it a
//! timestamp, so playback stays aligned with repaints.

/// Gaps longer than this are treated as a stalled tab rather than elapsed
/// animation time.
pub const LAG_THRESHOLD_MS: f64 = 500.0;
/// Step used in place of a stalled gap.
pub const LAG_STEP_MS: f64 = 33.0;

/// Clamp a raw frame delta the way a stalled tab should be handled.
pub fn smooth_delta(delta_ms: f64) -> f64 {
    if delta_ms.is_nan() || delta_ms <= 0.0 {
        0.0
    } else if delta_ms > LAG_THRESHOLD_MS {
        LAG_STEP_MS
    } else {
        delta_ms
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Idle,
    Forward,
    Reverse,
}

/// Boundaries crossed during one [`Timeline::advance`] call. A zero-length
/// or short timeline can start and complete in the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Step {
    /// Delay elapsed, the playhead left 0.
    pub started: bool,
    /// Reached the end playing forward.
    pub completed: bool,
    /// Reached 0 playing in reverse.
    pub settled: bool,
}

#[derive(Debug, Clone)]
pub struct Timeline {
    duration_ms: f64,
    delay_ms: f64,
    position_ms: f64,
    delay_left_ms: f64,
    direction: Direction,
    started: bool,
}

impl Timeline {
    pub fn new(duration_ms: f64, delay_ms: f64) -> Self {
        let duration_ms = if duration_ms.is_finite() { duration_ms.max(0.0) } else { 0.0 };
        let delay_ms = if delay_ms.is_finite() { delay_ms.max(0.0) } else { 0.0 };
        Self {
            duration_ms,
            delay_ms,
            position_ms: 0.0,
            delay_left_ms: delay_ms,
            direction: Direction::Idle,
            started: false,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_running(&self) -> bool {
        self.direction != Direction::Idle
    }

    pub fn is_complete(&self) -> bool {
        self.started && self.position_ms >= self.duration_ms
    }

    /// Linear progress in [0, 1].
    pub fn progress(&self) -> f64 {
        if !self.started {
            0.0
        } else if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.position_ms / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    /// Begin or resume forward playback. The delay only applies when
    /// starting from rest.
    pub fn play(&mut self) {
        if self.is_complete() {
            self.direction = Direction::Idle;
            return;
        }
        if !self.started && self.direction != Direction::Forward {
            self.delay_left_ms = self.delay_ms;
        }
        self.direction = Direction::Forward;
    }

    /// Play back toward 0 from wherever the playhead sits.
    pub fn reverse(&mut self) {
        if !self.started {
            // never left 0, nothing to unwind
            self.direction = Direction::Idle;
            self.delay_left_ms = self.delay_ms;
            return;
        }
        self.direction = Direction::Reverse;
    }

    pub fn advance(&mut self, delta_ms: f64) -> Step {
        let mut step = Step::default();
        let mut delta = if delta_ms.is_nan() { 0.0 } else { delta_ms.max(0.0) };
        match self.direction {
            Direction::Idle => {}
            Direction::Forward => {
                if !self.started {
                    if self.delay_left_ms > delta {
                        self.delay_left_ms -= delta;
                        return step;
                    }
                    delta -= self.delay_left_ms;
                    self.delay_left_ms = 0.0;
                    self.started = true;
                    self.position_ms = 0.0;
                    step.started = true;
                }
                self.position_ms = (self.position_ms + delta).min(self.duration_ms);
                if self.position_ms >= self.duration_ms {
                    self.direction = Direction::Idle;
                    step.completed = true;
                }
            }
            Direction::Reverse => {
                self.position_ms -= delta;
                if self.position_ms <= 0.0 || self.duration_ms <= 0.0 {
                    self.position_ms = 0.0;
                    self.direction = Direction::Idle;
                    self.started = false;
                    self.delay_left_ms = self.delay_ms;
                    step.settled = true;
                }
            }
        }
        step
    }
}
