use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

/// Minimal frame clock - numbers ticks and measures delta time
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
    frame_number: u64,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame_number: 0,
        }
    }

    /// Advance the clock and describe the frame that just started
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let info = FrameInfo {
            number: self.frame_number,
            time: now.duration_since(self.start).as_secs_f32(),
            delta: now.duration_since(self.last_tick).as_secs_f32(),
        };
        self.last_tick = now;
        self.frame_number += 1;
        info
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_number
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Averages frame rate over a fixed reporting interval
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    accumulator: f32,
    frames: u32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulator: 0.0,
            frames: 0,
        }
    }

    /// Count a frame; returns the average fps whenever an interval completes
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.accumulator += delta;

        if self.accumulator >= self.interval {
            let fps = self.frames as f32 / self.accumulator;
            self.frames = 0;
            self.accumulator = 0.0;
            Some(fps)
        } else {
            None
        }
    }
}
