//! Frame timing utilities

use std::time::{Duration, Instant};

/// Per-frame timing statistics kept by the engine loop
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    /// Frames completed so far
    pub frame_count: u64,
    /// Duration of the last completed frame, sleep included
    pub last_delta: Duration,
    /// Sum of all frame durations
    pub total_time: Duration,
}

impl FrameStats {
    /// Average frames per second since the first frame
    pub fn average_fps(&self) -> f64 {
        let secs = self.total_time.as_secs_f64();
        if secs > 0.0 {
            self.frame_count as f64 / secs
        } else {
            0.0
        }
    }
}

/// Measures frame durations for the engine loop
///
/// The delta reported for a frame is the full duration of the frame before
/// it, so behaviours always see a one-frame-lagged value. The very first
/// frame sees [`Duration::ZERO`].
#[derive(Debug)]
pub struct FrameTimer {
    frame_start: Option<Instant>,
    stats: FrameStats,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Create a timer that has not seen any frame yet
    pub fn new() -> Self {
        Self {
            frame_start: None,
            stats: FrameStats::default(),
        }
    }

    /// Mark the start of a frame and return the delta to hand to behaviours
    pub fn begin_frame(&mut self) -> Duration {
        self.frame_start = Some(Instant::now());
        self.stats.last_delta
    }

    /// Mark the end of the current frame
    pub fn end_frame(&mut self) {
        if let Some(start) = self.frame_start.take() {
            self.record(start.elapsed());
        }
    }

    /// Record a completed frame of the given duration
    pub fn record(&mut self, duration: Duration) {
        self.stats.last_delta = duration;
        self.stats.total_time += duration;
        self.stats.frame_count += 1;
    }

    /// Statistics gathered so far
    pub fn stats(&self) -> FrameStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_sees_zero_delta() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.begin_frame(), Duration::ZERO);
    }

    #[test]
    fn test_delta_lags_one_frame() {
        let mut timer = FrameTimer::new();
        timer.record(Duration::from_millis(13));
        assert_eq!(timer.begin_frame(), Duration::from_millis(13));
        timer.record(Duration::from_millis(20));
        assert_eq!(timer.begin_frame(), Duration::from_millis(20));
        assert_eq!(timer.stats().frame_count, 2);
        assert_eq!(timer.stats().total_time, Duration::from_millis(33));
    }

    #[test]
    fn test_end_frame_without_begin_is_ignored() {
        let mut timer = FrameTimer::new();
        timer.end_frame();
        assert_eq!(timer.stats().frame_count, 0);
    }

    #[test]
    fn test_average_fps() {
        let stats = FrameStats {
            frame_count: 50,
            last_delta: Duration::from_millis(20),
            total_time: Duration::from_secs(1),
        };
        assert!((stats.average_fps() - 50.0).abs() < 1e-9);
        assert_eq!(FrameStats::default().average_fps(), 0.0);
    }
}
