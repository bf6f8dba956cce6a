//! Frame timing for the host loop.
//!
//! The simulation advances one unit of time per tick regardless of wall
//! clock; [`Time`] only counts frames and estimates FPS for display.
//!
//! ```ignore
//! let mut time = Time::new();
//! loop {
//!     swarm.tick();
//!     time.update();
//!     window.set_title(&format!("{} agents, {:.0} fps", swarm.len(), time.fps()));
//! }
//! ```

use std::time::{Duration, Instant};

/// Frame counter with a periodically refreshed FPS estimate.
#[derive(Debug)]
pub struct Time {
    start: Instant,
    frame_count: u64,
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
}

impl Time {
    pub fn new() -> Self {
        Self::with_interval(Duration::from_millis(500))
    }

    /// Time tracker that refreshes its FPS estimate every `interval`.
    pub fn with_interval(interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: interval,
        }
    }

    /// Record one frame. Returns `true` when the FPS estimate was refreshed.
    pub fn update(&mut self) -> bool {
        let now = Instant::now();
        self.frame_count += 1;

        let since = now.duration_since(self.fps_update_time);
        if since < self.fps_update_interval {
            return false;
        }
        let frames = self.frame_count - self.fps_frame_count;
        self.fps = frames as f32 / since.as_secs_f32().max(f32::EPSILON);
        self.fps_frame_count = self.frame_count;
        self.fps_update_time = now;
        true
    }

    /// Total frames recorded.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Most recent FPS estimate; zero until the first refresh.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Wall time since creation.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_time_new() {
        let time = Time::new();
        assert_eq!(time.frame(), 0);
        assert_eq!(time.fps(), 0.0);
    }

    #[test]
    fn test_frames_count_up() {
        let mut time = Time::new();
        for _ in 0..5 {
            time.update();
        }
        assert_eq!(time.frame(), 5);
    }

    #[test]
    fn test_fps_refresh() {
        let mut time = Time::with_interval(Duration::from_millis(10));
        assert!(!time.update());
        thread::sleep(Duration::from_millis(20));
        assert!(time.update());
        assert!(time.fps() > 0.0);
    }
}
