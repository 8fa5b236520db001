// File: crates/chart-core/src/animation.rs
// Summary: Reveal timeline: wall-clock progress with a cubic ease-out, self-terminating at 1.

use std::time::{Duration, Instant};

/// Cubic ease-out over `[0, 1]`.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Timeline state of one bound configuration.
///
/// `progress` is the eased value and only moves forward; `reset` is the one
/// way back to zero.
#[derive(Clone, Copy, Debug)]
pub struct Animation {
    duration: Duration,
    start: Option<Instant>,
    progress: f32,
    running: bool,
}

impl Animation {
    pub fn new(duration: Duration) -> Self {
        Self { duration, start: None, progress: 0.0, running: true }
    }

    /// Back to the unstarted state.
    pub fn reset(&mut self) {
        self.start = None;
        self.progress = 0.0;
        self.running = true;
    }

    /// Advance to `now`. The first call pins the start time. Returns the eased
    /// progress; once it reaches 1 the timeline stops.
    pub fn tick(&mut self, now: Instant) -> f32 {
        if !self.running {
            return self.progress;
        }
        let start = *self.start.get_or_insert(now);
        let elapsed = now.saturating_duration_since(start);
        let linear = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32
        };
        let eased = ease_out_cubic(linear).max(self.progress);
        self.progress = eased;
        if eased >= 1.0 {
            self.progress = 1.0;
            self.running = false;
        }
        self.progress
    }

    pub fn progress(&self) -> f32 { self.progress }
    pub fn is_running(&self) -> bool { self.running }
    pub fn started_at(&self) -> Option<Instant> { self.start }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn easing_endpoints_and_shape() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_relative_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn first_tick_starts_at_zero_and_completion_stops() {
        let t0 = Instant::now();
        let mut a = Animation::new(Duration::from_millis(2500));
        assert_eq!(a.tick(t0), 0.0);
        assert!(a.is_running());
        assert_relative_eq!(a.tick(t0 + Duration::from_millis(1250)), 0.875);
        assert_eq!(a.tick(t0 + Duration::from_millis(2500)), 1.0);
        assert!(!a.is_running());
        // Later ticks leave the finished timeline alone.
        assert_eq!(a.tick(t0 + Duration::from_secs(60)), 1.0);
    }

    #[test]
    fn progress_never_rewinds() {
        let t0 = Instant::now();
        let mut a = Animation::new(Duration::from_millis(2500));
        a.tick(t0 + Duration::from_millis(500));
        a.tick(t0 + Duration::from_millis(1500));
        let p = a.progress();
        // An earlier instant must not move the timeline backwards.
        a.tick(t0 + Duration::from_millis(800));
        assert_eq!(a.progress(), p);
    }

    #[test]
    fn reset_clears_start() {
        let t0 = Instant::now();
        let mut a = Animation::new(Duration::from_millis(10));
        a.tick(t0);
        a.tick(t0 + Duration::from_millis(20));
        a.reset();
        assert!(a.is_running());
        assert!(a.started_at().is_none());
        assert_eq!(a.progress(), 0.0);
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut a = Animation::new(Duration::ZERO);
        assert_eq!(a.tick(Instant::now()), 1.0);
        assert!(!a.is_running());
    }
}
