//! Tick timing for the cooperative update loop
//!
//! The host render loop calls into the toolkit once per frame with a delta
//! time; everything time-based in the toolkit is driven from that call.

/// Fixed-interval tick accumulator.
///
/// Converts per-frame delta times into a whole number of elapsed ticks.
/// Fractional time carries over between frames, so a 10ms interval driven at
/// 60Hz fires once most frames and twice on the frames where the remainder
/// catches up.
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: f32,
    accumulated: f32,
}

impl TickTimer {
    /// Create a timer firing every `interval` seconds.
    ///
    /// A non-positive interval makes the timer fire exactly once per
    /// `advance` call regardless of the delta time.
    pub fn new(interval: f32) -> Self {
        Self {
            interval: interval.max(0.0),
            accumulated: 0.0,
        }
    }

    /// Advance the timer by `dt` seconds, returning the number of ticks that
    /// elapsed.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if self.interval <= 0.0 {
            return 1;
        }

        self.accumulated += dt.max(0.0);
        let ticks = (self.accumulated / self.interval).floor();
        self.accumulated -= ticks * self.interval;
        ticks as u32
    }

    /// Get the configured tick interval in seconds
    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Discard any accumulated fractional time
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tick_before_interval() {
        let mut timer = TickTimer::new(0.01);
        assert_eq!(timer.advance(0.004), 0);
        assert_eq!(timer.advance(0.004), 0);
    }

    #[test]
    fn test_fraction_carries_over() {
        let mut timer = TickTimer::new(0.01);
        assert_eq!(timer.advance(0.006), 0);
        assert_eq!(timer.advance(0.006), 1);
    }

    #[test]
    fn test_large_dt_yields_multiple_ticks() {
        let mut timer = TickTimer::new(0.01);
        assert_eq!(timer.advance(0.055), 5);
    }

    #[test]
    fn test_zero_interval_fires_once_per_advance() {
        let mut timer = TickTimer::new(0.0);
        assert_eq!(timer.advance(0.0), 1);
        assert_eq!(timer.advance(100.0), 1);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut timer = TickTimer::new(0.01);
        assert_eq!(timer.advance(-5.0), 0);
        assert_eq!(timer.advance(0.01), 1);
    }

    #[test]
    fn test_reset_discards_fraction() {
        let mut timer = TickTimer::new(0.01);
        timer.advance(0.009);
        timer.reset();
        assert_eq!(timer.advance(0.005), 0);
    }
}
