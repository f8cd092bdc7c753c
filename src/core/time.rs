//! Scene timing
//!
//! [`SceneClock`] supplies the monotonic `t` that the sway animation samples.

use std::time::Instant;

/// Monotonic scene time in seconds since the scene started.
#[derive(Clone, Debug)]
pub struct SceneClock {
    source: ClockSource,
}

#[derive(Clone, Debug)]
enum ClockSource {
    /// Wall-clock time since `start`.
    Realtime { start: Instant },
    /// Externally stepped time (previews, tests, offline capture).
    Manual { elapsed: f32 },
}

impl SceneClock {
    /// Clock that follows wall time from now.
    pub fn realtime() -> Self {
        Self {
            source: ClockSource::Realtime { start: Instant::now() },
        }
    }

    /// Clock that only moves when [`advance`](Self::advance) is called.
    pub fn manual() -> Self {
        Self {
            source: ClockSource::Manual { elapsed: 0.0 },
        }
    }

    /// Step a manual clock forward. Negative steps are ignored so time stays monotonic.
    /// Has no effect on a realtime clock.
    pub fn advance(&mut self, dt_seconds: f32) {
        if let ClockSource::Manual { ref mut elapsed } = self.source {
            *elapsed += dt_seconds.max(0.0);
        }
    }

    /// Seconds since the scene started.
    pub fn elapsed_secs(&self) -> f32 {
        match &self.source {
            ClockSource::Realtime { start } => start.elapsed().as_secs_f32(),
            ClockSource::Manual { elapsed } => *elapsed,
        }
    }

    /// Restart from zero (used when the host remounts the scene).
    pub fn reset(&mut self) {
        match &mut self.source {
            ClockSource::Realtime { start } => *start = Instant::now(),
            ClockSource::Manual { elapsed } => *elapsed = 0.0,
        }
    }
}

impl Default for SceneClock {
    fn default() -> Self {
        Self::realtime()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_starts_at_zero() {
        let clock = SceneClock::manual();
        assert_eq!(clock.elapsed_secs(), 0.0);
    }

    #[test]
    fn test_manual_clock_advance() {
        let mut clock = SceneClock::manual();
        clock.advance(0.5);
        clock.advance(0.25);
        assert!((clock.elapsed_secs() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_manual_clock_ignores_negative_steps() {
        let mut clock = SceneClock::manual();
        clock.advance(1.0);
        clock.advance(-5.0);
        assert!((clock.elapsed_secs() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_manual_clock_reset() {
        let mut clock = SceneClock::manual();
        clock.advance(3.0);
        clock.reset();
        assert_eq!(clock.elapsed_secs(), 0.0);
    }

    #[test]
    fn test_realtime_clock_is_monotonic() {
        let clock = SceneClock::realtime();
        let a = clock.elapsed_secs();
        let b = clock.elapsed_secs();
        assert!(b >= a);
        assert!(a >= 0.0);
    }
}
