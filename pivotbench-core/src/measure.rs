//! Trial Timing
//!
//! Every trial is timed against a [`Clock`], a monotonic source of elapsed
//! time. [`MonotonicClock`] wraps `std::time::Instant` and is unaffected by
//! wall-clock adjustments; tests substitute a manually advanced clock to get
//! exact, known durations.

use std::time::Duration;

/// Monotonic time source used to time trials
pub trait Clock {
    /// Time elapsed since this clock's origin. Never decreases.
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline(always)]
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Clock backed by `std::time::Instant`
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: std::time::Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is the current instant
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline(always)]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Measures one span on a clock
pub struct Timer<'c, C: Clock + ?Sized> {
    clock: &'c C,
    start: Duration,
}

impl<'c, C: Clock + ?Sized> Timer<'c, C> {
    /// Start a new timer
    #[inline(always)]
    pub fn start(clock: &'c C) -> Self {
        Self {
            clock,
            start: clock.now(),
        }
    }

    /// Stop the timer and return the elapsed span
    #[inline(always)]
    pub fn stop(&self) -> Duration {
        self.clock.now().saturating_sub(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct StepClock(Cell<Duration>);

    impl Clock for StepClock {
        fn now(&self) -> Duration {
            self.0.get()
        }
    }

    #[test]
    fn test_monotonic_elapsed() {
        let clock = MonotonicClock::new();
        let timer = Timer::start(&clock);
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.stop();

        assert!(elapsed >= Duration::from_millis(5));
        assert!(elapsed < Duration::from_secs(2));
    }

    #[test]
    fn test_monotonic_never_decreases() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_timer_on_manual_clock() {
        let clock = StepClock(Cell::new(Duration::from_millis(100)));
        let timer = Timer::start(&clock);
        clock.0.set(Duration::from_millis(142));
        assert_eq!(timer.stop(), Duration::from_millis(42));
    }
}
