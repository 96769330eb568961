//! Monotonic clock samples.
//!
//! A `ClockSample` is a raw tick count paired with the tick frequency of the
//! clock that produced it. Elapsed seconds are `(end - start) / frequency`.

use std::num::NonZeroU64;
use std::time::Instant;

use crate::cfg::TICKS_PER_SECOND;

/// One reading of a monotonic counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockSample {
    pub ticks: u64,
    pub frequency: NonZeroU64,
}

impl ClockSample {
    #[inline]
    pub fn new(ticks: u64, frequency: NonZeroU64) -> Self {
        Self { ticks, frequency }
    }

    /// Seconds between two samples of the same clock.
    ///
    /// Pre: both samples come from the same clock (`start.frequency` is used).
    /// Post: finite and `>= 0.0`; a reversed pair saturates to zero.
    pub fn elapsed_seconds(start: ClockSample, end: ClockSample) -> f64 {
        debug_assert_eq!(start.frequency, end.frequency);
        let delta = end.ticks.saturating_sub(start.ticks);
        delta as f64 / start.frequency.get() as f64
    }
}

/// Process-local monotonic clock with nanosecond ticks.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
    frequency: NonZeroU64,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            frequency: NonZeroU64::new(TICKS_PER_SECOND).unwrap_or(NonZeroU64::MIN),
        }
    }

    #[inline]
    pub fn frequency(&self) -> NonZeroU64 {
        self.frequency
    }

    pub fn now(&self) -> ClockSample {
        // u64 nanoseconds covers ~584 years of uptime.
        let ticks = u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX);
        ClockSample::new(ticks, self.frequency)
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::time::Duration;

    fn hz(f: u64) -> NonZeroU64 {
        NonZeroU64::new(f).unwrap()
    }

    #[test]
    fn elapsed_is_tick_delta_over_frequency() {
        let start = ClockSample::new(1_000, hz(1_000));
        let end = ClockSample::new(3_500, hz(1_000));
        assert!((ClockSample::elapsed_seconds(start, end) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn zero_duration_is_zero() {
        let s = ClockSample::new(42, hz(10_000_000));
        assert_eq!(ClockSample::elapsed_seconds(s, s), 0.0);
    }

    #[test]
    fn monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        std::thread::sleep(Duration::from_millis(5));
        let b = clock.now();
        assert!(b.ticks >= a.ticks);
        let secs = ClockSample::elapsed_seconds(a, b);
        assert!(secs >= 0.005, "slept 5ms, measured {secs}");
        assert_eq!(clock.frequency().get(), TICKS_PER_SECOND);
    }

    proptest! {
        #[test]
        fn elapsed_finite_and_non_negative(a in any::<u64>(), b in any::<u64>(), f in 1u64..=u64::MAX) {
            let secs = ClockSample::elapsed_seconds(ClockSample::new(a, hz(f)), ClockSample::new(b, hz(f)));
            prop_assert!(secs.is_finite());
            prop_assert!(secs >= 0.0);
        }

        #[test]
        fn elapsed_grows_with_end(start in 0u64..1 << 40, d1 in 0u64..1 << 20, d2 in 0u64..1 << 20) {
            let f = hz(TICKS_PER_SECOND);
            let s = ClockSample::new(start, f);
            let (lo, hi) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
            let e_lo = ClockSample::elapsed_seconds(s, ClockSample::new(start + lo, f));
            let e_hi = ClockSample::elapsed_seconds(s, ClockSample::new(start + hi, f));
            prop_assert!(e_lo <= e_hi);
        }
    }
}
