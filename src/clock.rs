/// Monotonic millisecond time source.
///
/// Only differences of timestamps are ever used, so wraparound is harmless
/// as long as the underlying counter is monotonic.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> u64;

    /// Milliseconds elapsed since `since`, correct across wraparound.
    fn elapsed_ms(&self, since: u64) -> u64 {
        self.now_ms().wrapping_sub(since)
    }
}

/// Manually advanced clock for tests and simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    pub const fn new() -> Self {
        Self { now: 0 }
    }

    /// Moves time forward by `ms` milliseconds.
    pub fn advance(&mut self, ms: u64) {
        self.now = self.now.wrapping_add(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }
}

/// Clock backed by [`std::time::Instant`], counting from construction.
#[cfg(feature = "std")]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let mut clock = ManualClock::new();
        assert_eq!(clock.now_ms(), 0);
        clock.advance(150);
        assert_eq!(clock.now_ms(), 150);
    }

    #[test]
    fn test_elapsed_across_wraparound() {
        let mut clock = ManualClock::new();
        clock.advance(u64::MAX);
        let since = clock.now_ms();
        clock.advance(10);
        assert_eq!(clock.elapsed_ms(since), 10);
    }
}
