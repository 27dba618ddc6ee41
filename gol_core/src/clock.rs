// clock.rs - Gates grid advances to a fixed cadence, independent of redraws

use std::time::{Duration, Instant};

/// Time between grid advances in the reference backdrop.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(600);

#[derive(Clone, Copy, Debug)]
pub struct AnimationClock {
    interval: Duration,
    last_update: Instant,
}

impl AnimationClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self { interval, last_update: now }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_update(&self) -> Instant {
        self.last_update
    }

    /// True once at least `interval` has passed since the last advance.
    /// A `now` earlier than the baseline is never due.
    pub fn due(&self, now: Instant) -> bool {
        now.checked_duration_since(self.last_update)
            .is_some_and(|elapsed| elapsed >= self.interval)
    }

    /// Advances the baseline to `now` if due; returns whether it was.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self.due(now);
        if due {
            self.last_update = now;
        }
        due
    }

    /// Restarts the cadence from `now`, e.g. after the animation was suspended.
    pub fn rebase(&mut self, now: Instant) {
        self.last_update = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn due_at_exactly_the_interval() {
        let start = Instant::now();
        let clock = AnimationClock::new(DEFAULT_TICK_INTERVAL, start);
        assert!(!clock.due(start));
        assert!(!clock.due(start + ms(599)));
        assert!(clock.due(start + ms(600)));
        assert!(clock.due(start + ms(5_000)));
    }

    #[test]
    fn tick_moves_the_baseline_only_when_due() {
        let start = Instant::now();
        let mut clock = AnimationClock::new(ms(600), start);

        assert!(!clock.tick(start + ms(300)));
        assert_eq!(clock.last_update(), start);

        assert!(clock.tick(start + ms(650)));
        assert_eq!(clock.last_update(), start + ms(650));
        assert!(!clock.tick(start + ms(1_200)));
        assert!(clock.tick(start + ms(1_250)));
    }

    #[test]
    fn clock_going_backwards_is_not_due() {
        let start = Instant::now() + ms(10_000);
        let mut clock = AnimationClock::new(ms(600), start);
        assert!(!clock.due(start - ms(5_000)));
        assert!(!clock.tick(start - ms(1)));
        assert_eq!(clock.last_update(), start);
    }

    #[test]
    fn rebase_restarts_the_interval() {
        let start = Instant::now();
        let mut clock = AnimationClock::new(ms(600), start);
        clock.rebase(start + ms(10_000));
        assert!(!clock.due(start + ms(10_500)));
        assert!(clock.due(start + ms(10_600)));
    }
}
