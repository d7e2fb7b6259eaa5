//! Fixed-period tick scheduling for the shell loop

use std::time::{Duration, Instant};

use crate::consts::MAX_CATCH_UP_TICKS;

/// Tells the shell how many simulation ticks are due. Stopped while the round
/// is over or paused, started again on restart or resume.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    period: Duration,
    next_tick: Option<Instant>,
}

impl TickScheduler {
    /// A stopped scheduler. Zero periods are bumped to one millisecond.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next_tick: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Starts ticking one period from `now`. No-op if already running.
    pub fn start(&mut self, now: Instant) {
        if self.next_tick.is_none() {
            self.next_tick = Some(now + self.period);
        }
    }

    pub fn stop(&mut self) {
        self.next_tick = None;
    }

    /// Number of ticks that fell due by `now`, capped at [`MAX_CATCH_UP_TICKS`].
    /// When the cap is hit the backlog is dropped instead of replayed later.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next_tick else {
            return 0;
        };

        let mut due = 0;
        while next <= now && due < MAX_CATCH_UP_TICKS {
            due += 1;
            next += self.period;
        }
        if next <= now {
            next = now + self.period;
        }

        self.next_tick = Some(next);
        due
    }

    /// Time left before the next tick, or `None` when stopped
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_tick
            .map(|next| next.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(20);

    #[test]
    fn test_scheduler_starts_stopped() {
        let mut scheduler = TickScheduler::new(PERIOD);
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.due_ticks(Instant::now()), 0);
        assert_eq!(scheduler.time_until_next(Instant::now()), None);
    }

    #[test]
    fn test_scheduler_counts_elapsed_periods() {
        let start = Instant::now();
        let mut scheduler = TickScheduler::new(PERIOD);
        scheduler.start(start);

        assert_eq!(scheduler.due_ticks(start + Duration::from_millis(10)), 0);
        assert_eq!(scheduler.due_ticks(start + Duration::from_millis(20)), 1);
        assert_eq!(scheduler.due_ticks(start + Duration::from_millis(30)), 0);
        assert_eq!(scheduler.due_ticks(start + Duration::from_millis(85)), 3);
        assert_eq!(
            scheduler.time_until_next(start + Duration::from_millis(85)),
            Some(Duration::from_millis(15))
        );
    }

    #[test]
    fn test_scheduler_caps_catch_up() {
        let start = Instant::now();
        let mut scheduler = TickScheduler::new(PERIOD);
        scheduler.start(start);

        let late = start + Duration::from_secs(1);
        assert_eq!(scheduler.due_ticks(late), MAX_CATCH_UP_TICKS);
        // Backlog dropped: nothing more is due right away
        assert_eq!(scheduler.due_ticks(late), 0);
        assert_eq!(scheduler.time_until_next(late), Some(PERIOD));
    }

    #[test]
    fn test_scheduler_stop_and_restart() {
        let start = Instant::now();
        let mut scheduler = TickScheduler::new(PERIOD);
        scheduler.start(start);
        scheduler.stop();
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.due_ticks(start + Duration::from_millis(100)), 0);

        let resumed = start + Duration::from_millis(100);
        scheduler.start(resumed);
        assert_eq!(scheduler.due_ticks(resumed + Duration::from_millis(19)), 0);
        assert_eq!(scheduler.due_ticks(resumed + Duration::from_millis(20)), 1);
    }

    #[test]
    fn test_zero_period_is_bumped() {
        let scheduler = TickScheduler::new(Duration::ZERO);
        assert_eq!(scheduler.period(), Duration::from_millis(1));
    }
}
