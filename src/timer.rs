//! Gravity timer owned by the host
//!
//! The engine never reads the clock. The host arms this timer when play
//! begins, cancels it whenever play stops, and feeds `poll` results to
//! `Game::tick`.

use crate::game::GameState;
use std::time::{Duration, Instant};

/// Default gravity period
pub const GRAVITY_PERIOD: Duration = Duration::from_millis(800);

#[derive(Debug, Clone)]
pub struct GravityTimer {
    period: Duration,
    /// When the next tick is due, None while cancelled
    next_due: Option<Instant>,
}

impl Default for GravityTimer {
    fn default() -> Self {
        Self::new(GRAVITY_PERIOD)
    }
}

impl GravityTimer {
    /// A cancelled timer; zero periods are bumped to 1 ms
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start counting a full period from `now`. Re-arming restarts the period.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Stop the timer; no tick will be reported until it is armed again
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Arm on entering play, cancel on leaving it. Call after every state change.
    pub fn sync(&mut self, state: GameState, now: Instant) {
        match (state == GameState::Playing, self.is_armed()) {
            (true, false) => self.arm(now),
            (false, true) => self.cancel(),
            _ => {}
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// How long until the next tick, None while cancelled
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Number of ticks that came due at or before `now`.
    /// The schedule advances from the last due point so the rate does not drift.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };

        let mut ticks = 0;
        while due <= now {
            ticks += 1;
            due += self.period;
        }
        self.next_due = Some(due);
        ticks
    }
}
