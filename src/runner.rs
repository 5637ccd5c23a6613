use std::time::{Duration, Instant};

/// State of the simulation runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunnerState {
    Stopped,
    Started,
}

/// Schedules simulation ticks at a fixed period.
///
/// The runner never sleeps and never spawns threads: the host event loop
/// polls it with the current time and performs a step when a tick is due.
/// Every clock-dependent method takes an explicit `Instant`, which keeps
/// cancellation synchronous and lets tests drive a synthetic clock.
pub struct Runner {
    state: RunnerState,
    period: Duration,
    next_due: Option<Instant>,
}

impl Runner {
    pub fn new(period: Duration) -> Self {
        Self {
            state: RunnerState::Stopped,
            period,
            next_due: None,
        }
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    pub fn is_started(&self) -> bool {
        self.state == RunnerState::Started
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Applies to ticks scheduled from now on; a tick already pending keeps
    /// its deadline.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    /// Stopped -> Started; the first tick is due one full period after
    /// `now`. No-op when already started.
    pub fn start(&mut self, now: Instant) {
        if self.state == RunnerState::Started {
            return;
        }
        self.state = RunnerState::Started;
        self.next_due = Some(now + self.period);
    }

    /// Started -> Stopped, cancelling the pending tick. Once this returns,
    /// `poll` reports no tick until the runner is started again. No-op when
    /// already stopped.
    pub fn stop(&mut self) {
        self.state = RunnerState::Stopped;
        self.next_due = None;
    }

    pub fn toggle(&mut self, now: Instant) {
        match self.state {
            RunnerState::Stopped => self.start(now),
            RunnerState::Started => self.stop(),
        }
    }

    /// Reports whether a tick is due at `now`, consuming it.
    ///
    /// The next tick is scheduled a full period after `now`, so a host that
    /// fell behind coalesces the backlog into a single tick instead of
    /// replaying every missed one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// Time remaining until the pending tick; zero when overdue, `None`
    /// when stopped.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
