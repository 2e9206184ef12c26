//! Debounce state machine deciding when an annotation pass runs.
//!
//! The host re-renders the table in bursts of partial patches, and the pass
//! itself mutates the page. A burst arms a single delayed run; once the run
//! happened the watcher stays deaf until both cooldowns are over, so its own
//! writes cannot trigger another pass.
//!
//! The machine is pure: callers feed it the current instant and drive the
//! timers themselves (see `core::driver`).

use crate::config::Config;
use crate::core::mutation::Mutation;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Delay between detecting a ready table and running the pass
    pub settle_delay: Duration,
    /// How long the run guard stays up after a pass started
    pub run_cooldown: Duration,
    /// How long after scheduling new mutations are ignored
    pub schedule_cooldown: Duration,
}

impl Timings {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            settle_delay: cfg.settle_delay(),
            run_cooldown: cfg.run_cooldown(),
            schedule_cooldown: cfg.schedule_cooldown(),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Idle,
    /// A pass is armed for `run_at`; the schedule guard lifts at `release_at`
    Scheduled { run_at: Instant, release_at: Instant },
    /// A pass ran; back to idle once both instants are behind us
    Cooldown {
        settle_until: Instant,
        release_at: Instant,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ScheduledPendingRun,
    RunningCooldown,
}

#[derive(Debug)]
pub struct RenderWatcher {
    state: WatchState,
    timings: Timings,
}

impl RenderWatcher {
    pub fn new(timings: Timings) -> Self {
        Self {
            state: WatchState::Idle,
            timings,
        }
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            WatchState::Idle => Phase::Idle,
            WatchState::Scheduled { .. } => Phase::ScheduledPendingRun,
            WatchState::Cooldown { .. } => Phase::RunningCooldown,
        }
    }

    /// Feed one batch of mutations. The first structural mutation seen while
    /// idle with a ready table arms a pass; everything else is ignored.
    /// Returns true when this batch armed a pass.
    pub fn observe<F>(&mut self, batch: &[Mutation], now: Instant, mut is_ready: F) -> bool
    where
        F: FnMut() -> bool,
    {
        for mutation in batch {
            if self.state != WatchState::Idle {
                trace!(phase = ?self.phase(), "mutation ignored");
                return false;
            }
            if mutation.is_structural() && is_ready() {
                let run_at = now + self.timings.settle_delay;
                // the schedule guard never lifts before the run it guards
                let release_at = (now + self.timings.schedule_cooldown).max(run_at);
                self.state = WatchState::Scheduled { run_at, release_at };
                debug!(?run_at, ?release_at, "annotation pass scheduled");
                return true;
            }
        }
        false
    }

    /// Apply every transition due at `now`. Returns true when the armed
    /// pass is due: the caller must run it right away.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut run_due = false;

        loop {
            match self.state {
                WatchState::Scheduled { run_at, release_at } if now >= run_at => {
                    self.state = WatchState::Cooldown {
                        settle_until: now + self.timings.run_cooldown,
                        release_at,
                    };
                    run_due = true;
                }
                WatchState::Cooldown {
                    settle_until,
                    release_at,
                } if now >= settle_until && now >= release_at => {
                    debug!("watcher idle again");
                    self.state = WatchState::Idle;
                }
                _ => return run_due,
            }
        }
    }

    /// Next instant at which `advance` has something to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            WatchState::Idle => None,
            WatchState::Scheduled { run_at, .. } => Some(run_at),
            WatchState::Cooldown {
                settle_until,
                release_at,
            } => Some(settle_until.max(release_at)),
        }
    }
}

impl Default for RenderWatcher {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}
