// stagnation.rs - Periodic fixed-point check that reseeds a stuck epoch

use std::time::{Duration, Instant};

use rand::Rng;

use crate::epoch::Epoch;
use crate::error::Result;
use crate::random::Randomizer;

/// Wall-clock time between checks.
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(8);

/// What a call to [`StagnationMonitor::check_and_maybe_reseed`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagnationCheck {
    /// The interval has not elapsed since the last check.
    NotDue,
    /// Checked; the next generation differs from the current one.
    Evolving,
    /// Checked; the epoch was stuck and has been replaced.
    Reseeded,
}

/// Gates fixed-point checks to a wall-clock cadence instead of every frame.
#[derive(Debug, Clone)]
pub struct StagnationMonitor {
    interval: Duration,
    last_check: Instant,
}

impl StagnationMonitor {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_check: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_check) >= self.interval
    }

    /// Replaces `epoch` with a freshly randomized one if it has reached a fixed point.
    ///
    /// Only exact fixed points trigger a reseed; a blinker or a glider runs forever.
    /// On error the old epoch is left in place.
    pub fn check_and_maybe_reseed<R: Rng + ?Sized>(
        &mut self,
        epoch: &mut Epoch,
        randomizer: &Randomizer,
        rng: &mut R,
        now: Instant,
    ) -> Result<StagnationCheck> {
        if !self.is_due(now) {
            return Ok(StagnationCheck::NotDue);
        }
        self.last_check = now;

        let stuck = epoch.is_fixed_point();
        tracing::debug!(
            generation = epoch.generation(),
            population = epoch.current().population(),
            stuck,
            "stagnation check"
        );
        if !stuck {
            return Ok(StagnationCheck::Evolving);
        }

        let retired = epoch.generation();
        *epoch = randomizer.epoch(rng)?;
        tracing::info!(generations = retired, "epoch stagnated, reseeded");
        Ok(StagnationCheck::Reseeded)
    }
}
