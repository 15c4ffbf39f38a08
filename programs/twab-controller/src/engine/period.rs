//! Period arithmetic (spec §3 Time model). Pure, allocation-free, reused by
//! both the write path (period-overwrite rule) and the read path
//! (finalization guard, pass-through read operations).

use anchor_lang::prelude::*;

use crate::error::TwabError;

/// Fixed-at-construction timing parameters for one vault (spec §6
/// "Construction parameters"). Lives on `VaultConfig`; passed by value into
/// every period computation so the engine itself stays free of account
/// lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodConfig {
    pub period_length: u64,
    pub period_offset: u64,
}

impl PeriodConfig {
    pub fn new(period_length: u64, period_offset: u64) -> Result<Self> {
        require!(period_length > 0, TwabError::InvalidPeriodLength);
        // spec §9 Open Questions: period_offset = 0 degenerates the period-0
        // boundary. We reject it outright rather than silently collapsing
        // every non-positive timestamp into period 0.
        require!(period_offset > 0, TwabError::InvalidPeriodOffset);
        Ok(Self {
            period_length,
            period_offset,
        })
    }

    /// The period index containing `t` (spec §3): period 0 covers
    /// `t <= period_offset`; afterwards periods are `period_length`-wide
    /// buckets anchored at `period_offset`.
    pub fn period_of(&self, t: u64) -> u64 {
        if t <= self.period_offset {
            0
        } else {
            (t - self.period_offset) / self.period_length
        }
    }

    /// The first timestamp belonging to period `p`.
    pub fn start_of_period(&self, p: u64) -> u64 {
        self.period_offset + p * self.period_length
    }

    /// The period containing `now`, i.e. the currently mutable overwrite
    /// period (spec §3, §4.5.1).
    pub fn current_overwrite_period(&self, now: u64) -> u64 {
        self.period_of(now)
    }

    /// Start of the current overwrite period — the finalization boundary
    /// (spec §4.6.1, §4.7 `current_overwrite_period_started_at`).
    pub fn current_overwrite_period_started_at(&self, now: u64) -> u64 {
        self.start_of_period(self.current_overwrite_period(now))
    }

    /// A query time `t` is finalized iff it is at or before the start of the
    /// current overwrite period (spec §4.6.1, boundary-inclusive per §8).
    pub fn has_finalized(&self, t: u64, now: u64) -> bool {
        t <= self.current_overwrite_period_started_at(now)
    }

    /// The first period-end timestamp at or after `t` (spec §4.7 read
    /// pass-through `period_end_on_or_after`). A period "ends" at the start
    /// of the next period.
    pub fn period_end_on_or_after(&self, t: u64) -> u64 {
        let p = self.period_of(t);
        self.start_of_period(p + 1)
    }
}
