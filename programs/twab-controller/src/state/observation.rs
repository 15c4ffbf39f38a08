use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

use crate::error::TwabError;
use crate::math::U192;
use crate::utils::constants::MAX_TIMESTAMP;

/// A single `(timestamp, cumulative_balance)` checkpoint (spec §4.1). The
/// atomic unit of history; immutable once a later observation exists in the
/// ring, except for the newest slot during its own period (spec §4.5.1).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable, AnchorSerialize, AnchorDeserialize, InitSpace,
)]
#[repr(C)]
pub struct Observation {
    pub timestamp: u64,
    pub cumulative_balance: U192,
}

impl Observation {
    pub const ZERO: Self = Self {
        timestamp: 0,
        cumulative_balance: U192::ZERO,
    };

    pub fn new(timestamp: u64, cumulative_balance: U192) -> Self {
        Self {
            timestamp,
            cumulative_balance,
        }
    }

    /// Extrapolates this observation forward to `at`, using `delegate_balance`
    /// as the constant rate held over the elapsed interval (spec §4.1). The
    /// caller passes the *pre-change* delegate balance — the rate that was
    /// actually in force during `[self.timestamp, at]` (spec §4.5.1 step 1).
    pub fn extrapolate(&self, delegate_balance: u128, at: u64) -> Result<Self> {
        require!(at >= self.timestamp, TwabError::CumulativeOverflow);
        require!(at <= MAX_TIMESTAMP, TwabError::TimestampOutOfRange);
        let elapsed = at - self.timestamp;
        let cumulative_balance = self
            .cumulative_balance
            .checked_extrapolate(delegate_balance, elapsed)
            .ok_or(TwabError::CumulativeOverflow)?;
        Ok(Self {
            timestamp: at,
            cumulative_balance,
        })
    }
}
