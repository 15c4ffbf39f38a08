//! The TWAB engine: write path (period-overwrite rule, `increase`/`decrease`)
//! and read path (`previous_or_at`, `balance_at`, `twab_between`, the
//! finalization guard). Operates on a `&mut TwabAccount` already loaded by
//! the caller; knows nothing about PDAs, signers, or CPI.

use anchor_lang::prelude::*;

use crate::engine::period::PeriodConfig;
use crate::error::TwabError;
use crate::math::U192;
use crate::state::account::TwabAccount;
use crate::state::observation::Observation;
use crate::utils::constants::{MAX_BALANCE, RING_CAPACITY};

/// Result of a single period-overwrite write, used by callers to fill in
/// `ObservationRecorded`/`TotalSupplyObservationRecorded`'s `is_new` field.
#[derive(Clone, Copy, Debug)]
pub struct ObservationWrite {
    pub is_new: bool,
    pub observation: Observation,
}

/// `previous_or_at`'s result. `index` is the physical ring slot of
/// `observation` and is meaningless when `is_before_history` is set — those
/// observations are synthetic, not stored in the ring.
#[derive(Clone, Copy, Debug)]
pub struct PreviousOrAt {
    pub index: u16,
    pub observation: Observation,
    pub is_before_history: bool,
}

/// Applies the period-overwrite rule (append vs overwrite) and returns the
/// observation that was written, tagged with whether it was a fresh append.
fn write_observation(
    account: &mut TwabAccount,
    period_cfg: &PeriodConfig,
    now: u64,
    pre_change_delegate_balance: u128,
) -> Result<ObservationWrite> {
    let (_, newest_obs) = account.newest();
    let new_obs = newest_obs.extrapolate(pre_change_delegate_balance, now)?;

    let is_new = account.cardinality == 0
        || period_cfg.period_of(now) > period_cfg.period_of(newest_obs.timestamp);

    if is_new {
        account.append(new_obs);
    } else {
        account.overwrite_newest(new_obs);
    }

    Ok(ObservationWrite {
        is_new,
        observation: new_obs,
    })
}

/// `increase(account, amount, delegate_amount)` (spec §4.5.2). Returns the
/// observation write iff `delegate_amount != 0`.
pub fn increase(
    account: &mut TwabAccount,
    period_cfg: &PeriodConfig,
    now: u64,
    amount: u128,
    delegate_amount: u128,
) -> Result<Option<ObservationWrite>> {
    let write = if delegate_amount != 0 {
        Some(write_observation(account, period_cfg, now, account.delegate_balance)?)
    } else {
        None
    };

    let balance = account
        .balance
        .checked_add(amount)
        .ok_or(TwabError::BalanceOverflow)?;
    let delegate_balance = account
        .delegate_balance
        .checked_add(delegate_amount)
        .ok_or(TwabError::BalanceOverflow)?;
    require!(balance <= MAX_BALANCE, TwabError::BalanceOverflow);
    require!(delegate_balance <= MAX_BALANCE, TwabError::BalanceOverflow);

    account.balance = balance;
    account.delegate_balance = delegate_balance;

    Ok(write)
}

/// `decrease(account, amount, delegate_amount)` (spec §4.5.2). Bounds are
/// checked before any mutation, including before the observation write,
/// so a failing call leaves the account entirely untouched.
pub fn decrease(
    account: &mut TwabAccount,
    period_cfg: &PeriodConfig,
    now: u64,
    amount: u128,
    delegate_amount: u128,
) -> Result<Option<ObservationWrite>> {
    require!(account.balance >= amount, TwabError::InsufficientBalance);
    require!(
        account.delegate_balance >= delegate_amount,
        TwabError::InsufficientDelegateBalance
    );

    let write = if delegate_amount != 0 {
        Some(write_observation(account, period_cfg, now, account.delegate_balance)?)
    } else {
        None
    };

    account.balance -= amount;
    account.delegate_balance -= delegate_amount;

    Ok(write)
}

/// The constant delegate balance held immediately after the observation at
/// `index` (spec §4.6.3 steps 3–5): looks at the observation's successor in
/// the ring and either reads it off the current header (successor is
/// uninitialized or wrapped past `observation`, meaning `observation` is the
/// newest) or derives it from the cumulative-difference formula.
fn rate_after(account: &TwabAccount, index: u16, observation: &Observation) -> Result<u128> {
    let next_physical = (index as usize + 1) % RING_CAPACITY;
    let next_obs = account.ring[next_physical];

    if next_obs.timestamp == 0 || next_obs.timestamp < observation.timestamp {
        return Ok(account.delegate_balance);
    }

    U192::checked_diff_div(
        next_obs.cumulative_balance,
        observation.cumulative_balance,
        next_obs.timestamp - observation.timestamp,
    )
    .ok_or_else(|| error!(TwabError::CumulativeOverflow))
}

/// `previous_or_at(T)` (spec §4.6.2). Caller guarantees `T` is finalized;
/// this function only resolves the observation, it does not itself check
/// finalization.
pub fn previous_or_at(
    account: &TwabAccount,
    period_offset: u64,
    target: u64,
) -> Result<PreviousOrAt> {
    if account.cardinality == 0 {
        return Ok(PreviousOrAt {
            index: 0,
            observation: Observation::new(period_offset, U192::ZERO),
            is_before_history: true,
        });
    }

    let (oldest_idx, oldest_obs) = account.oldest();
    if target < oldest_obs.timestamp {
        if (account.cardinality as usize) < RING_CAPACITY {
            return Ok(PreviousOrAt {
                index: 0,
                observation: Observation::new(target, U192::ZERO),
                is_before_history: true,
            });
        }
        msg!(
            "insufficient history: requested {} oldest {}",
            target,
            oldest_obs.timestamp
        );
        return Err(error!(TwabError::InsufficientHistory));
    }

    let (newest_idx, newest_obs) = account.newest();
    if target >= newest_obs.timestamp {
        return Ok(PreviousOrAt {
            index: newest_idx,
            observation: newest_obs,
            is_before_history: false,
        });
    }

    if account.cardinality <= 2 {
        return Ok(PreviousOrAt {
            index: oldest_idx,
            observation: oldest_obs,
            is_before_history: false,
        });
    }

    let (before_physical, after_physical) = crate::math::binary_search::bracket(
        oldest_idx,
        account.cardinality,
        RING_CAPACITY as u16,
        target,
        |physical| account.ring[physical as usize].timestamp,
    );

    if account.ring[after_physical as usize].timestamp == target {
        Ok(PreviousOrAt {
            index: after_physical,
            observation: account.ring[after_physical as usize],
            is_before_history: false,
        })
    } else {
        Ok(PreviousOrAt {
            index: before_physical,
            observation: account.ring[before_physical as usize],
            is_before_history: false,
        })
    }
}

/// Extrapolates a `previous_or_at` result to exactly `target`, deriving the
/// held-constant rate from its successor when it isn't already at `target`
/// (spec §4.6.4 steps 4–5).
fn synthesize_at(account: &TwabAccount, prev: &PreviousOrAt, target: u64) -> Result<Observation> {
    if prev.observation.timestamp == target {
        return Ok(prev.observation);
    }
    let rate = if prev.is_before_history {
        account.delegate_balance
    } else {
        rate_after(account, prev.index, &prev.observation)?
    };
    prev.observation.extrapolate(rate, target)
}

/// `balance_at(T)` (spec §4.6.3), finalization already enforced by the
/// caller (the controller/instruction layer, which alone knows `now`).
pub fn balance_at(
    account: &TwabAccount,
    period_cfg: &PeriodConfig,
    now: u64,
    period_offset: u64,
    t: u64,
) -> Result<u128> {
    require!(period_cfg.has_finalized(t, now), TwabError::TimestampNotFinalized);

    let prev = previous_or_at(account, period_offset, t)?;
    if prev.is_before_history {
        return Ok(0);
    }
    rate_after(account, prev.index, &prev.observation)
}

/// `twab_between(T0, T1)` (spec §4.6.4).
pub fn twab_between(
    account: &TwabAccount,
    period_cfg: &PeriodConfig,
    now: u64,
    period_offset: u64,
    t0: u64,
    t1: u64,
) -> Result<u128> {
    require!(t0 <= t1, TwabError::InvalidTimeRange);
    require!(period_cfg.has_finalized(t0, now), TwabError::TimestampNotFinalized);
    require!(period_cfg.has_finalized(t1, now), TwabError::TimestampNotFinalized);

    if t0 == t1 {
        return balance_at(account, period_cfg, now, period_offset, t1);
    }

    let start = previous_or_at(account, period_offset, t0)?;
    let end = previous_or_at(account, period_offset, t1)?;

    let start_synth = synthesize_at(account, &start, t0)?;
    let end_synth = synthesize_at(account, &end, t1)?;

    U192::checked_diff_div(
        end_synth.cumulative_balance,
        start_synth.cumulative_balance,
        t1 - t0,
    )
    .ok_or_else(|| error!(TwabError::CumulativeOverflow))
}
