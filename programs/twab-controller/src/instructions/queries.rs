//! Read-only instructions over an already-initialized `TwabAccount` (spec
//! §4.6). A vault's total-supply account shares `TwabAccount`'s layout (spec
//! §3), so these handlers serve both user queries and total-supply queries —
//! the caller simply passes whichever PDA it means to read.
//!
//! Each handler returns its result through Anchor's return-data channel
//! (`Result<T>` for `T: AnchorSerialize`) rather than an account mutation or
//! event, matching the read-only nature of the operation.

use anchor_lang::prelude::*;

use crate::engine::twab::{balance_at as balance_at_engine, twab_between as twab_between_engine};
use crate::error::TwabError;
use crate::state::account::TwabAccount;
use crate::state::observation::Observation;
use crate::state::vault_config::VaultConfig;
use crate::utils::constants::{MAX_TIMESTAMP, VAULT_CONFIG_SEED};

#[derive(Accounts)]
pub struct AccountQuery<'info> {
    #[account(seeds = [VAULT_CONFIG_SEED, vault_config.mint.as_ref()], bump = vault_config.bump)]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(constraint = account.load()?.vault == vault_config.mint @ TwabError::InvalidHolder)]
    pub account: AccountLoader<'info, TwabAccount>,
}

/// spec §4.6.5: the representable timestamp range ends at `MAX_TIMESTAMP`;
/// queries beyond it return 0 rather than erroring, since no observation
/// can ever be recorded at a timestamp the `u48` field can't hold.
pub fn balance_at(ctx: Context<AccountQuery>, t: u64) -> Result<u128> {
    if t > MAX_TIMESTAMP {
        return Ok(0);
    }
    let period_cfg = ctx.accounts.vault_config.period_config()?;
    let now = Clock::get()?.unix_timestamp as u64;
    let account = ctx.accounts.account.load()?;
    balance_at_engine(&account, &period_cfg, now, ctx.accounts.vault_config.period_offset, t)
}

pub fn twab_between(ctx: Context<AccountQuery>, t0: u64, t1: u64) -> Result<u128> {
    require!(t0 <= t1, TwabError::InvalidTimeRange);
    if t0 > MAX_TIMESTAMP {
        return Ok(0);
    }
    let period_cfg = ctx.accounts.vault_config.period_config()?;
    let now = Clock::get()?.unix_timestamp as u64;
    let account = ctx.accounts.account.load()?;
    let t1 = t1.min(MAX_TIMESTAMP);
    twab_between_engine(&account, &period_cfg, now, ctx.accounts.vault_config.period_offset, t0, t1)
}

pub fn get_newest_observation(ctx: Context<AccountQuery>) -> Result<Observation> {
    let account = ctx.accounts.account.load()?;
    Ok(account.newest().1)
}

pub fn get_oldest_observation(ctx: Context<AccountQuery>) -> Result<Observation> {
    let account = ctx.accounts.account.load()?;
    require!(account.cardinality > 0, TwabError::InsufficientHistory);
    Ok(account.oldest().1)
}

#[derive(Accounts)]
pub struct PeriodQuery<'info> {
    #[account(seeds = [VAULT_CONFIG_SEED, vault_config.mint.as_ref()], bump = vault_config.bump)]
    pub vault_config: Account<'info, VaultConfig>,
}

pub fn has_finalized(ctx: Context<PeriodQuery>, t: u64) -> Result<bool> {
    let period_cfg = ctx.accounts.vault_config.period_config()?;
    let now = Clock::get()?.unix_timestamp as u64;
    Ok(period_cfg.has_finalized(t, now))
}

pub fn current_overwrite_period_started_at(ctx: Context<PeriodQuery>) -> Result<u64> {
    let period_cfg = ctx.accounts.vault_config.period_config()?;
    let now = Clock::get()?.unix_timestamp as u64;
    Ok(period_cfg.current_overwrite_period_started_at(now))
}

pub fn period_end_on_or_after(ctx: Context<PeriodQuery>, p: u64) -> Result<u64> {
    let period_cfg = ctx.accounts.vault_config.period_config()?;
    Ok(period_cfg.period_end_on_or_after(p))
}
