#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod controller;
pub mod engine;
pub mod error;
pub mod instructions;
pub mod math;
pub mod state;
pub mod utils;

use instructions::*;
use state::observation::Observation;

declare_id!("TWABctrLLer11111111111111111111111111111111");

#[program]
pub mod twab_controller {
    use super::*;

    pub fn initialize_vault(
        ctx: Context<InitializeVault>,
        period_length: u64,
        period_offset: u64,
    ) -> Result<()> {
        instructions::initialize_vault::initialize_vault(ctx, period_length, period_offset)
    }

    pub fn initialize_account(ctx: Context<InitializeAccount>) -> Result<()> {
        instructions::initialize_account::initialize_account(ctx)
    }

    pub fn mint(ctx: Context<Mint>, amount: u128) -> Result<()> {
        instructions::mint::mint(ctx, amount)
    }

    pub fn burn(ctx: Context<Burn>, amount: u128) -> Result<()> {
        instructions::burn::burn(ctx, amount)
    }

    pub fn transfer(ctx: Context<Transfer>, amount: u128) -> Result<()> {
        instructions::transfer::transfer(ctx, amount)
    }

    pub fn delegate(ctx: Context<Delegate>, new_delegate: Pubkey) -> Result<()> {
        instructions::delegate::delegate(ctx, new_delegate)
    }

    pub fn sponsor(ctx: Context<Sponsor>) -> Result<()> {
        instructions::sponsor::sponsor(ctx)
    }

    pub fn balance_at(ctx: Context<AccountQuery>, t: u64) -> Result<u128> {
        instructions::queries::balance_at(ctx, t)
    }

    pub fn twab_between(ctx: Context<AccountQuery>, t0: u64, t1: u64) -> Result<u128> {
        instructions::queries::twab_between(ctx, t0, t1)
    }

    pub fn get_newest_observation(ctx: Context<AccountQuery>) -> Result<Observation> {
        instructions::queries::get_newest_observation(ctx)
    }

    pub fn get_oldest_observation(ctx: Context<AccountQuery>) -> Result<Observation> {
        instructions::queries::get_oldest_observation(ctx)
    }

    pub fn has_finalized(ctx: Context<PeriodQuery>, t: u64) -> Result<bool> {
        instructions::queries::has_finalized(ctx, t)
    }

    pub fn current_overwrite_period_started_at(ctx: Context<PeriodQuery>) -> Result<u64> {
        instructions::queries::current_overwrite_period_started_at(ctx)
    }

    pub fn period_end_on_or_after(ctx: Context<PeriodQuery>, p: u64) -> Result<u64> {
        instructions::queries::period_end_on_or_after(ctx, p)
    }
}