use anchor_lang::prelude::*;

use crate::controller::{burn as burn_inner, Party};
use crate::error::TwabError;
use crate::state::account::TwabAccount;
use crate::state::delegation::DelegationRecord;
use crate::state::vault_config::VaultConfig;
use crate::utils::constants::{
    DELEGATION_SEED, MAX_AMOUNT, SPONSORSHIP_ADDRESS, TOTAL_SUPPLY_TWAB_SEED, USER_TWAB_SEED,
    VAULT_CONFIG_SEED,
};
use crate::utils::events::{
    DecreasedBalance, DecreasedTotalSupply, ObservationRecorded, TotalSupplyObservationRecorded,
};

#[derive(Accounts)]
pub struct Burn<'info> {
    #[account(seeds = [VAULT_CONFIG_SEED, mint.key().as_ref()], bump = vault_config.bump)]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(mut, seeds = [TOTAL_SUPPLY_TWAB_SEED, mint.key().as_ref()], bump)]
    pub total_supply: AccountLoader<'info, TwabAccount>,

    #[account(mut, seeds = [USER_TWAB_SEED, mint.key().as_ref(), holder.key().as_ref()], bump, has_one = holder)]
    pub from: AccountLoader<'info, TwabAccount>,

    #[account(seeds = [DELEGATION_SEED, mint.key().as_ref(), holder.key().as_ref()], bump)]
    pub from_delegation: Option<Account<'info, DelegationRecord>>,

    #[account(mut)]
    pub from_delegate: Option<AccountLoader<'info, TwabAccount>>,

    /// CHECK: opaque namespace key, never read or written by this program.
    pub mint: UncheckedAccount<'info>,

    pub holder: Signer<'info>,
}

pub fn burn(ctx: Context<Burn>, amount: u128) -> Result<()> {
    require!(amount <= MAX_AMOUNT, TwabError::AmountOutOfRange);
    let period_cfg = ctx.accounts.vault_config.period_config()?;
    let now = Clock::get()?.unix_timestamp as u64;

    let from_delegate_pubkey = ctx
        .accounts
        .from_delegation
        .as_ref()
        .map(|record| record.delegate)
        .unwrap_or_else(|| ctx.accounts.holder.key());

    let mut from_guard = ctx.accounts.from.load_mut()?;
    let mut from_delegate_guard = match ctx.accounts.from_delegate.as_ref() {
        Some(loader) => Some(loader.load_mut()?),
        None => None,
    };
    let mut total_supply_guard = ctx.accounts.total_supply.load_mut()?;

    let from_is_sponsor = from_delegate_pubkey == SPONSORSHIP_ADDRESS;

    let writes = burn_inner(
        &mut total_supply_guard,
        Party {
            account: &mut from_guard,
            delegate: from_delegate_pubkey,
            delegate_account: from_delegate_guard.as_deref_mut(),
        },
        &period_cfg,
        now,
        amount,
    )?;

    emit!(DecreasedBalance {
        vault: ctx.accounts.mint.key(),
        user: ctx.accounts.holder.key(),
        amount,
        delegate_amount: if from_delegate_pubkey == ctx.accounts.holder.key() { amount } else { 0 },
    });
    if let Some(write) = writes.from {
        emit!(ObservationRecorded {
            vault: ctx.accounts.mint.key(),
            user: ctx.accounts.holder.key(),
            balance: from_guard.balance,
            delegate_balance: from_guard.delegate_balance,
            is_new: write.is_new,
            observation: write.observation,
        });
    }
    if let Some(write) = writes.from_delegate {
        let delegate_guard = from_delegate_guard.as_ref().unwrap();
        emit!(ObservationRecorded {
            vault: ctx.accounts.mint.key(),
            user: from_delegate_pubkey,
            balance: delegate_guard.balance,
            delegate_balance: delegate_guard.delegate_balance,
            is_new: write.is_new,
            observation: write.observation,
        });
    }
    emit!(DecreasedTotalSupply {
        vault: ctx.accounts.mint.key(),
        amount,
        delegate_amount: if from_is_sponsor { 0 } else { amount },
    });
    if let Some(write) = writes.total_supply {
        emit!(TotalSupplyObservationRecorded {
            vault: ctx.accounts.mint.key(),
            balance: total_supply_guard.balance,
            delegate_balance: total_supply_guard.delegate_balance,
            is_new: write.is_new,
            observation: write.observation,
        });
    }

    Ok(())
}
