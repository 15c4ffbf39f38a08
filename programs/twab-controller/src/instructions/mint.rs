use anchor_lang::prelude::*;

use crate::controller::{mint as mint_inner, Party};
use crate::error::TwabError;
use crate::state::account::TwabAccount;
use crate::state::delegation::DelegationRecord;
use crate::state::vault_config::VaultConfig;
use crate::utils::constants::{
    DELEGATION_SEED, MAX_AMOUNT, SPONSORSHIP_ADDRESS, TOTAL_SUPPLY_TWAB_SEED, USER_TWAB_SEED,
    VAULT_CONFIG_SEED,
};
use crate::utils::events::{
    IncreasedBalance, IncreasedTotalSupply, ObservationRecorded, TotalSupplyObservationRecorded,
};

#[derive(Accounts)]
pub struct Mint<'info> {
    #[account(
        seeds = [VAULT_CONFIG_SEED, mint.key().as_ref()],
        bump = vault_config.bump,
        has_one = authority,
    )]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(mut, seeds = [TOTAL_SUPPLY_TWAB_SEED, mint.key().as_ref()], bump)]
    pub total_supply: AccountLoader<'info, TwabAccount>,

    #[account(mut, seeds = [USER_TWAB_SEED, mint.key().as_ref(), holder.key().as_ref()], bump)]
    pub to: AccountLoader<'info, TwabAccount>,

    /// Present only when `to` has delegated away from self; absence means
    /// self-delegation, the implicit default.
    #[account(seeds = [DELEGATION_SEED, mint.key().as_ref(), holder.key().as_ref()], bump)]
    pub to_delegation: Option<Account<'info, DelegationRecord>>,

    /// Required exactly when `to_delegation` names a delegate other than
    /// `holder` or the sponsorship sentinel.
    #[account(mut)]
    pub to_delegate: Option<AccountLoader<'info, TwabAccount>>,

    /// CHECK: opaque namespace key, never read or written by this program.
    pub mint: UncheckedAccount<'info>,

    /// CHECK: the holder receiving `amount`; need not sign a mint.
    pub holder: UncheckedAccount<'info>,

    pub authority: Signer<'info>,
}

pub fn mint(ctx: Context<Mint>, amount: u128) -> Result<()> {
    require!(amount <= MAX_AMOUNT, TwabError::AmountOutOfRange);
    let period_cfg = ctx.accounts.vault_config.period_config()?;
    let now = Clock::get()?.unix_timestamp as u64;

    let to_delegate_pubkey = ctx
        .accounts
        .to_delegation
        .as_ref()
        .map(|record| record.delegate)
        .unwrap_or_else(|| ctx.accounts.holder.key());

    let mut to_guard = ctx.accounts.to.load_mut()?;
    let mut to_delegate_guard = match ctx.accounts.to_delegate.as_ref() {
        Some(loader) => Some(loader.load_mut()?),
        None => None,
    };
    let mut total_supply_guard = ctx.accounts.total_supply.load_mut()?;

    let to_is_self = to_delegate_pubkey == ctx.accounts.holder.key();
    let to_is_sponsor = to_delegate_pubkey == SPONSORSHIP_ADDRESS;

    let writes = mint_inner(
        &mut total_supply_guard,
        Party {
            account: &mut to_guard,
            delegate: to_delegate_pubkey,
            delegate_account: to_delegate_guard.as_deref_mut(),
        },
        &period_cfg,
        now,
        amount,
    )?;

    emit!(IncreasedBalance {
        vault: ctx.accounts.mint.key(),
        user: ctx.accounts.holder.key(),
        amount,
        delegate_amount: if to_is_self { amount } else { 0 },
    });
    if let Some(write) = writes.to {
        emit!(ObservationRecorded {
            vault: ctx.accounts.mint.key(),
            user: ctx.accounts.holder.key(),
            balance: to_guard.balance,
            delegate_balance: to_guard.delegate_balance,
            is_new: write.is_new,
            observation: write.observation,
        });
    }
    if let Some(write) = writes.to_delegate {
        let delegate_guard = to_delegate_guard.as_ref().unwrap();
        emit!(ObservationRecorded {
            vault: ctx.accounts.mint.key(),
            user: to_delegate_pubkey,
            balance: delegate_guard.balance,
            delegate_balance: delegate_guard.delegate_balance,
            is_new: write.is_new,
            observation: write.observation,
        });
    }
    emit!(IncreasedTotalSupply {
        vault: ctx.accounts.mint.key(),
        amount,
        delegate_amount: if to_is_sponsor { 0 } else { amount },
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
