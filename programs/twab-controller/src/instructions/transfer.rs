use anchor_lang::prelude::*;

use crate::controller::{transfer as transfer_inner, Party};
use crate::error::TwabError;
use crate::state::account::TwabAccount;
use crate::state::delegation::DelegationRecord;
use crate::state::vault_config::VaultConfig;
use crate::utils::constants::{
    DELEGATION_SEED, MAX_AMOUNT, TOTAL_SUPPLY_TWAB_SEED, USER_TWAB_SEED, VAULT_CONFIG_SEED,
};
use crate::utils::events::{ObservationRecorded, TotalSupplyObservationRecorded};

#[derive(Accounts)]
pub struct Transfer<'info> {
    #[account(seeds = [VAULT_CONFIG_SEED, mint.key().as_ref()], bump = vault_config.bump)]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(mut, seeds = [TOTAL_SUPPLY_TWAB_SEED, mint.key().as_ref()], bump)]
    pub total_supply: AccountLoader<'info, TwabAccount>,

    #[account(mut, seeds = [USER_TWAB_SEED, mint.key().as_ref(), from_holder.key().as_ref()], bump)]
    pub from: AccountLoader<'info, TwabAccount>,

    #[account(seeds = [DELEGATION_SEED, mint.key().as_ref(), from_holder.key().as_ref()], bump)]
    pub from_delegation: Option<Account<'info, DelegationRecord>>,

    #[account(mut)]
    pub from_delegate: Option<AccountLoader<'info, TwabAccount>>,

    #[account(mut, seeds = [USER_TWAB_SEED, mint.key().as_ref(), to_holder.key().as_ref()], bump)]
    pub to: AccountLoader<'info, TwabAccount>,

    #[account(seeds = [DELEGATION_SEED, mint.key().as_ref(), to_holder.key().as_ref()], bump)]
    pub to_delegation: Option<Account<'info, DelegationRecord>>,

    #[account(mut)]
    pub to_delegate: Option<AccountLoader<'info, TwabAccount>>,

    /// CHECK: opaque namespace key, never read or written by this program.
    pub mint: UncheckedAccount<'info>,

    /// CHECK: seeds anchor for `to`/`to_delegation`; never read directly.
    pub to_holder: UncheckedAccount<'info>,

    pub from_holder: Signer<'info>,
}

pub fn transfer(ctx: Context<Transfer>, amount: u128) -> Result<()> {
    require!(amount <= MAX_AMOUNT, TwabError::AmountOutOfRange);
    // Two distinct PDAs can never share the same holder, so identical account
    // keys here mean `from` and `to` name the same holder; bail out before
    // attempting to borrow the same zero-copy account mutably twice.
    if ctx.accounts.from.key() == ctx.accounts.to.key() {
        return Ok(());
    }

    let period_cfg = ctx.accounts.vault_config.period_config()?;
    let now = Clock::get()?.unix_timestamp as u64;

    let from_delegate_pubkey = ctx
        .accounts
        .from_delegation
        .as_ref()
        .map(|record| record.delegate)
        .unwrap_or_else(|| ctx.accounts.from_holder.key());
    let to_delegate_pubkey = ctx
        .accounts
        .to_delegation
        .as_ref()
        .map(|record| record.delegate)
        .unwrap_or_else(|| ctx.accounts.to_holder.key());

    let mut from_guard = ctx.accounts.from.load_mut()?;
    let mut to_guard = ctx.accounts.to.load_mut()?;
    let mut from_delegate_guard = match ctx.accounts.from_delegate.as_ref() {
        Some(loader) => Some(loader.load_mut()?),
        None => None,
    };
    let mut to_delegate_guard = match ctx.accounts.to_delegate.as_ref() {
        Some(loader) => Some(loader.load_mut()?),
        None => None,
    };
    let mut total_supply_guard = ctx.accounts.total_supply.load_mut()?;

    let writes = transfer_inner(
        &mut total_supply_guard,
        Some(Party {
            account: &mut from_guard,
            delegate: from_delegate_pubkey,
            delegate_account: from_delegate_guard.as_deref_mut(),
        }),
        Some(Party {
            account: &mut to_guard,
            delegate: to_delegate_pubkey,
            delegate_account: to_delegate_guard.as_deref_mut(),
        }),
        &period_cfg,
        now,
        amount,
    )?;

    let vault = ctx.accounts.mint.key();
    if let Some(write) = writes.from {
        emit!(ObservationRecorded {
            vault,
            user: ctx.accounts.from_holder.key(),
            balance: from_guard.balance,
            delegate_balance: from_guard.delegate_balance,
            is_new: write.is_new,
            observation: write.observation,
        });
    }
    if let Some(write) = writes.from_delegate {
        let guard = from_delegate_guard.as_ref().unwrap();
        emit!(ObservationRecorded {
            vault,
            user: from_delegate_pubkey,
            balance: guard.balance,
            delegate_balance: guard.delegate_balance,
            is_new: write.is_new,
            observation: write.observation,
        });
    }
    if let Some(write) = writes.to {
        emit!(ObservationRecorded {
            vault,
            user: ctx.accounts.to_holder.key(),
            balance: to_guard.balance,
            delegate_balance: to_guard.delegate_balance,
            is_new: write.is_new,
            observation: write.observation,
        });
    }
    if let Some(write) = writes.to_delegate {
        let guard = to_delegate_guard.as_ref().unwrap();
        emit!(ObservationRecorded {
            vault,
            user: to_delegate_pubkey,
            balance: guard.balance,
            delegate_balance: guard.delegate_balance,
            is_new: write.is_new,
            observation: write.observation,
        });
    }
    if let Some(write) = writes.total_supply {
        emit!(TotalSupplyObservationRecorded {
            vault,
            balance: total_supply_guard.balance,
            delegate_balance: total_supply_guard.delegate_balance,
            is_new: write.is_new,
            observation: write.observation,
        });
    }

    Ok(())
}
