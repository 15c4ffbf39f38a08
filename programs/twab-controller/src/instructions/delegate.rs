use anchor_lang::prelude::*;

use crate::controller::delegate as delegate_inner;
use crate::state::account::TwabAccount;
use crate::state::delegation::DelegationRecord;
use crate::state::vault_config::VaultConfig;
use crate::utils::constants::{DELEGATION_SEED, TOTAL_SUPPLY_TWAB_SEED, USER_TWAB_SEED, VAULT_CONFIG_SEED};
use crate::utils::events::{Delegated, ObservationRecorded, TotalSupplyObservationRecorded};

/// Re-points `holder`'s delegate weight from whichever delegate the account's
/// `DelegationRecord` currently names (or `holder` itself, if the record has
/// never been written) to `new_delegate` (spec §4.7.2). `sponsor` is this
/// same instruction with `new_delegate` pinned to the sponsorship sentinel.
#[derive(Accounts)]
pub struct Delegate<'info> {
    #[account(seeds = [VAULT_CONFIG_SEED, mint.key().as_ref()], bump = vault_config.bump)]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(mut, seeds = [TOTAL_SUPPLY_TWAB_SEED, mint.key().as_ref()], bump)]
    pub total_supply: AccountLoader<'info, TwabAccount>,

    #[account(mut, seeds = [USER_TWAB_SEED, mint.key().as_ref(), holder.key().as_ref()], bump, has_one = holder)]
    pub from: AccountLoader<'info, TwabAccount>,

    /// Created on a holder's first delegation away from self;
    /// `delegate == Pubkey::default()` is the on-chain sentinel for
    /// self-delegation, since `init_if_needed` zero-initializes new accounts.
    #[account(
        init_if_needed,
        payer = holder,
        space = 8 + DelegationRecord::INIT_SPACE,
        seeds = [DELEGATION_SEED, mint.key().as_ref(), holder.key().as_ref()],
        bump,
    )]
    pub delegation: Account<'info, DelegationRecord>,

    /// Required unless the current delegate is `holder` itself or the
    /// sponsorship sentinel.
    #[account(mut)]
    pub current_delegate_account: Option<AccountLoader<'info, TwabAccount>>,

    /// Required unless `new_delegate` is `holder` itself or the sponsorship
    /// sentinel.
    #[account(mut)]
    pub new_delegate_account: Option<AccountLoader<'info, TwabAccount>>,

    /// CHECK: opaque namespace key, never read or written by this program.
    pub mint: UncheckedAccount<'info>,

    pub holder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn delegate(ctx: Context<Delegate>, new_delegate: Pubkey) -> Result<()> {
    let period_cfg = ctx.accounts.vault_config.period_config()?;
    let now = Clock::get()?.unix_timestamp as u64;
    let holder = ctx.accounts.holder.key();

    let current_delegate = if ctx.accounts.delegation.delegate == Pubkey::default() {
        holder
    } else {
        ctx.accounts.delegation.delegate
    };

    let mut from_guard = ctx.accounts.from.load_mut()?;
    let mut current_delegate_guard = match ctx.accounts.current_delegate_account.as_ref() {
        Some(loader) => Some(loader.load_mut()?),
        None => None,
    };
    let mut new_delegate_guard = match ctx.accounts.new_delegate_account.as_ref() {
        Some(loader) => Some(loader.load_mut()?),
        None => None,
    };
    let mut total_supply_guard = ctx.accounts.total_supply.load_mut()?;

    let writes = delegate_inner(
        &mut total_supply_guard,
        &mut from_guard,
        current_delegate,
        current_delegate_guard.as_deref_mut(),
        new_delegate,
        new_delegate_guard.as_deref_mut(),
        &period_cfg,
        now,
    )?;

    let vault = ctx.accounts.mint.key();
    ctx.accounts.delegation.set_inner(DelegationRecord::new(
        vault,
        holder,
        new_delegate,
        ctx.bumps.delegation,
    ));

    emit!(Delegated { vault, delegator: holder, delegate: new_delegate });

    if let Some(write) = writes.from.or(writes.to) {
        emit!(ObservationRecorded {
            vault,
            user: holder,
            balance: from_guard.balance,
            delegate_balance: from_guard.delegate_balance,
            is_new: write.is_new,
            observation: write.observation,
        });
    }
    if let Some(write) = writes.from_delegate {
        let guard = current_delegate_guard.as_ref().unwrap();
        emit!(ObservationRecorded {
            vault,
            user: current_delegate,
            balance: guard.balance,
            delegate_balance: guard.delegate_balance,
            is_new: write.is_new,
            observation: write.observation,
        });
    }
    if let Some(write) = writes.to_delegate {
        let guard = new_delegate_guard.as_ref().unwrap();
        emit!(ObservationRecorded {
            vault,
            user: new_delegate,
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
