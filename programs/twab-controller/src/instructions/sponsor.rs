use anchor_lang::prelude::*;

use crate::controller::sponsor as sponsor_inner;
use crate::state::account::TwabAccount;
use crate::state::delegation::DelegationRecord;
use crate::state::vault_config::VaultConfig;
use crate::utils::constants::{
    DELEGATION_SEED, SPONSORSHIP_ADDRESS, TOTAL_SUPPLY_TWAB_SEED, USER_TWAB_SEED, VAULT_CONFIG_SEED,
};
use crate::utils::events::{Delegated, ObservationRecorded, TotalSupplyObservationRecorded};

/// `delegate(holder, SPONSORSHIP_ADDRESS)` (spec §6 sponsorship): excludes
/// `holder`'s weight from total-supply delegate balance entirely, rather than
/// redirecting it to another holder's account.
#[derive(Accounts)]
pub struct Sponsor<'info> {
    #[account(seeds = [VAULT_CONFIG_SEED, mint.key().as_ref()], bump = vault_config.bump)]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(mut, seeds = [TOTAL_SUPPLY_TWAB_SEED, mint.key().as_ref()], bump)]
    pub total_supply: AccountLoader<'info, TwabAccount>,

    #[account(mut, seeds = [USER_TWAB_SEED, mint.key().as_ref(), holder.key().as_ref()], bump, has_one = holder)]
    pub from: AccountLoader<'info, TwabAccount>,

    #[account(
        init_if_needed,
        payer = holder,
        space = 8 + DelegationRecord::INIT_SPACE,
        seeds = [DELEGATION_SEED, mint.key().as_ref(), holder.key().as_ref()],
        bump,
    )]
    pub delegation: Account<'info, DelegationRecord>,

    /// Required unless the current delegate is `holder` itself or already
    /// the sponsorship sentinel.
    #[account(mut)]
    pub current_delegate_account: Option<AccountLoader<'info, TwabAccount>>,

    /// CHECK: opaque namespace key, never read or written by this program.
    pub mint: UncheckedAccount<'info>,

    pub holder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn sponsor(ctx: Context<Sponsor>) -> Result<()> {
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
    let mut total_supply_guard = ctx.accounts.total_supply.load_mut()?;

    let writes = sponsor_inner(
        &mut total_supply_guard,
        &mut from_guard,
        current_delegate,
        current_delegate_guard.as_deref_mut(),
        &period_cfg,
        now,
    )?;

    let vault = ctx.accounts.mint.key();
    ctx.accounts.delegation.set_inner(DelegationRecord::new(
        vault,
        holder,
        SPONSORSHIP_ADDRESS,
        ctx.bumps.delegation,
    ));

    emit!(Delegated { vault, delegator: holder, delegate: SPONSORSHIP_ADDRESS });

    if let Some(write) = writes.from {
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
