use anchor_lang::prelude::*;

use crate::state::account::TwabAccount;
use crate::utils::constants::{USER_TWAB_SEED, VAULT_CONFIG_SEED};
use crate::state::vault_config::VaultConfig;

/// Creates the `TwabAccount` for a single `(vault, holder)` pair. A holder's
/// account self-delegates until a `Delegate`/`Sponsor` instruction records
/// otherwise (spec §3 "Delegation map" default).
#[derive(Accounts)]
pub struct InitializeAccount<'info> {
    #[account(seeds = [VAULT_CONFIG_SEED, mint.key().as_ref()], bump = vault_config.bump)]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(
        init,
        payer = payer,
        space = 8 + TwabAccount::INIT_SPACE,
        seeds = [USER_TWAB_SEED, mint.key().as_ref(), holder.key().as_ref()],
        bump,
    )]
    pub twab_account: AccountLoader<'info, TwabAccount>,

    /// CHECK: opaque namespace key, never read or written by this program.
    pub mint: UncheckedAccount<'info>,

    /// CHECK: the holder this account tracks; need not sign its own creation.
    pub holder: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_account(ctx: Context<InitializeAccount>) -> Result<()> {
    let mut twab_account = ctx.accounts.twab_account.load_init()?;
    twab_account.vault = ctx.accounts.mint.key();
    twab_account.holder = ctx.accounts.holder.key();
    twab_account.bump = ctx.bumps.twab_account;
    Ok(())
}
