use anchor_lang::prelude::*;

use crate::state::vault_config::VaultConfig;
use crate::utils::constants::{TOTAL_SUPPLY_TWAB_SEED, VAULT_CONFIG_SEED};
use crate::state::account::TwabAccount;

/// Creates a vault's `VaultConfig` and its total-supply `TwabAccount` in one
/// instruction — the two are inseparable in practice, since no user account
/// under a vault can exist before its total-supply counterpart does.
#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + VaultConfig::INIT_SPACE,
        seeds = [VAULT_CONFIG_SEED, mint.key().as_ref()],
        bump,
    )]
    pub vault_config: Account<'info, VaultConfig>,

    #[account(
        init,
        payer = authority,
        space = 8 + TwabAccount::INIT_SPACE,
        seeds = [TOTAL_SUPPLY_TWAB_SEED, mint.key().as_ref()],
        bump,
    )]
    pub total_supply: AccountLoader<'info, TwabAccount>,

    /// CHECK: opaque namespace key, never read or written by this program.
    pub mint: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_vault(
    ctx: Context<InitializeVault>,
    period_length: u64,
    period_offset: u64,
) -> Result<()> {
    let vault_config = &mut ctx.accounts.vault_config;
    vault_config.set_inner(VaultConfig::new(
        ctx.accounts.mint.key(),
        ctx.accounts.authority.key(),
        period_length,
        period_offset,
        ctx.bumps.vault_config,
    )?);

    let total_supply = &mut ctx.accounts.total_supply.load_init()?;
    total_supply.vault = ctx.accounts.mint.key();
    total_supply.holder = Pubkey::default();
    total_supply.bump = ctx.bumps.total_supply;

    Ok(())
}
