use anchor_lang::prelude::*;

use crate::engine::period::PeriodConfig;

/// Construction parameters for one vault (spec §6 "Construction
/// parameters"). One `VaultConfig` PDA per mint/vault; every `TwabAccount`
/// and `DelegationRecord` under that vault shares it.
#[account]
#[derive(InitSpace)]
pub struct VaultConfig {
    /// The token mint this vault accounts for.
    pub mint: Pubkey,
    /// Authority permitted to invoke `mint`/`burn`/`transfer` on behalf of
    /// holders (spec §4.7 Controller façade treats the caller of these
    /// operations as trusted, out of scope for access control beyond this
    /// single authority check).
    pub authority: Pubkey,
    pub period_length: u64,
    pub period_offset: u64,
    pub bump: u8,
}

impl VaultConfig {
    pub fn new(
        mint: Pubkey,
        authority: Pubkey,
        period_length: u64,
        period_offset: u64,
        bump: u8,
    ) -> Result<Self> {
        // Validates eagerly so a bad config can never be persisted, even
        // though `period_config()` re-validates on every read — belt and
        // braces around a value that, once wrong, corrupts every account
        // under this vault.
        PeriodConfig::new(period_length, period_offset)?;
        Ok(Self {
            mint,
            authority,
            period_length,
            period_offset,
            bump,
        })
    }

    pub fn period_config(&self) -> Result<PeriodConfig> {
        PeriodConfig::new(self.period_length, self.period_offset)
    }
}
