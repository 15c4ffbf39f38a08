use anchor_lang::prelude::*;

/// Delegation map entry (spec §3 "Delegation map"), realized as its own PDA
/// because Solana accounts have no native associative-map type: one
/// `DelegationRecord` per `(vault, holder)`, seeded identically to the
/// holder's `TwabAccount` so the two are always looked up together.
///
/// Absence of this account for a given `(vault, holder)` means "delegating to
/// self", the implicit default (spec §3, §4.7.1) — callers must treat an
/// uninitialized PDA the same as a record with `delegate == holder`.
#[account]
#[derive(InitSpace)]
pub struct DelegationRecord {
    pub vault: Pubkey,
    pub holder: Pubkey,
    pub delegate: Pubkey,
    pub bump: u8,
}

impl DelegationRecord {
    pub fn new(vault: Pubkey, holder: Pubkey, delegate: Pubkey, bump: u8) -> Self {
        Self {
            vault,
            holder,
            delegate,
            bump,
        }
    }
}
