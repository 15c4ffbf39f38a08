use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

use crate::math::ring;
use crate::state::observation::Observation;
use crate::utils::constants::RING_CAPACITY;

/// Per-(vault, holder) record (spec §3 Account). The same layout backs both
/// ordinary user accounts and each vault's total-supply account (spec §3:
/// "Total-supply account ... same structure as an Account"); which one a
/// given `TwabAccount` is, is determined entirely by its PDA seeds, not by
/// any field in the struct itself.
#[account(zero_copy)]
#[derive(InitSpace)]
#[repr(C)]
pub struct TwabAccount {
    /// Namespace this account lives in. Redundant with the PDA seeds but kept
    /// inline so account-only code (tests, the engine) never needs the PDA
    /// derivation to reason about identity.
    pub vault: Pubkey,
    /// The holder this account tracks; `Pubkey::default()` for a vault's
    /// total-supply account, which has no single holder.
    pub holder: Pubkey,
    /// Current raw token balance.
    pub balance: u128,
    /// Current delegate balance — the portion of `balance` contributing to
    /// weighted averages (spec GLOSSARY).
    pub delegate_balance: u128,
    /// Ring slot the next **new** observation will occupy.
    pub next_index: u16,
    /// Count of initialized ring slots, in `0..=RING_CAPACITY`.
    pub cardinality: u16,
    pub bump: u8,
    /// Brings the header to 112 bytes (a multiple of `Observation`'s 8-byte
    /// alignment) so `INIT_SPACE` matches `size_of::<Self>()` exactly — the
    /// compiler would otherwise insert 4 bytes of implicit padding here that
    /// `#[derive(InitSpace)]` can't see, under-allocating every `init`.
    pub _padding: [u8; 11],
    pub ring: [Observation; RING_CAPACITY],
}

impl TwabAccount {
    /// Returns the physical index and value of the oldest initialized
    /// observation (spec §4.4). Caller must ensure `cardinality > 0`.
    pub fn oldest(&self) -> (u16, Observation) {
        let index = if (self.cardinality as usize) < RING_CAPACITY {
            0
        } else {
            self.next_index
        };
        (index, self.ring[index as usize])
    }

    /// Returns the physical index and value of the newest observation, or a
    /// zero sentinel at slot `RING_CAPACITY - 1` if the account has never
    /// recorded one (spec §4.4).
    pub fn newest(&self) -> (u16, Observation) {
        if self.cardinality == 0 {
            return ((RING_CAPACITY - 1) as u16, Observation::ZERO);
        }
        let index = ring::newest_index(self.next_index, RING_CAPACITY as u16);
        (index, self.ring[index as usize])
    }

    /// Places `observation` at `next_index`, advances `next_index`, and bumps
    /// `cardinality` up to but not beyond `RING_CAPACITY` (spec §4.4 Append).
    pub fn append(&mut self, observation: Observation) {
        let index = self.next_index as usize;
        self.ring[index] = observation;
        self.next_index = ring::next_index(self.next_index, RING_CAPACITY as u16);
        if (self.cardinality as usize) < RING_CAPACITY {
            self.cardinality += 1;
        }
    }

    /// Replaces the current newest slot in place; no header change (spec
    /// §4.4 Overwrite). No-op on header fields is intentional: the newest
    /// observation's period hasn't ended, so it isn't a new checkpoint.
    pub fn overwrite_newest(&mut self, observation: Observation) {
        let (index, _) = self.newest();
        self.ring[index as usize] = observation;
    }
}

#[cfg(test)]
#[path = "state_tests/account_tests/mod.rs"]
mod account_tests;
