use anchor_lang::prelude::*;

/// Number of observation slots kept per account ring. Representative value
/// from spec; tunable at build time, independent of the overwrite and
/// finalization rules.
pub const RING_CAPACITY: usize = 365;

/// Highest representable timestamp (spec: u48).
pub const MAX_TIMESTAMP: u64 = (1u64 << 48) - 1;

/// Highest representable instruction-boundary amount (spec: u96).
pub const MAX_AMOUNT: u128 = (1u128 << 96) - 1;

/// Highest representable balance / delegate balance (spec: u112).
pub const MAX_BALANCE: u128 = (1u128 << 112) - 1;

/// Sentinel delegate address that excludes a position's weight from
/// total-supply delegate balance (spec §6).
pub const SPONSORSHIP_ADDRESS: Pubkey = Pubkey::new_from_array([1u8; 32]);

/// PDA seed constants
pub const VAULT_CONFIG_SEED: &[u8] = b"vault_config";
pub const USER_TWAB_SEED: &[u8] = b"user_twab";
pub const TOTAL_SUPPLY_TWAB_SEED: &[u8] = b"total_supply_twab";
pub const DELEGATION_SEED: &[u8] = b"delegation";
