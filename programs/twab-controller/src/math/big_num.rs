//! Wide-integer scratch arithmetic for the cumulative balance field.
//!
//! Mirrors `raydium-amm-v3`'s `libraries::big_num` (`construct_uint!`-based
//! `U128`/`U256` scratch types): account data stores the narrowest native
//! width that fits, wide types exist only to carry an intermediate
//! product/sum without overflow.

use anchor_lang::prelude::*;
use uint::construct_uint;

construct_uint! {
    /// 256-bit scratch integer. Four u64 words, little-endian.
    pub struct U256(4);
}

/// Storage representation of the 160-bit `cumulative_balance` field.
///
/// Three u64 words (192 bits of capacity) give headroom above the 160-bit
/// bound spec.md §4.1 derives from `balance (112-bit) * elapsed (48-bit)`;
/// the extra 32 bits are slack, not a relied-upon invariant. Derives both
/// `Pod`/`Zeroable` (for zero-copy ring storage) and `AnchorSerialize`/
/// `AnchorDeserialize` (for embedding in `#[event]` payloads).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Default,
    bytemuck::Pod,
    bytemuck::Zeroable,
    AnchorSerialize,
    AnchorDeserialize,
)]
#[repr(C)]
pub struct U192 {
    pub words: [u64; 3],
}

impl anchor_lang::Space for U192 {
    const INIT_SPACE: usize = 8 * 3;
}

impl U192 {
    pub const ZERO: Self = Self { words: [0, 0, 0] };

    pub fn from_u128(value: u128) -> Self {
        Self {
            words: [value as u64, (value >> 64) as u64, 0],
        }
    }

    pub fn to_u256(self) -> U256 {
        U256([self.words[0], self.words[1], self.words[2], 0])
    }

    /// Narrows a `U256` scratch result back into storage width. Panics (via
    /// `debug_assert`) in debug builds if the value actually needed more than
    /// 192 bits, which would mean a caller violated the 160-bit invariant the
    /// engine relies on; in release builds the high word is simply dropped.
    pub fn from_u256_truncate(value: U256) -> Self {
        debug_assert_eq!(value.0[3], 0, "U256 value exceeds 192-bit storage width");
        Self {
            words: [value.0[0], value.0[1], value.0[2]],
        }
    }

    /// `a + balance * elapsed_seconds`, the extrapolation step of spec §4.1.
    /// `balance` is at most 112 bits and `elapsed_seconds` at most 48 bits, so
    /// the product fits in 160 bits and the sum of a 160-bit base with it
    /// fits comfortably inside 192 bits — this is exactly the invariant
    /// spec.md §4.1 documents.
    pub fn checked_extrapolate(self, balance: u128, elapsed_seconds: u64) -> Option<Self> {
        let product = U256::from(balance) * U256::from(elapsed_seconds);
        let sum = self.to_u256().checked_add(product)?;
        if sum.0[3] != 0 {
            return None;
        }
        Some(Self::from_u256_truncate(sum))
    }

    /// Integer-division difference `(b - a) / dt`, used by both
    /// `balance_at` and `twab_between` (spec §4.6.3/§4.6.4). Returns `None`
    /// only if `b < a` (caller bug) or `dt == 0` (caller bug; division by
    /// zero is always guarded before calling this).
    pub fn checked_diff_div(newer: Self, older: Self, dt: u64) -> Option<u128> {
        if dt == 0 || newer < older {
            return None;
        }
        let diff = newer.to_u256() - older.to_u256();
        let quotient = diff / U256::from(dt);
        quotient.try_into_u128()
    }
}

impl PartialOrd for U192 {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for U192 {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        // Compare most-significant word first; words are little-endian.
        self.words[2]
            .cmp(&other.words[2])
            .then_with(|| self.words[1].cmp(&other.words[1]))
            .then_with(|| self.words[0].cmp(&other.words[0]))
    }
}

impl U256 {
    pub fn try_into_u128(self) -> Option<u128> {
        if self.0[2] != 0 || self.0[3] != 0 {
            return None;
        }
        Some((self.0[0] as u128) | ((self.0[1] as u128) << 64))
    }
}
