use anchor_lang::prelude::Pubkey;
use std::mem::{size_of, MaybeUninit};
use std::ptr;

use crate::state::account::TwabAccount;
use crate::state::observation::Observation;
use crate::utils::constants::RING_CAPACITY;

/// Zeroed-out fixture with deterministic identity fields. Explicit field list
/// so a future schema change forces every call site to account for it.
pub(crate) fn empty_account() -> TwabAccount {
    TwabAccount {
        vault: Pubkey::new_unique(),
        holder: Pubkey::new_unique(),
        balance: 0,
        delegate_balance: 0,
        next_index: 0,
        cardinality: 0,
        bump: 0,
        _padding: [0; 11],
        ring: [Observation::ZERO; RING_CAPACITY],
    }
}

pub(crate) fn obs(timestamp: u64, cumulative: u128) -> Observation {
    Observation::new(timestamp, crate::math::U192::from_u128(cumulative))
}

/// Pushes `n` deterministic, strictly-increasing observations via `append`.
pub(crate) fn fill_with_sequence(account: &mut TwabAccount, n: usize) {
    for i in 0..n {
        account.append(obs(1_000 + i as u64, (i as u128) * 10));
    }
}

pub(crate) fn account_to_bytes(account: &TwabAccount) -> Vec<u8> {
    let mut bytes = vec![0u8; size_of::<TwabAccount>()];
    unsafe {
        ptr::copy_nonoverlapping(
            (account as *const TwabAccount) as *const u8,
            bytes.as_mut_ptr(),
            bytes.len(),
        );
    }
    bytes
}

pub(crate) fn account_from_bytes(bytes: &[u8]) -> TwabAccount {
    assert_eq!(bytes.len(), size_of::<TwabAccount>());
    let mut uninit = MaybeUninit::<TwabAccount>::uninit();
    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr(), uninit.as_mut_ptr() as *mut u8, bytes.len());
        uninit.assume_init()
    }
}
