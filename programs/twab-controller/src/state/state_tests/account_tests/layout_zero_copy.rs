use std::mem::{align_of, size_of};

use crate::state::account::TwabAccount;
use crate::state::observation::Observation;
use crate::utils::constants::RING_CAPACITY;

#[test]
fn observation_size_matches_storage_width() {
    // u64 timestamp + U192 (3 x u64) cumulative_balance.
    assert_eq!(size_of::<Observation>(), 8 + 24);
}

#[test]
fn twab_account_size_is_header_plus_ring() {
    let header_fields = 32 + 32 + 16 + 16 + 2 + 2 + 1 + 11;
    let align = align_of::<Observation>();
    let header_aligned = (header_fields + align - 1) / align * align;
    let ring = size_of::<Observation>() * RING_CAPACITY;
    let struct_align = align_of::<TwabAccount>();
    let raw = header_aligned + ring;
    let expected = (raw + struct_align - 1) / struct_align * struct_align;
    assert_eq!(size_of::<TwabAccount>(), expected);
}

#[test]
fn init_space_matches_size_of() {
    // `init`'s `space = 8 + TwabAccount::INIT_SPACE` allocates this many
    // bytes; `AccountLoader::load_init`/`load_mut` cast the account data via
    // `bytemuck`, which requires `data[8..].len() == size_of::<Self>()`
    // exactly. `#[derive(InitSpace)]` sums declared field widths, which only
    // equals `size_of` when the header has no *implicit* compiler-inserted
    // padding — i.e. when the declared padding field already brings the
    // header to a multiple of `Observation`'s alignment.
    assert_eq!(
        8 + TwabAccount::INIT_SPACE,
        8 + size_of::<TwabAccount>()
    );
}

#[test]
fn twab_account_alignment_matches_its_widest_field() {
    // `#[repr(C)]` takes the alignment of its widest field; `balance` and
    // `delegate_balance` are u128, so the struct inherits u128's alignment.
    assert_eq!(align_of::<TwabAccount>(), align_of::<u128>());
}
