use super::helpers::{account_from_bytes, account_to_bytes, empty_account, fill_with_sequence};

#[test]
fn round_trips_through_raw_bytes() {
    let mut account = empty_account();
    fill_with_sequence(&mut account, 20);

    let bytes = account_to_bytes(&account);
    let restored = account_from_bytes(&bytes);

    assert_eq!(restored.vault, account.vault);
    assert_eq!(restored.holder, account.holder);
    assert_eq!(restored.cardinality, account.cardinality);
    assert_eq!(restored.next_index, account.next_index);
    assert_eq!(restored.newest().1, account.newest().1);
    assert_eq!(restored.oldest().1, account.oldest().1);
}

#[test]
fn round_trips_after_wraparound() {
    let mut account = empty_account();
    fill_with_sequence(&mut account, crate::utils::constants::RING_CAPACITY + 7);

    let bytes = account_to_bytes(&account);
    let restored = account_from_bytes(&bytes);

    assert_eq!(restored.cardinality as usize, crate::utils::constants::RING_CAPACITY);
    assert_eq!(restored.oldest(), account.oldest());
    assert_eq!(restored.newest(), account.newest());
}
