use anchor_lang::prelude::Pubkey;

use super::helpers::{account_for, period_cfg, total_supply, PERIOD_OFFSET};
use crate::controller::{delegate, mint, sponsor, Party};
use crate::utils::constants::SPONSORSHIP_ADDRESS;

#[test]
fn delegate_redirects_weight_matches_scenario_5() {
    let mut ts = total_supply();
    let mut alice = account_for(Pubkey::new_unique());
    let mut bob = account_for(Pubkey::new_unique());
    let alice_holder = alice.holder;
    let bob_holder = bob.holder;
    let cfg = period_cfg();

    {
        let to = Party {
            account: &mut alice,
            delegate: alice_holder,
            delegate_account: None,
        };
        mint(&mut ts, to, &cfg, PERIOD_OFFSET, 1_000).unwrap();
    }

    delegate(
        &mut ts,
        &mut alice,
        alice_holder,
        None,
        bob_holder,
        Some(&mut bob),
        &cfg,
        PERIOD_OFFSET + 86_400,
    )
    .unwrap();

    assert_eq!(alice.balance, 1_000);
    assert_eq!(alice.delegate_balance, 0);
    assert_eq!(bob.delegate_balance, 1_000);
    assert_eq!(ts.delegate_balance, 1_000);
}

#[test]
fn sponsorship_redirects_total_supply_matches_scenario_2() {
    let mut ts = total_supply();
    let mut alice = account_for(Pubkey::new_unique());
    let alice_holder = alice.holder;
    let cfg = period_cfg();

    {
        let to = Party {
            account: &mut alice,
            delegate: alice_holder,
            delegate_account: None,
        };
        mint(&mut ts, to, &cfg, PERIOD_OFFSET, 1_000).unwrap();
    }

    sponsor(&mut ts, &mut alice, alice_holder, None, &cfg, PERIOD_OFFSET + 86_400).unwrap();

    assert_eq!(alice.balance, 1_000);
    assert_eq!(alice.delegate_balance, 0);
    assert_eq!(ts.balance, 1_000);
    assert_eq!(ts.delegate_balance, 0);
}

#[test]
fn delegate_to_same_delegate_is_rejected() {
    let mut ts = total_supply();
    let mut alice = account_for(Pubkey::new_unique());
    let alice_holder = alice.holder;
    let cfg = period_cfg();

    let result = delegate(
        &mut ts,
        &mut alice,
        alice_holder,
        None,
        alice_holder,
        None,
        &cfg,
        PERIOD_OFFSET,
    );
    assert!(result.is_err());
}

#[test]
fn mint_to_sponsored_holder_does_not_move_total_supply_delegate_balance() {
    let mut ts = total_supply();
    let mut alice = account_for(Pubkey::new_unique());
    let cfg = period_cfg();

    {
        let to = Party {
            account: &mut alice,
            delegate: SPONSORSHIP_ADDRESS,
            delegate_account: None,
        };
        mint(&mut ts, to, &cfg, PERIOD_OFFSET, 1_000).unwrap();
    }

    assert_eq!(alice.balance, 1_000);
    assert_eq!(alice.delegate_balance, 0);
    assert_eq!(ts.balance, 1_000);
    assert_eq!(ts.delegate_balance, 0);
}

#[test]
fn moving_from_sponsored_to_unsponsored_increases_total_supply_delegate_balance() {
    let mut ts = total_supply();
    let mut alice = account_for(Pubkey::new_unique());
    let mut bob = account_for(Pubkey::new_unique());
    let bob_holder = bob.holder;
    let cfg = period_cfg();

    {
        let to = Party {
            account: &mut alice,
            delegate: SPONSORSHIP_ADDRESS,
            delegate_account: None,
        };
        mint(&mut ts, to, &cfg, PERIOD_OFFSET, 1_000).unwrap();
    }
    assert_eq!(ts.delegate_balance, 0);

    delegate(
        &mut ts,
        &mut alice,
        SPONSORSHIP_ADDRESS,
        None,
        bob_holder,
        Some(&mut bob),
        &cfg,
        PERIOD_OFFSET + 86_400,
    )
    .unwrap();

    assert_eq!(bob.delegate_balance, 1_000);
    assert_eq!(ts.delegate_balance, 1_000);
}
