//! The vault-scoped façade: `mint`, `burn`, `transfer`, `delegate`, `sponsor`
//! (spec §4.7). Implemented as plain functions over already-loaded accounts,
//! with no `Context` dependency, so the delegation-dispatch rules (spec
//! §4.7.1/§4.7.2) are unit-testable without constructing Anchor account
//! infrastructure, separate from the `instructions::*` handlers that wire up
//! `Context`.

use anchor_lang::prelude::*;

use crate::engine::period::PeriodConfig;
use crate::engine::twab::{decrease, increase, ObservationWrite};
use crate::error::TwabError;
use crate::state::account::TwabAccount;
use crate::utils::constants::SPONSORSHIP_ADDRESS;

/// One side of a `transfer` (the `from` or `to` party), already resolved by
/// the caller from the delegation map: `delegate_account` is `None` exactly
/// when `delegate == account.holder` (self-delegating — the party's own
/// account carries both balance and delegate balance) or when `delegate ==
/// SPONSORSHIP_ADDRESS` (no account carries delegate weight at all).
pub struct Party<'a> {
    pub account: &'a mut TwabAccount,
    pub delegate: Pubkey,
    pub delegate_account: Option<&'a mut TwabAccount>,
}

impl<'a> Party<'a> {
    fn is_self_delegating(&self) -> bool {
        self.delegate == self.account.holder
    }

    fn is_sponsored(&self) -> bool {
        self.delegate == SPONSORSHIP_ADDRESS
    }
}

/// Per-account observation writes produced by one controller call, in the
/// order the instructions layer should emit `ObservationRecorded` events.
#[derive(Default)]
pub struct ObservationWrites {
    pub from: Option<ObservationWrite>,
    pub from_delegate: Option<ObservationWrite>,
    pub to: Option<ObservationWrite>,
    pub to_delegate: Option<ObservationWrite>,
    pub total_supply: Option<ObservationWrite>,
}

/// Applies `balance_delta`/`delegate_delta` to `account` in a single engine
/// call. Both deltas must carry the same sign (or be zero) — guaranteed by
/// every call site below, since both halves of a single mint/burn/transfer
/// leg move in the same direction.
fn apply_signed(
    account: &mut TwabAccount,
    period_cfg: &PeriodConfig,
    now: u64,
    balance_delta: i128,
    delegate_delta: i128,
) -> Result<Option<ObservationWrite>> {
    debug_assert!(
        balance_delta.signum() * delegate_delta.signum() >= 0,
        "apply_signed requires same-sign deltas"
    );
    if balance_delta >= 0 {
        increase(
            account,
            period_cfg,
            now,
            balance_delta as u128,
            delegate_delta as u128,
        )
    } else {
        decrease(
            account,
            period_cfg,
            now,
            (-balance_delta) as u128,
            (-delegate_delta) as u128,
        )
    }
}

/// `transfer(from, to, amount)` generalized to also realize `mint` (`from =
/// None`) and `burn` (`to = None`) (spec §4.7.1). `total_supply.balance`
/// moves only when exactly one side is `None`; `total_supply.delegate_balance`
/// moves on each present side independently, net of sponsorship — this is
/// the unique behavior consistent with spec §8 invariant 2 (the sum of
/// non-sponsored delegate balances always equals total-supply delegate
/// balance), which the literal dispatch text in §4.7.1 does not spell out
/// for the both-sides-present case.
pub fn transfer(
    total_supply: &mut TwabAccount,
    mut from: Option<Party>,
    mut to: Option<Party>,
    period_cfg: &PeriodConfig,
    now: u64,
    amount: u128,
) -> Result<ObservationWrites> {
    // Spec §4.7: "Transfers to self are no-ops" — not an error, a deliberate
    // early-out before any account is touched.
    if let (Some(f), Some(t)) = (&from, &to) {
        if f.account.holder == t.account.holder {
            return Ok(ObservationWrites::default());
        }
    }

    let mut writes = ObservationWrites::default();
    let mut total_supply_delegate_delta: i128 = 0;

    if let Some(from) = from.as_mut() {
        require!(from.account.balance >= amount, TwabError::InsufficientBalance);
        require!(
            from.account.delegate_balance >= if from.is_self_delegating() { amount } else { 0 },
            TwabError::InsufficientDelegateBalance
        );

        let own_delegate_delta = if from.is_self_delegating() { amount } else { 0 };
        writes.from = decrease(from.account, period_cfg, now, amount, own_delegate_delta)?;

        if !from.is_self_delegating() && !from.is_sponsored() {
            let delegate_account = from
                .delegate_account
                .as_deref_mut()
                .ok_or(TwabError::InvalidHolder)?;
            require!(
                delegate_account.delegate_balance >= amount,
                TwabError::InsufficientDelegateBalance
            );
            writes.from_delegate = decrease(delegate_account, period_cfg, now, 0, amount)?;
        }

        if !from.is_sponsored() {
            total_supply_delegate_delta -= amount as i128;
        }
    }

    if let Some(to) = to.as_mut() {
        let own_delegate_delta = if to.is_self_delegating() { amount } else { 0 };
        writes.to = increase(to.account, period_cfg, now, amount, own_delegate_delta)?;

        if !to.is_self_delegating() && !to.is_sponsored() {
            let delegate_account = to
                .delegate_account
                .as_deref_mut()
                .ok_or(TwabError::InvalidHolder)?;
            writes.to_delegate = increase(delegate_account, period_cfg, now, 0, amount)?;
        }

        if !to.is_sponsored() {
            total_supply_delegate_delta += amount as i128;
        }
    }

    let total_supply_balance_delta: i128 = match (&from, &to) {
        (None, Some(_)) => amount as i128,
        (Some(_), None) => -(amount as i128),
        _ => 0,
    };

    writes.total_supply = apply_signed(
        total_supply,
        period_cfg,
        now,
        total_supply_balance_delta,
        total_supply_delegate_delta,
    )?;

    Ok(writes)
}

pub fn mint(
    total_supply: &mut TwabAccount,
    to: Party,
    period_cfg: &PeriodConfig,
    now: u64,
    amount: u128,
) -> Result<ObservationWrites> {
    transfer(total_supply, None, Some(to), period_cfg, now, amount)
}

pub fn burn(
    total_supply: &mut TwabAccount,
    from: Party,
    period_cfg: &PeriodConfig,
    now: u64,
    amount: u128,
) -> Result<ObservationWrites> {
    transfer(total_supply, Some(from), None, period_cfg, now, amount)
}

/// `delegate(from, new_delegate)` (spec §4.7.2). Moves the full `from`
/// balance's worth of delegate weight from the current delegate to the new
/// one. `sponsor(from)` is this function called with `new_delegate =
/// SPONSORSHIP_ADDRESS`.
pub fn delegate(
    total_supply: &mut TwabAccount,
    from_account: &mut TwabAccount,
    current_delegate: Pubkey,
    mut current_delegate_account: Option<&mut TwabAccount>,
    new_delegate: Pubkey,
    mut new_delegate_account: Option<&mut TwabAccount>,
    period_cfg: &PeriodConfig,
    now: u64,
) -> Result<ObservationWrites> {
    require!(current_delegate != new_delegate, TwabError::SameDelegate);

    let amount = from_account.balance;
    let holder = from_account.holder;
    let mut writes = ObservationWrites::default();
    let mut total_supply_delta: i128 = 0;

    let current_is_self = current_delegate == holder;
    let current_is_sponsor = current_delegate == SPONSORSHIP_ADDRESS;
    let new_is_self = new_delegate == holder;
    let new_is_sponsor = new_delegate == SPONSORSHIP_ADDRESS;

    if amount > 0 {
        if current_is_self {
            writes.from = decrease(from_account, period_cfg, now, 0, amount)?;
        } else if !current_is_sponsor {
            let account = current_delegate_account
                .as_deref_mut()
                .ok_or(TwabError::InvalidHolder)?;
            writes.from_delegate = decrease(account, period_cfg, now, 0, amount)?;
        }
        if !current_is_sponsor {
            total_supply_delta -= amount as i128;
        }

        if new_is_self {
            writes.to = increase(from_account, period_cfg, now, 0, amount)?;
        } else if !new_is_sponsor {
            let account = new_delegate_account
                .as_deref_mut()
                .ok_or(TwabError::InvalidHolder)?;
            writes.to_delegate = increase(account, period_cfg, now, 0, amount)?;
        }
        if !new_is_sponsor {
            total_supply_delta += amount as i128;
        }
    }

    writes.total_supply = apply_signed(total_supply, period_cfg, now, 0, total_supply_delta)?;

    Ok(writes)
}

pub fn sponsor(
    total_supply: &mut TwabAccount,
    from_account: &mut TwabAccount,
    current_delegate: Pubkey,
    current_delegate_account: Option<&mut TwabAccount>,
    period_cfg: &PeriodConfig,
    now: u64,
) -> Result<ObservationWrites> {
    delegate(
        total_supply,
        from_account,
        current_delegate,
        current_delegate_account,
        SPONSORSHIP_ADDRESS,
        None,
        period_cfg,
        now,
    )
}

#[cfg(test)]
#[path = "controller_tests/mod.rs"]
mod controller_tests;
