use anchor_lang::prelude::*;

use crate::state::observation::Observation;

#[event]
pub struct IncreasedBalance {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub amount: u128,
    pub delegate_amount: u128,
}

#[event]
pub struct DecreasedBalance {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub amount: u128,
    pub delegate_amount: u128,
}

#[event]
pub struct IncreasedTotalSupply {
    pub vault: Pubkey,
    pub amount: u128,
    pub delegate_amount: u128,
}

#[event]
pub struct DecreasedTotalSupply {
    pub vault: Pubkey,
    pub amount: u128,
    pub delegate_amount: u128,
}

#[event]
pub struct ObservationRecorded {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub balance: u128,
    pub delegate_balance: u128,
    pub is_new: bool,
    pub observation: Observation,
}

#[event]
pub struct TotalSupplyObservationRecorded {
    pub vault: Pubkey,
    pub balance: u128,
    pub delegate_balance: u128,
    pub is_new: bool,
    pub observation: Observation,
}

#[event]
pub struct Delegated {
    pub vault: Pubkey,
    pub delegator: Pubkey,
    pub delegate: Pubkey,
}
