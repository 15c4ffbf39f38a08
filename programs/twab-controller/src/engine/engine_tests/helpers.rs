use anchor_lang::prelude::Pubkey;

use crate::engine::period::PeriodConfig;
use crate::state::account::TwabAccount;
use crate::state::observation::Observation;
use crate::utils::constants::RING_CAPACITY;

pub(crate) const PERIOD_LENGTH: u64 = 86_400;
pub(crate) const PERIOD_OFFSET: u64 = 864_000;

pub(crate) fn period_cfg() -> PeriodConfig {
    PeriodConfig::new(PERIOD_LENGTH, PERIOD_OFFSET).unwrap()
}

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
