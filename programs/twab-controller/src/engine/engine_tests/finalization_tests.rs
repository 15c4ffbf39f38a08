use super::helpers::period_cfg;
use crate::engine::period::PeriodConfig;

const PERIOD_OFFSET: u64 = 864_000;
const PERIOD_LENGTH: u64 = 86_400;

#[test]
fn query_at_start_of_current_period_is_finalized() {
    let cfg = period_cfg();
    let now = PERIOD_OFFSET + PERIOD_LENGTH * 3 + 12_345;
    let start = cfg.current_overwrite_period_started_at(now);

    assert!(cfg.has_finalized(start, now));
}

#[test]
fn query_one_second_past_period_start_is_not_finalized() {
    let cfg = period_cfg();
    let now = PERIOD_OFFSET + PERIOD_LENGTH * 3 + 12_345;
    let start = cfg.current_overwrite_period_started_at(now);

    assert!(!cfg.has_finalized(start + 1, now));
}

#[test]
fn every_timestamp_up_to_offset_is_finalized_at_genesis() {
    let cfg = PeriodConfig::new(PERIOD_LENGTH, PERIOD_OFFSET).unwrap();
    assert!(cfg.has_finalized(PERIOD_OFFSET, PERIOD_OFFSET));
    assert!(cfg.has_finalized(0, PERIOD_OFFSET));
}

#[test]
fn period_end_on_or_after_is_always_strictly_after_its_input() {
    let cfg = period_cfg();
    for t in [0u64, PERIOD_OFFSET, PERIOD_OFFSET + 1, PERIOD_OFFSET + PERIOD_LENGTH * 5 + 7] {
        assert!(cfg.period_end_on_or_after(t) > t);
    }
}
