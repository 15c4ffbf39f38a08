pub mod period;
pub mod twab;

pub use period::PeriodConfig;
pub use twab::{balance_at, decrease, increase, previous_or_at, twab_between, ObservationWrite, PreviousOrAt};

#[cfg(test)]
pub mod engine_tests;
