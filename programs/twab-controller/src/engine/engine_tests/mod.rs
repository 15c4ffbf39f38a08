//! Integration-level tests for the TWAB engine: the write path (period
//! overwrite, balance mutation) and the read path (`balance_at`,
//! `twab_between`, the finalization guard, history loss).

pub mod finalization_tests;
pub mod helpers;
pub mod twab_between_tests;
