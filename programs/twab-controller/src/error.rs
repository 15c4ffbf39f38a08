use anchor_lang::prelude::*;

/// Precondition failures, temporal guards, history loss and arithmetic bounds
/// (spec §7). Kept as one enum, grouped by doc comment rather than split
/// across several enums: the engine and controller share a single failure
/// surface end to end, with no logically separate subsystem to carve off.
#[error_code]
pub enum TwabError {
    // --- Precondition failures ---
    #[msg("Account balance is insufficient for the requested decrease")]
    InsufficientBalance,
    #[msg("Account delegate balance is insufficient for the requested decrease")]
    InsufficientDelegateBalance,
    #[msg("New delegate is identical to the current delegate")]
    SameDelegate,
    #[msg("Start of time range must be at or before its end")]
    InvalidTimeRange,
    #[msg("Holder address cannot be the default Pubkey")]
    InvalidHolder,
    #[msg("Amount exceeds the maximum representable instruction amount")]
    AmountOutOfRange,
    #[msg("Timestamp exceeds the maximum representable observation timestamp")]
    TimestampOutOfRange,
    #[msg("period_length must be greater than zero")]
    InvalidPeriodLength,
    #[msg("period_offset must be greater than zero")]
    InvalidPeriodOffset,

    // --- Temporal guards ---
    #[msg("Requested timestamp falls inside the current, unfinalized overwrite period")]
    TimestampNotFinalized,

    // --- History loss ---
    #[msg("Requested timestamp precedes the oldest observation still held in the ring")]
    InsufficientHistory,

    // --- Arithmetic (programmer error / host-level protection) ---
    #[msg("Balance arithmetic overflowed its configured width")]
    BalanceOverflow,
    #[msg("Cumulative balance arithmetic overflowed its configured width")]
    CumulativeOverflow,
}
