//! Simple-interest accrual over ledger sequence numbers.
//!
//! Everything here is host-independent: the current height is passed in by
//! the caller, so the arithmetic can be exercised without an `Env`.

use crate::{BLOCKS_PER_YEAR, BPS_DENOMINATOR, INTEREST_RATE_BPS};

const YEAR_IN_BPS: i128 = BLOCKS_PER_YEAR * BPS_DENOMINATOR;

/// Blocks elapsed since `accrual_start`, clamped at zero.
pub fn elapsed_blocks(accrual_start: Option<u32>, now: u32) -> u32 {
    match accrual_start {
        Some(start) => now.saturating_sub(start),
        None => 0,
    }
}

/// Interest earned by `balance` between `accrual_start` and `now`.
///
/// `balance * INTEREST_RATE_BPS * elapsed / (BLOCKS_PER_YEAR * 10_000)`,
/// floored. An account that was never locked earns nothing.
///
/// The balance is split into whole years-in-bps and a remainder so the
/// product never exceeds `i128` for the remainder part; the whole part
/// saturates instead of wrapping.
pub fn accrued_interest(balance: i128, accrual_start: Option<u32>, now: u32) -> i128 {
    let elapsed = elapsed_blocks(accrual_start, now);
    if balance <= 0 || elapsed == 0 {
        return 0;
    }

    let rate_time = INTEREST_RATE_BPS * elapsed as i128;
    let whole = (balance / YEAR_IN_BPS).saturating_mul(rate_time);
    // remainder < YEAR_IN_BPS, so remainder * rate * u32::MAX fits
    let fraction = (balance % YEAR_IN_BPS) * rate_time / YEAR_IN_BPS;

    whole.saturating_add(fraction)
}
