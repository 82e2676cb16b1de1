//! Vesting arithmetic.
//!
//! ```text
//! elapsed = 0                                   if now < start
//!         = min(n, (now - start) / duration)    otherwise
//! vested  = total                               if elapsed == n
//!         = floor(total * elapsed / n)          otherwise
//! ```
//!
//! `total` is everything the schedule has ever held: released plus the
//! current balance.

use cosmwasm_std::{StdResult, Uint128, Uint64};

use crate::error::ContractError;
use crate::state::Schedule;

/// Block time at which the last tranche unlocks.
pub fn final_time(start: u64, duration: u64, num_vestings: u32) -> StdResult<u64> {
    let end = Uint64::new(duration)
        .checked_mul(Uint64::from(num_vestings))?
        .checked_add(Uint64::new(start))?;
    Ok(end.u64())
}

/// Check construction parameters, returning the final unlock time.
pub fn validate_schedule(
    start: u64,
    duration: u64,
    num_vestings: u32,
    now: u64,
) -> Result<u64, ContractError> {
    if duration == 0 {
        return Err(ContractError::InvalidDuration);
    }
    if num_vestings == 0 {
        return Err(ContractError::InvalidNumVestings);
    }

    let end = final_time(start, duration, num_vestings)?;
    if end < now {
        return Err(ContractError::InvalidFinalTime {
            final_time: end,
            now,
        });
    }
    Ok(end)
}

/// Number of tranches unlocked at `now`.
pub fn vestings_elapsed(schedule: &Schedule, now: u64) -> u32 {
    if now < schedule.start {
        return 0;
    }
    let elapsed = (now - schedule.start) / schedule.duration;
    elapsed.min(u64::from(schedule.num_vestings)) as u32
}

/// Portion of `total` unlocked at `now`.
pub fn vested_amount(schedule: &Schedule, total: Uint128, now: u64) -> Uint128 {
    let elapsed = vestings_elapsed(schedule, now);
    if elapsed == schedule.num_vestings {
        total
    } else {
        total.multiply_ratio(elapsed, schedule.num_vestings)
    }
}

/// Amount that `Release` would pay out at `now`.
pub fn releasable(
    schedule: &Schedule,
    released: Uint128,
    balance: Uint128,
    now: u64,
) -> StdResult<Uint128> {
    let total = released.checked_add(balance)?;
    Ok(vested_amount(schedule, total, now).saturating_sub(released))
}
