//! Minter Limit Module
//!
//! Token-bucket arithmetic for bridge minters. Nothing here ticks on a
//! schedule: the refilled limit is derived from `(last_updated, now)` each
//! time it is read or spent.
//!
//! ```text
//! elapsed      = now - last_updated
//! accrued      = current_limit + floor(elapsed * max_limit / duration)
//! materialized = min(accrued, max_limit)
//! ```
//!
//! The product `elapsed * max_limit` is evaluated in 256-bit arithmetic.

use cosmwasm_std::{StdResult, Uint128, Uint256};

use crate::error::ContractError;
use crate::state::{MinterLimit, MAX_MINTER_LIMIT};

/// Limit available to a minter at block time `now`.
///
/// Read-only: the caller decides whether to persist the result.
pub fn materialize_limit(limit: &MinterLimit, now: u64) -> StdResult<Uint128> {
    let elapsed = now.saturating_sub(limit.last_updated);

    let refill = Uint256::from(limit.max_limit)
        .checked_mul(Uint256::from(elapsed))?
        .checked_div(Uint256::from(limit.duration))?;
    let accrued = Uint256::from(limit.current_limit).checked_add(refill)?;
    let capped = accrued.min(Uint256::from(limit.max_limit));

    Ok(Uint128::try_from(capped)?)
}

/// Validate a requested minter configuration.
pub fn validate_limit_params(max_limit: Uint128, duration: u64) -> Result<(), ContractError> {
    if duration == 0 {
        return Err(ContractError::InvalidDuration);
    }
    if max_limit > MAX_MINTER_LIMIT {
        return Err(ContractError::LimitsTooHigh {
            max_limit,
            ceiling: MAX_MINTER_LIMIT,
        });
    }
    Ok(())
}

/// New limit state after the owner (re)configures a minter at `now`.
///
/// A new minter starts full. For an existing minter the refill accrued under
/// the old parameters is materialized first; then a raised ceiling adds the
/// difference on top, while a lowered ceiling clamps to the new maximum.
pub fn reconfigure_limit(
    existing: Option<&MinterLimit>,
    max_limit: Uint128,
    duration: u64,
    now: u64,
) -> StdResult<MinterLimit> {
    let current_limit = match existing {
        None => max_limit,
        Some(old) => {
            let materialized = materialize_limit(old, now)?;
            if max_limit > old.max_limit {
                materialized.checked_add(max_limit.checked_sub(old.max_limit)?)?
            } else {
                materialized.min(max_limit)
            }
        }
    };

    Ok(MinterLimit {
        max_limit,
        current_limit,
        last_updated: now,
        duration,
    })
}

/// Spend `amount` from a minter's limit at `now`.
pub fn consume_limit(
    limit: &MinterLimit,
    amount: Uint128,
    now: u64,
) -> Result<MinterLimit, ContractError> {
    let available = materialize_limit(limit, now)?;
    if amount > available {
        return Err(ContractError::NotEnoughLimits {
            available,
            requested: amount,
        });
    }

    Ok(MinterLimit {
        current_limit: available - amount,
        last_updated: now,
        ..limit.clone()
    })
}
