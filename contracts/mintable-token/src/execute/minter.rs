//! Minter registry handlers.
//!
//! This module handles:
//! - Minter limit configuration (owner)
//! - Minter removal by index hint (owner)
//! - Rate-limited minting (active minters)

use cosmwasm_std::{Addr, DepsMut, Env, MessageInfo, Response, StdResult, Storage, Uint128};
use cw20_base::state::{BALANCES, TOKEN_INFO};

use crate::error::ContractError;
use crate::limits::{consume_limit, reconfigure_limit, validate_limit_params};
use crate::state::{MINTERS, MINTER_COUNT, MINTER_INDEX, MINTER_LIMITS};
use common::ownership::assert_owner;

// ============================================================================
// Configuration
// ============================================================================

/// Grant or adjust a minter's rate limit.
pub fn execute_set_minter_limit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    minter: String,
    max_limit: Uint128,
    duration: u64,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    validate_limit_params(max_limit, duration)?;

    let minter_addr = deps.api.addr_validate(&minter)?;
    let now = env.block.time.seconds();

    let existing = MINTER_LIMITS.may_load(deps.storage, &minter_addr)?;
    if existing.is_none() {
        push_minter(deps.storage, &minter_addr)?;
    }

    let limit = reconfigure_limit(existing.as_ref(), max_limit, duration, now)?;
    MINTER_LIMITS.save(deps.storage, &minter_addr, &limit)?;

    Ok(Response::new()
        .add_attribute("method", "set_minter_limit")
        .add_attribute("minter", minter_addr)
        .add_attribute("max_limit", max_limit)
        .add_attribute("current_limit", limit.current_limit)
        .add_attribute("duration", duration.to_string()))
}

/// Remove a minter. `index_hint` must be the minter's current position.
pub fn execute_remove_minter_by_index_hint(
    deps: DepsMut,
    info: MessageInfo,
    minter: String,
    index_hint: u32,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let minter_addr = deps.api.addr_validate(&minter)?;
    let moved = swap_remove_minter(deps.storage, &minter_addr, index_hint)?;
    MINTER_LIMITS.remove(deps.storage, &minter_addr);

    let mut res = Response::new()
        .add_attribute("method", "remove_minter")
        .add_attribute("minter", minter_addr)
        .add_attribute("index", index_hint.to_string());
    if let Some(moved) = moved {
        res = res.add_attribute("moved_minter", moved);
    }
    Ok(res)
}

// ============================================================================
// Minting
// ============================================================================

/// Mint from the caller's replenishing limit.
pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    // Unknown callers have no limit at all
    let limit = MINTER_LIMITS
        .may_load(deps.storage, &info.sender)?
        .ok_or(ContractError::NotEnoughLimits {
            available: Uint128::zero(),
            requested: amount,
        })?;

    let updated = consume_limit(&limit, amount, env.block.time.seconds())?;
    MINTER_LIMITS.save(deps.storage, &info.sender, &updated)?;

    credit_mint(deps.storage, &recipient_addr, amount)?;

    Ok(Response::new()
        .add_attribute("method", "mint")
        .add_attribute("minter", info.sender)
        .add_attribute("recipient", recipient_addr)
        .add_attribute("amount", amount)
        .add_attribute("remaining_limit", updated.current_limit))
}

/// Increase `recipient`'s balance and the total supply.
pub(crate) fn credit_mint(
    storage: &mut dyn Storage,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<()> {
    TOKEN_INFO.update(storage, |mut info| -> StdResult<_> {
        info.total_supply = info.total_supply.checked_add(amount)?;
        Ok(info)
    })?;
    BALANCES.update(storage, recipient, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;
    Ok(())
}

// ============================================================================
// Minter Index
// ============================================================================

/// Append a minter to the dense index.
fn push_minter(storage: &mut dyn Storage, minter: &Addr) -> StdResult<u32> {
    let index = MINTER_COUNT.may_load(storage)?.unwrap_or(0);
    MINTERS.save(storage, index, minter)?;
    MINTER_INDEX.save(storage, minter, &index)?;
    MINTER_COUNT.save(storage, &(index + 1))?;
    Ok(index)
}

/// Remove a minter by swapping the last entry into its slot.
///
/// Returns the minter that was moved into `index_hint`, if any.
fn swap_remove_minter(
    storage: &mut dyn Storage,
    minter: &Addr,
    index_hint: u32,
) -> Result<Option<Addr>, ContractError> {
    let index = MINTER_INDEX
        .may_load(storage, minter)?
        .ok_or(ContractError::InvalidIndex { index: index_hint })?;
    if index != index_hint {
        return Err(ContractError::InvalidIndexHint { index_hint });
    }

    let last = MINTER_COUNT.load(storage)? - 1;
    let moved = if index != last {
        let tail = MINTERS.load(storage, last)?;
        MINTERS.save(storage, index, &tail)?;
        MINTER_INDEX.save(storage, &tail, &index)?;
        Some(tail)
    } else {
        None
    };

    MINTERS.remove(storage, last);
    MINTER_INDEX.remove(storage, minter);
    MINTER_COUNT.save(storage, &last)?;

    Ok(moved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;

    fn addrs(storage: &dyn Storage) -> Vec<Addr> {
        let count = MINTER_COUNT.may_load(storage).unwrap().unwrap_or(0);
        (0..count)
            .map(|i| MINTERS.load(storage, i).unwrap())
            .collect()
    }

    fn assert_index_consistent(storage: &dyn Storage) {
        for (i, minter) in addrs(storage).iter().enumerate() {
            assert_eq!(MINTER_INDEX.load(storage, minter).unwrap(), i as u32);
        }
    }

    #[test]
    fn test_swap_remove_middle() {
        let mut deps = mock_dependencies();
        let [a, b, c] = ["a", "b", "c"].map(Addr::unchecked);
        for m in [&a, &b, &c] {
            push_minter(deps.as_mut().storage, m).unwrap();
        }

        let moved = swap_remove_minter(deps.as_mut().storage, &a, 0).unwrap();
        assert_eq!(moved, Some(c.clone()));
        assert_eq!(addrs(deps.as_ref().storage), vec![c.clone(), b.clone()]);
        assert_index_consistent(deps.as_ref().storage);
        assert!(MINTER_INDEX.may_load(deps.as_ref().storage, &a).unwrap().is_none());
    }

    #[test]
    fn test_swap_remove_last() {
        let mut deps = mock_dependencies();
        let [a, b] = ["a", "b"].map(Addr::unchecked);
        push_minter(deps.as_mut().storage, &a).unwrap();
        push_minter(deps.as_mut().storage, &b).unwrap();

        let moved = swap_remove_minter(deps.as_mut().storage, &b, 1).unwrap();
        assert_eq!(moved, None);
        assert_eq!(addrs(deps.as_ref().storage), vec![a]);
        assert!(MINTERS.may_load(deps.as_ref().storage, 1).unwrap().is_none());
    }

    #[test]
    fn test_swap_remove_rejects_bad_hint() {
        let mut deps = mock_dependencies();
        let [a, b] = ["a", "b"].map(Addr::unchecked);
        push_minter(deps.as_mut().storage, &a).unwrap();
        push_minter(deps.as_mut().storage, &b).unwrap();

        let err = swap_remove_minter(deps.as_mut().storage, &a, 1).unwrap_err();
        assert_eq!(err, ContractError::InvalidIndexHint { index_hint: 1 });

        let err = swap_remove_minter(deps.as_mut().storage, &Addr::unchecked("z"), 0).unwrap_err();
        assert_eq!(err, ContractError::InvalidIndex { index: 0 });

        // Nothing changed
        assert_eq!(addrs(deps.as_ref().storage), vec![a, b]);
    }

    #[test]
    fn test_credit_mint_updates_supply() {
        let mut deps = mock_dependencies();
        TOKEN_INFO
            .save(
                deps.as_mut().storage,
                &cw20_base::state::TokenInfo {
                    name: "Token".to_string(),
                    symbol: "TKN".to_string(),
                    decimals: 6,
                    total_supply: Uint128::new(10),
                    mint: None,
                },
            )
            .unwrap();

        let holder = Addr::unchecked("holder");
        credit_mint(deps.as_mut().storage, &holder, Uint128::new(5)).unwrap();
        credit_mint(deps.as_mut().storage, &holder, Uint128::new(7)).unwrap();

        let info = TOKEN_INFO.load(deps.as_ref().storage).unwrap();
        assert_eq!(info.total_supply, Uint128::new(22));
        assert_eq!(
            BALANCES.load(deps.as_ref().storage, &holder).unwrap(),
            Uint128::new(12)
        );
    }
}
