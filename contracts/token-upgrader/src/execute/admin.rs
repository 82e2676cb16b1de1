//! Owner-only handlers: pause and stray-fund withdrawals.
//!
//! Withdrawals ignore the pause flag so funds stay recoverable while
//! upgrades are halted.

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::PAUSED;
use common::ownership::assert_owner;
use common::AssetInfo;

// ============================================================================
// Pause
// ============================================================================

/// Pause both upgrade paths.
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    if PAUSED.load(deps.storage)? {
        return Err(ContractError::EnforcedPause);
    }

    PAUSED.save(deps.storage, &true)?;

    Ok(Response::new().add_attribute("method", "pause"))
}

/// Resume upgrades.
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    if !PAUSED.load(deps.storage)? {
        return Err(ContractError::ExpectedPause);
    }

    PAUSED.save(deps.storage, &false)?;

    Ok(Response::new().add_attribute("method", "unpause"))
}

// ============================================================================
// Withdrawals
// ============================================================================

pub fn execute_withdraw_cw20_token(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let asset = AssetInfo::Cw20 {
        contract_addr: deps.api.addr_validate(&token)?,
    };
    withdraw(deps, info, asset, recipient, amount)
}

pub fn execute_withdraw_native(
    deps: DepsMut,
    info: MessageInfo,
    denom: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    withdraw(deps, info, AssetInfo::Native { denom }, recipient, amount)
}

fn withdraw(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    let msg = asset.transfer_msg(&recipient_addr, amount)?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("method", "withdraw")
        .add_attribute("asset", asset.as_str())
        .add_attribute("recipient", recipient_addr)
        .add_attribute("amount", amount))
}
