//! Initialization and token upgrade handlers.

use cosmwasm_std::{
    Addr, CosmosMsg, DepsMut, Env, MessageInfo, Response, StdResult, Storage, Uint128,
};

use crate::error::ContractError;
use crate::state::{TokenPair, UpgradeStats, PAUSED, STATS, TOKEN_PAIR, UPGRADE_RATE};
use common::asset::{cw20_transfer_from_msg, cw20_transfer_msg};
use common::ownership::assert_owner;
use common::permit::permit_msg;
use common::PermitSignature;

// ============================================================================
// Initialization
// ============================================================================

pub fn execute_initialize(
    deps: DepsMut,
    info: MessageInfo,
    old_token: String,
    new_token: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    if TOKEN_PAIR.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    let pair = TokenPair {
        old_token: deps.api.addr_validate(&old_token)?,
        new_token: deps.api.addr_validate(&new_token)?,
    };
    TOKEN_PAIR.save(deps.storage, &pair)?;

    Ok(Response::new()
        .add_attribute("method", "initialize")
        .add_attribute("old_token", pair.old_token)
        .add_attribute("new_token", pair.new_token))
}

// ============================================================================
// Upgrade
// ============================================================================

/// Upgrade using an allowance the caller granted beforehand.
pub fn execute_upgrade_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let pair = load_active_pair(deps.storage)?;
    let messages = upgrade(deps.storage, &env, &pair, &info.sender, amount)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "upgrade_token")
        .add_attribute("holder", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("new_amount", upgraded_amount(amount)?))
}

/// Upgrade after submitting the caller's permit to the old token.
///
/// Nonce and expiry checks are the old token's; a rejected permit reverts
/// the whole upgrade.
pub fn execute_upgrade_token_by_permit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    deadline: u64,
    signature: PermitSignature,
) -> Result<Response, ContractError> {
    let pair = load_active_pair(deps.storage)?;

    let permit = permit_msg(
        &pair.old_token,
        &info.sender,
        &env.contract.address,
        amount,
        deadline,
        signature,
    )?;
    let mut messages = vec![permit];
    messages.extend(upgrade(deps.storage, &env, &pair, &info.sender, amount)?);

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "upgrade_token_by_permit")
        .add_attribute("holder", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("new_amount", upgraded_amount(amount)?)
        .add_attribute("deadline", deadline.to_string()))
}

/// Token pair, provided the contract is initialized and running.
fn load_active_pair(storage: &dyn Storage) -> Result<TokenPair, ContractError> {
    let pair = TOKEN_PAIR
        .may_load(storage)?
        .ok_or(ContractError::Uninitialized)?;
    if PAUSED.load(storage)? {
        return Err(ContractError::EnforcedPause);
    }
    Ok(pair)
}

fn upgraded_amount(amount: Uint128) -> StdResult<Uint128> {
    Ok(amount.checked_mul(Uint128::new(UPGRADE_RATE))?)
}

/// Record the upgrade and return the collect / pay-out messages.
///
/// Stats are written here, before either message is dispatched.
fn upgrade(
    storage: &mut dyn Storage,
    env: &Env,
    pair: &TokenPair,
    holder: &Addr,
    amount: Uint128,
) -> Result<Vec<CosmosMsg>, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let new_amount = upgraded_amount(amount)?;

    STATS.update(storage, |stats| -> StdResult<_> {
        Ok(UpgradeStats {
            total_upgrades: stats.total_upgrades + 1,
            total_old_collected: stats.total_old_collected.checked_add(amount)?,
            total_new_distributed: stats.total_new_distributed.checked_add(new_amount)?,
        })
    })?;

    Ok(vec![
        cw20_transfer_from_msg(&pair.old_token, holder, &env.contract.address, amount)?,
        cw20_transfer_msg(&pair.new_token, holder, new_amount)?,
    ])
}
