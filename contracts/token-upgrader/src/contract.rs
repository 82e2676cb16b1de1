//! Token Upgrader Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_initialize, execute_pause, execute_unpause, execute_upgrade_token,
    execute_upgrade_token_by_permit, execute_withdraw_cw20_token, execute_withdraw_native,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_stats};
use crate::state::{UpgradeStats, CONTRACT_NAME, CONTRACT_VERSION, PAUSED, STATS};
use common::ownership::{
    accept_ownership, cancel_ownership_transfer, initialize_owner, query_ownership,
    transfer_ownership,
};
use common::PermitSignature;

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    initialize_owner(deps.storage, &owner)?;

    PAUSED.save(deps.storage, &false)?;
    STATS.save(
        deps.storage,
        &UpgradeStats {
            total_upgrades: 0,
            total_old_collected: Uint128::zero(),
            total_new_distributed: Uint128::zero(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Initialize {
            old_token,
            new_token,
        } => execute_initialize(deps, info, old_token, new_token),
        ExecuteMsg::UpgradeToken { amount } => execute_upgrade_token(deps, env, info, amount),
        ExecuteMsg::UpgradeTokenByPermit {
            amount,
            deadline,
            v,
            r,
            s,
        } => execute_upgrade_token_by_permit(
            deps,
            env,
            info,
            amount,
            deadline,
            PermitSignature::new(v, r, s),
        ),

        // Owner
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::WithdrawCw20Token {
            token,
            recipient,
            amount,
        } => execute_withdraw_cw20_token(deps, info, token, recipient, amount),
        ExecuteMsg::WithdrawNative {
            denom,
            recipient,
            amount,
        } => execute_withdraw_native(deps, info, denom, recipient, amount),
        ExecuteMsg::TransferOwnership { new_owner } => Ok(transfer_ownership(
            deps.storage,
            deps.api,
            &info.sender,
            &new_owner,
        )?),
        ExecuteMsg::AcceptOwnership {} => Ok(accept_ownership(deps.storage, &info.sender)?),
        ExecuteMsg::CancelOwnershipTransfer {} => {
            Ok(cancel_ownership_transfer(deps.storage, &info.sender)?)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::Ownership {} => to_json_binary(&query_ownership(deps.storage)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
