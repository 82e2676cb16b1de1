//! Token Vesting Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::execute_release;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_duration, query_num_vestings, query_releasable_amount, query_released, query_schedule,
    query_start,
};
use crate::schedule::validate_schedule;
use crate::state::{Schedule, CONTRACT_NAME, CONTRACT_VERSION, RELEASED, SCHEDULE};
use common::ownership::{
    accept_ownership, cancel_ownership_transfer, initialize_owner, query_ownership,
    transfer_ownership,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let token = deps
        .api
        .addr_validate(&msg.token)
        .map_err(|_| ContractError::InvalidToken {
            token: msg.token.clone(),
        })?;
    let end = validate_schedule(
        msg.start,
        msg.duration,
        msg.num_vestings,
        env.block.time.seconds(),
    )?;
    let beneficiary = deps.api.addr_validate(&msg.beneficiary)?;

    initialize_owner(deps.storage, &beneficiary)?;
    SCHEDULE.save(
        deps.storage,
        &Schedule {
            token: token.clone(),
            start: msg.start,
            duration: msg.duration,
            num_vestings: msg.num_vestings,
        },
    )?;
    RELEASED.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("beneficiary", beneficiary)
        .add_attribute("token", token)
        .add_attribute("start", msg.start.to_string())
        .add_attribute("duration", msg.duration.to_string())
        .add_attribute("num_vestings", msg.num_vestings.to_string())
        .add_attribute("end", end.to_string()))
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
        ExecuteMsg::Release {} => execute_release(deps, env),
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
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Schedule {} => to_json_binary(&query_schedule(deps)?),
        QueryMsg::ReleasableAmount {} => to_json_binary(&query_releasable_amount(deps, env)?),
        QueryMsg::Released {} => to_json_binary(&query_released(deps)?),
        QueryMsg::Start {} => to_json_binary(&query_start(deps)?),
        QueryMsg::Duration {} => to_json_binary(&query_duration(deps)?),
        QueryMsg::NumVestings {} => to_json_binary(&query_num_vestings(deps)?),
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
