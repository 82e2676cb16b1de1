//! Mintable Token Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `limits` - Minter limit arithmetic
//!
//! CW20 messages are forwarded to `cw20_base` unchanged.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;
use cw20_base::allowances::{
    execute_burn_from, execute_decrease_allowance, execute_increase_allowance,
    execute_send_from, execute_transfer_from, query_allowance,
};
use cw20_base::contract::{
    execute_burn, execute_send, execute_transfer, query_balance, query_token_info,
};

use crate::error::ContractError;
use crate::execute::{
    execute_mint, execute_owner_mint, execute_permit, execute_remove_minter_by_index_hint,
    execute_set_minter_limit, execute_set_name,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_domain_separator, query_minter_by_index, query_minter_config, query_minter_count,
    query_minting_current_limit_of, query_minting_max_limit_of, query_permit_nonce,
};
use crate::state::{PermitDomain, CONTRACT_NAME, CONTRACT_VERSION, MINTER_COUNT, PERMIT_DOMAIN};
use common::ownership::{
    accept_ownership, cancel_ownership_transfer, initialize_owner, query_ownership,
    transfer_ownership,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if !is_valid_account_prefix(&msg.account_prefix) {
        return Err(ContractError::InvalidAccountPrefix {
            prefix: msg.account_prefix,
        });
    }
    let owner = deps.api.addr_validate(&msg.owner)?;

    // Ledger setup (name/symbol/decimals validation, initial balances).
    // Minting is handled here, so the base minter stays unset.
    let base_msg = cw20_base::msg::InstantiateMsg {
        name: msg.name.clone(),
        symbol: msg.symbol,
        decimals: msg.decimals,
        initial_balances: msg.initial_balances,
        mint: None,
        marketing: None,
    };
    cw20_base::contract::instantiate(deps.branch(), env, info, base_msg)?;

    // cw20-base records its own version; replace it with ours
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    initialize_owner(deps.storage, &owner)?;
    MINTER_COUNT.save(deps.storage, &0u32)?;
    PERMIT_DOMAIN.save(
        deps.storage,
        &PermitDomain {
            name: msg.name.clone(),
            account_prefix: msg.account_prefix.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("name", msg.name)
        .add_attribute("account_prefix", msg.account_prefix))
}

fn is_valid_account_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix
            .bytes()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
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
        // CW20 ledger
        ExecuteMsg::Transfer { recipient, amount } => {
            Ok(execute_transfer(deps, env, info, recipient, amount)?)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => Ok(execute_transfer_from(deps, env, info, owner, recipient, amount)?),
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => Ok(execute_send(deps, env, info, contract, amount, msg)?),
        ExecuteMsg::SendFrom {
            owner,
            contract,
            amount,
            msg,
        } => Ok(execute_send_from(deps, env, info, owner, contract, amount, msg)?),
        ExecuteMsg::Burn { amount } => Ok(execute_burn(deps, env, info, amount)?),
        ExecuteMsg::BurnFrom { owner, amount } => {
            Ok(execute_burn_from(deps, env, info, owner, amount)?)
        }
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_increase_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_decrease_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::Permit {
            owner,
            spender,
            amount,
            deadline,
            v,
            r,
            s,
        } => execute_permit(deps, env, owner, spender, amount, deadline, v, r, s),

        // Minter registry
        ExecuteMsg::SetMinterLimit {
            minter,
            max_limit,
            duration,
        } => execute_set_minter_limit(deps, env, info, minter, max_limit, duration),
        ExecuteMsg::RemoveMinterByIndexHint { minter, index_hint } => {
            execute_remove_minter_by_index_hint(deps, info, minter, index_hint)
        }
        ExecuteMsg::Mint { recipient, amount } => {
            execute_mint(deps, env, info, recipient, amount)
        }

        // Owner
        ExecuteMsg::OwnerMint { recipient, amount } => {
            execute_owner_mint(deps, info, recipient, amount)
        }
        ExecuteMsg::SetName { name } => execute_set_name(deps, info, name),
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
        // CW20 ledger
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }

        // Minter registry
        QueryMsg::MinterConfig { minter } => to_json_binary(&query_minter_config(deps, minter)?),
        QueryMsg::MinterCount {} => to_json_binary(&query_minter_count(deps)?),
        QueryMsg::MinterByIndex { index } => to_json_binary(&query_minter_by_index(deps, index)?),
        QueryMsg::MintingMaxLimitOf { minter } => {
            to_json_binary(&query_minting_max_limit_of(deps, minter)?)
        }
        QueryMsg::MintingCurrentLimitOf { minter } => {
            to_json_binary(&query_minting_current_limit_of(deps, env, minter)?)
        }

        // Permit
        QueryMsg::PermitNonce { owner } => to_json_binary(&query_permit_nonce(deps, owner)?),
        QueryMsg::DomainSeparator {} => to_json_binary(&query_domain_separator(deps, env)?),

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
