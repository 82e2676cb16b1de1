//! Query handlers for the mintable token contract.
//!
//! CW20 queries are served by `cw20_base` directly from `contract::query`.

use cosmwasm_std::{Deps, Env, StdError, StdResult, Uint128};

use crate::error::ContractError;
use crate::execute::current_domain_separator;
use crate::limits::materialize_limit;
use crate::msg::{
    DomainSeparatorResponse, MinterByIndexResponse, MinterConfigResponse, MinterCountResponse,
    MintingLimitResponse, PermitNonceResponse,
};
use crate::state::{MINTERS, MINTER_COUNT, MINTER_LIMITS, PERMIT_NONCES};

/// Stored limit state; all zero for an address that is not a minter.
pub fn query_minter_config(deps: Deps, minter: String) -> StdResult<MinterConfigResponse> {
    let minter = deps.api.addr_validate(&minter)?;
    let Some(limit) = MINTER_LIMITS.may_load(deps.storage, &minter)? else {
        return Ok(MinterConfigResponse {
            minter,
            max_limit: Uint128::zero(),
            current_limit: Uint128::zero(),
            last_updated: 0,
            duration: 0,
        });
    };

    Ok(MinterConfigResponse {
        minter,
        max_limit: limit.max_limit,
        current_limit: limit.current_limit,
        last_updated: limit.last_updated,
        duration: limit.duration,
    })
}

pub fn query_minter_count(deps: Deps) -> StdResult<MinterCountResponse> {
    let count = MINTER_COUNT.may_load(deps.storage)?.unwrap_or(0);
    Ok(MinterCountResponse { count })
}

pub fn query_minter_by_index(deps: Deps, index: u32) -> StdResult<MinterByIndexResponse> {
    let minter = MINTERS
        .may_load(deps.storage, index)?
        .ok_or_else(|| StdError::generic_err(ContractError::InvalidIndex { index }.to_string()))?;
    Ok(MinterByIndexResponse { minter })
}

pub fn query_minting_max_limit_of(deps: Deps, minter: String) -> StdResult<MintingLimitResponse> {
    let minter = deps.api.addr_validate(&minter)?;
    let limit = MINTER_LIMITS
        .may_load(deps.storage, &minter)?
        .map(|l| l.max_limit)
        .unwrap_or_default();
    Ok(MintingLimitResponse { limit })
}

/// Refilled limit as of the current block, without persisting it.
pub fn query_minting_current_limit_of(
    deps: Deps,
    env: Env,
    minter: String,
) -> StdResult<MintingLimitResponse> {
    let minter = deps.api.addr_validate(&minter)?;
    let limit = match MINTER_LIMITS.may_load(deps.storage, &minter)? {
        Some(l) => materialize_limit(&l, env.block.time.seconds())?,
        None => Uint128::zero(),
    };
    Ok(MintingLimitResponse { limit })
}

pub fn query_permit_nonce(deps: Deps, owner: String) -> StdResult<PermitNonceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let nonce = PERMIT_NONCES.may_load(deps.storage, &owner)?.unwrap_or(0);
    Ok(PermitNonceResponse { nonce })
}

pub fn query_domain_separator(deps: Deps, env: Env) -> StdResult<DomainSeparatorResponse> {
    let separator = current_domain_separator(deps.storage, &env)?;
    Ok(DomainSeparatorResponse {
        domain_separator: hex::encode(separator),
    })
}
